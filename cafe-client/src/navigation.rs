//! Cross-navigation from the café grid to the employee grid
//!
//! Clicking a café's employee count opens the employees view filtered to
//! that café. The café name travels as the `cafe` query parameter.

use urlencoding::{decode, encode};

use crate::filter::FilterState;

/// Path of the employees view
pub const EMPLOYEES_PATH: &str = "/employees";

/// Query parameter carrying the café name
pub const CAFE_PARAM: &str = "cafe";

/// Navigation target for the employees of `cafe_name`
pub fn employees_for_cafe(cafe_name: &str) -> String {
    EmployeesRoute::for_cafe(cafe_name).target()
}

/// Parameters understood by the employees view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeesRoute {
    pub cafe: Option<String>,
}

impl EmployeesRoute {
    pub fn for_cafe(cafe_name: impl Into<String>) -> Self {
        Self {
            cafe: Some(cafe_name.into()),
        }
    }

    /// Read the route from a target such as `/employees?cafe=Cafe%20ABC`.
    ///
    /// Accepts a full target, a bare query (`?cafe=...`) or a query without
    /// the leading `?`. The first `cafe` parameter wins; an empty value is
    /// treated as absent.
    pub fn parse(target: &str) -> Self {
        let target = target.split('#').next().unwrap_or_default();
        let query = match target.split_once('?') {
            Some((_, query)) => query,
            None if target.contains('=') => target,
            None => "",
        };

        let cafe = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| decode_component(key) == CAFE_PARAM)
            .map(|(_, value)| decode_component(value))
            .filter(|value| !value.is_empty());

        Self { cafe }
    }

    /// Encoded navigation target
    pub fn target(&self) -> String {
        match &self.cafe {
            Some(name) => format!("{EMPLOYEES_PATH}?{CAFE_PARAM}={}", encode(name)),
            None => EMPLOYEES_PATH.to_string(),
        }
    }

    /// Seed the employees filter; a route without a café leaves it alone.
    ///
    /// Returns `true` if the selection changed.
    pub fn apply(&self, filter: &mut FilterState) -> bool {
        match &self.cafe {
            Some(name) => filter.set_selected(name.clone()),
            None => false,
        }
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match decode(&spaced) {
        Ok(value) => value.into_owned(),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_round_trip() {
        let target = employees_for_cafe("Cafe ABC");
        assert_eq!(target, "/employees?cafe=Cafe%20ABC");
        assert_eq!(EmployeesRoute::parse(&target).cafe.as_deref(), Some("Cafe ABC"));
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!(
            EmployeesRoute::parse("?cafe=Cafe+ABC").cafe.as_deref(),
            Some("Cafe ABC")
        );
        assert_eq!(
            EmployeesRoute::parse("sort=name&cafe=Bean%26Co").cafe.as_deref(),
            Some("Bean&Co")
        );
        assert_eq!(
            EmployeesRoute::parse("/employees?cafe=A&cafe=B#top").cafe.as_deref(),
            Some("A")
        );
        assert_eq!(EmployeesRoute::parse("/employees"), EmployeesRoute::default());
        assert_eq!(EmployeesRoute::parse("/employees?cafe="), EmployeesRoute::default());
    }

    #[test]
    fn test_apply_seeds_filter() {
        let mut filter = FilterState::new();
        assert!(!EmployeesRoute::default().apply(&mut filter));
        assert!(filter.selected().is_none());

        assert!(EmployeesRoute::for_cafe("Cafe ABC").apply(&mut filter));
        assert_eq!(filter.selected(), Some("Cafe ABC"));
    }

    #[test]
    fn test_route_without_cafe() {
        assert_eq!(EmployeesRoute::default().target(), "/employees");
    }
}
