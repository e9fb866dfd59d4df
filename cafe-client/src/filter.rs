//! Grid filter state

/// The selected filter value and the choices offered for it.
///
/// Options are only ever replaced from the full, unfiltered population, so
/// narrowing the grid never narrows the list of choices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selected: Option<String>,
    options: Vec<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected value, `None` meaning "all"
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Select a value; an empty string clears the filter.
    ///
    /// Returns `true` if the selection changed.
    pub fn set_selected(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        let next = if value.trim().is_empty() {
            None
        } else {
            Some(value)
        };
        let changed = self.selected != next;
        self.selected = next;
        changed
    }

    /// Clear the selection; returns `true` if something was selected
    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Distinct choices in first-seen order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Replace the choices with the distinct non-empty values of `values`
    pub fn replace_options<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options: Vec<String> = Vec::new();
        for value in values {
            let value = value.as_ref();
            if value.is_empty() || options.iter().any(|o| o == value) {
                continue;
            }
            options.push(value.to_string());
        }
        self.options = options;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_selected_reports_changes() {
        let mut filter = FilterState::new();
        assert!(filter.selected().is_none());
        assert!(filter.set_selected("Tampines"));
        assert!(!filter.set_selected("Tampines"));
        assert_eq!(filter.selected(), Some("Tampines"));
        assert!(filter.set_selected(""));
        assert!(filter.selected().is_none());
        assert!(!filter.clear());
    }

    #[test]
    fn test_options_are_distinct_in_first_seen_order() {
        let mut filter = FilterState::new();
        filter.replace_options(["Orchard", "Tampines", "Orchard", "", "Bugis"]);
        assert_eq!(filter.options(), ["Orchard", "Tampines", "Bugis"]);
    }

    #[test]
    fn test_selection_does_not_touch_options() {
        let mut filter = FilterState::new();
        filter.replace_options(["Orchard", "Tampines"]);
        filter.set_selected("Tampines");
        assert_eq!(filter.options(), ["Orchard", "Tampines"]);
    }
}
