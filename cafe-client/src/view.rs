//! Page-level orchestration
//!
//! Each view owns one grid and one edit session and knows the order in
//! which its page loads data.

use shared::{Cafe, Employee};

use crate::grid::{GridController, GridState};
use crate::http::HttpClient;
use crate::navigation::{EmployeesRoute, employees_for_cafe};
use crate::resource::{Cafes, Employees, ResourceClient};
use crate::session::EditSession;
use crate::ClientResult;

/// The café page: location filter, grid and add/edit form
#[derive(Debug)]
pub struct CafesView<H: HttpClient + Clone> {
    pub grid: GridController<Cafes, H>,
    pub editor: EditSession<Cafes>,
}

impl<H: HttpClient + Clone> CafesView<H> {
    pub fn new(client: ResourceClient<Cafes, H>) -> Self {
        Self {
            grid: GridController::new(client),
            editor: EditSession::new(),
        }
    }

    /// Initial unfiltered load; also derives the location options
    pub async fn mount(&mut self) -> &GridState<Cafe> {
        self.grid.filter_mut().clear();
        self.grid.refresh().await
    }

    /// Filter by location, empty for all
    pub async fn select_location(&mut self, location: impl Into<String>) -> &GridState<Cafe> {
        self.grid.select(location).await
    }

    pub fn locations(&self) -> &[String] {
        self.grid.filter().options()
    }

    /// Target of the employee-count link for `cafe`
    pub fn employees_link(&self, cafe: &Cafe) -> String {
        employees_for_cafe(&cafe.name)
    }

    pub async fn submit(&mut self) -> ClientResult<Cafe> {
        self.grid.submit(&mut self.editor).await
    }
}

/// The employee page: café filter, grid and add/edit form
#[derive(Debug)]
pub struct EmployeesView<H: HttpClient + Clone> {
    pub grid: GridController<Employees, H>,
    pub editor: EditSession<Employees>,
    cafe_client: ResourceClient<Cafes, H>,
    cafes: Vec<Cafe>,
}

impl<H: HttpClient + Clone> EmployeesView<H> {
    pub fn new(client: ResourceClient<Employees, H>, cafe_client: ResourceClient<Cafes, H>) -> Self {
        Self {
            grid: GridController::new(client),
            editor: EditSession::new(),
            cafe_client,
            cafes: Vec::new(),
        }
    }

    /// Load the café list, apply the route's café filter, then fetch
    /// employees.
    ///
    /// A failed café load leaves the filter without options but still
    /// loads employees.
    pub async fn mount(&mut self, route: &EmployeesRoute) -> &GridState<Employee> {
        self.reload_cafes().await;
        route.apply(self.grid.filter_mut());
        self.grid.refresh().await
    }

    /// Refresh the read-only café list and the filter options built on it
    pub async fn reload_cafes(&mut self) {
        match self.cafe_client.list(None).await {
            Ok(cafes) => {
                self.grid
                    .filter_mut()
                    .replace_options(cafes.iter().map(|c| c.name.as_str()));
                self.cafes = cafes;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch cafes");
            }
        }
    }

    /// Filter by café name, empty for all
    pub async fn select_cafe(&mut self, cafe_name: impl Into<String>) -> &GridState<Employee> {
        self.grid.select(cafe_name).await
    }

    pub fn cafes(&self) -> &[Cafe] {
        &self.cafes
    }

    /// `(id, name)` pairs for the café dropdown of the form
    pub fn cafe_choices(&self) -> Vec<(&str, &str)> {
        self.cafes
            .iter()
            .map(|c| (c.id.as_str(), c.name.as_str()))
            .collect()
    }

    /// Fetch one employee and open it for editing
    pub async fn open_edit_by_id(&mut self, id: &str) -> ClientResult<()> {
        let employee = self.grid.client().get(id).await?;
        self.editor.open_edit(&employee);
        Ok(())
    }

    pub async fn submit(&mut self) -> ClientResult<Employee> {
        self.grid.submit(&mut self.editor).await
    }
}
