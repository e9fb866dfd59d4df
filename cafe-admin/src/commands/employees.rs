use anyhow::Result;
use cafe_client::{
    EmployeeForm, EmployeesRoute, EmployeesView, NetworkHttpClient, RecordForm, ResourceClient,
    days_worked,
};
use chrono::Local;

use super::{delete_with_confirmation, print_page};
use crate::cli::{EmployeeCommand, EmployeeFields};
use crate::config::Config;
use crate::table::{EMPLOYEE_HEADERS, employee_rows};

pub async fn run(command: EmployeeCommand, config: &Config) -> Result<()> {
    let mut view = EmployeesView::new(
        ResourceClient::from_config(&config.client)?,
        ResourceClient::from_config(&config.client)?,
    );
    let today = Local::now().date_naive();

    match command {
        EmployeeCommand::List { cafe, route, page } => {
            let route = match (cafe, route) {
                (Some(cafe), _) => EmployeesRoute::for_cafe(cafe),
                (None, Some(target)) => EmployeesRoute::parse(&target),
                (None, None) => EmployeesRoute::default(),
            };
            view.mount(&route).await;
            print_page(&view.grid, page.page, EMPLOYEE_HEADERS, |rows| {
                employee_rows(rows, today)
            })?;
            let cafes = view.grid.filter().options();
            if !cafes.is_empty() {
                println!("Cafes: {}", cafes.join(", "));
            }
        }
        EmployeeCommand::Show { id } => {
            let employee = view.grid.client().get(&id).await?;
            let form = EmployeeForm::from(&employee);
            for field in EmployeeForm::FIELDS {
                println!("{:<14}{}", field_label(field), form.field(field).unwrap_or_default());
            }
            println!("{:<14}{}", "Cafe", employee.cafe_name.as_deref().unwrap_or_default());
            println!("{:<14}{}", "Days worked", days_worked(employee.start_date, today));
        }
        EmployeeCommand::Create { id, fields } => {
            view.editor.open_create();
            view.editor.set_field("id", id)?;
            submit(&mut view, &fields).await?;
        }
        EmployeeCommand::Update { id, fields } => {
            view.open_edit_by_id(&id).await?;
            submit(&mut view, &fields).await?;
        }
        EmployeeCommand::Delete { id, yes } => {
            if delete_with_confirmation(&mut view.grid, id.clone(), yes).await? {
                println!("Deleted employee {id}");
            } else {
                println!("Cancelled");
            }
        }
    }
    Ok(())
}

async fn submit(view: &mut EmployeesView<NetworkHttpClient>, fields: &EmployeeFields) -> Result<()> {
    for (field, value) in fields.assignments() {
        view.editor.set_field(field, value)?;
    }
    let employee = view.submit().await?;
    tracing::info!(id = %employee.id, "employee saved");
    println!("Saved employee {} ({})", employee.name, employee.id);
    Ok(())
}

/// Heading for a form field name in `show` output
fn field_label(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_labels() {
        let labels: Vec<String> = EmployeeForm::FIELDS.iter().map(|f| field_label(f)).collect();
        assert_eq!(
            labels,
            ["Id", "Name", "Email address", "Phone number", "Gender", "Start date", "Cafe id"]
        );
    }
}
