use anyhow::{Result, anyhow};
use cafe_client::{CafesView, NetworkHttpClient, ResourceClient, employees_for_cafe};

use super::{delete_with_confirmation, print_page};
use crate::cli::{CafeCommand, CafeFields};
use crate::config::Config;
use crate::table::{CAFE_HEADERS, cafe_rows};

pub async fn run(command: CafeCommand, config: &Config) -> Result<()> {
    if let CafeCommand::Link { name } = &command {
        println!("{}", employees_for_cafe(name));
        return Ok(());
    }

    let mut view = CafesView::new(ResourceClient::from_config(&config.client)?);
    view.mount().await;

    match command {
        CafeCommand::List { location, page } => {
            if let Some(location) = location {
                view.select_location(location).await;
            }
            print_page(&view.grid, page.page, CAFE_HEADERS, cafe_rows)?;
            let locations = view.locations();
            if !locations.is_empty() {
                println!("Locations: {}", locations.join(", "));
            }
        }
        CafeCommand::Create { fields } => {
            view.editor.open_create();
            submit(&mut view, &fields).await?;
        }
        CafeCommand::Update { id, fields } => {
            let cafe = view
                .grid
                .find(&id)
                .cloned()
                .ok_or_else(|| anyhow!("Cafe {id} not found"))?;
            view.editor.open_edit(&cafe);
            submit(&mut view, &fields).await?;
        }
        CafeCommand::Delete { id, yes } => {
            let employees = view.grid.find(&id).map(|c| c.employees);
            if delete_with_confirmation(&mut view.grid, id.clone(), yes).await? {
                println!(
                    "Deleted cafe {id} ({} employees removed)",
                    employees.unwrap_or_default()
                );
            } else {
                println!("Cancelled");
            }
        }
        CafeCommand::Link { .. } => {}
    }
    Ok(())
}

async fn submit(view: &mut CafesView<NetworkHttpClient>, fields: &CafeFields) -> Result<()> {
    for (field, value) in fields.assignments() {
        view.editor.set_field(field, value)?;
    }
    let cafe = view.submit().await?;
    tracing::info!(id = %cafe.id, "cafe saved");
    println!("Saved cafe {} ({})", cafe.name, cafe.id);
    Ok(())
}
