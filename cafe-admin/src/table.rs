//! Plain-text grid rendering

use cafe_client::{Cafe, Employee, days_worked};
use chrono::NaiveDate;

/// Render rows as left-aligned columns under a header
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, headers.iter().copied(), &widths);
    for row in rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

pub fn cafe_rows(cafes: &[Cafe]) -> Vec<Vec<String>> {
    cafes
        .iter()
        .map(|c| {
            vec![
                c.id.clone(),
                c.name.clone(),
                c.description.clone().unwrap_or_default(),
                c.employees.to_string(),
                c.location.clone(),
            ]
        })
        .collect()
}

pub const CAFE_HEADERS: &[&str] = &["ID", "NAME", "DESCRIPTION", "EMPLOYEES", "LOCATION"];

pub fn employee_rows(employees: &[Employee], today: NaiveDate) -> Vec<Vec<String>> {
    employees
        .iter()
        .map(|e| {
            vec![
                e.id.clone(),
                e.name.clone(),
                e.email_address.clone(),
                e.phone_number.clone(),
                days_worked(e.start_date, today).to_string(),
                e.cafe_name.clone().unwrap_or_default(),
            ]
        })
        .collect()
}

pub const EMPLOYEE_HEADERS: &[&str] = &["ID", "NAME", "EMAIL", "PHONE", "DAYS WORKED", "CAFE"];
