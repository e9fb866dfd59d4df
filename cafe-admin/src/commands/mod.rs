//! Subcommand handlers

mod cafes;
mod employees;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use cafe_client::{GridController, GridState, HttpClient, Resource};

use crate::cli::{Cli, Commands};
use crate::config::Config;

pub async fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Cafes { command } => cafes::run(command, &config).await,
        Commands::Employees { command } => employees::run(command, &config).await,
    }
}

/// Ask `prompt` on stdin; anything but y/yes declines
fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("failed to read confirmation")?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Run the two-step delete on `grid`, prompting unless `yes`
async fn delete_with_confirmation<R, H>(
    grid: &mut GridController<R, H>,
    id: String,
    yes: bool,
) -> Result<bool>
where
    R: Resource,
    H: HttpClient + Clone,
{
    let prompt = grid.request_delete(id);
    if !yes && !confirm(prompt)? {
        grid.cancel_delete();
        return Ok(false);
    }
    grid.confirm_delete().await?;
    Ok(true)
}

/// Fail on a grid in the error state, otherwise print the requested page
fn print_page<R, H>(
    grid: &GridController<R, H>,
    page: usize,
    headers: &[&str],
    to_rows: impl Fn(&[R::Record]) -> Vec<Vec<String>>,
) -> Result<()>
where
    R: Resource,
    H: HttpClient + Clone,
{
    if let GridState::Error(message) = grid.state() {
        anyhow::bail!("failed to load {}s: {}", R::NAME, message);
    }

    let total = grid.page_count();
    if total == 0 {
        println!("No {}s found", R::NAME);
        return Ok(());
    }
    let index = page.clamp(1, total);
    print!("{}", crate::table::render(headers, &to_rows(grid.page(index - 1))));
    println!("Page {index} of {total} ({} rows)", grid.rows().len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::is_yes;

    #[test]
    fn test_confirmation_answers() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("no"));
    }
}
