//! Report CLI commands

use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::parse_amount;
use crate::reports::{BudgetStatus, CategorySummary};
use crate::storage::Storage;

/// Show budget status, or persist a new monthly budget first
pub fn handle_budget(
    storage: &Storage,
    paths: &ExpensePaths,
    settings: &mut Settings,
    set: Option<String>,
) -> ExpenseResult<()> {
    if let Some(budget_str) = set {
        let budget = parse_amount(&budget_str)
            .map_err(|e| ExpenseError::Validation(format!("Invalid budget: {}", e)))?;
        settings.set_monthly_budget(budget)?;
        settings.save(paths)?;
        println!("Monthly budget set.");
        println!();
    }

    let status = BudgetStatus::generate(storage, settings.monthly_budget)?;
    print!("{}", status.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Show spending by category
pub fn handle_summary(storage: &Storage, settings: &Settings, top: Option<usize>) -> ExpenseResult<()> {
    let summary = CategorySummary::generate(storage)?;

    match top {
        Some(limit) => {
            for row in summary.top_categories(limit) {
                println!(
                    "{:<16} {}{:.2}",
                    row.category.name(),
                    settings.currency_symbol,
                    row.total
                );
            }
        }
        None => print!("{}", summary.format_terminal(&settings.currency_symbol)),
    }

    Ok(())
}

/// Show the most recent audit log entries
pub fn handle_history(storage: &Storage, limit: usize) -> ExpenseResult<()> {
    let entries = storage.audit().read_recent(limit)?;
    if entries.is_empty() {
        println!("No history yet.");
    }
    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
