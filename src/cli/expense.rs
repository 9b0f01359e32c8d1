//! Expense CLI commands

use chrono::{Local, NaiveDate};

use crate::config::settings::Settings;
use crate::display::{format_added, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_date, Category};
use crate::services::{generate_sample, AddExpenseInput, ExpenseService};
use crate::storage::Storage;

/// Record a new expense
pub fn handle_add(
    storage: &Storage,
    settings: &Settings,
    amount: String,
    category: Category,
    date: Option<String>,
) -> ExpenseResult<()> {
    let date = match date {
        Some(d) => parse_date(&d)?,
        None => today(),
    };

    let service = ExpenseService::new(storage);
    let txn = service.add(AddExpenseInput {
        date,
        category,
        amount,
    })?;

    println!("{}", format_added(&txn, &settings.currency_symbol));
    Ok(())
}

/// List every recorded expense
pub fn handle_list(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let expenses = ExpenseService::new(storage).list()?;
    print!(
        "{}",
        format_expense_table(&expenses, &settings.currency_symbol, &settings.date_format)
    );
    Ok(())
}

/// Delete every recorded expense, only with explicit confirmation
pub fn handle_clear(storage: &Storage, confirmed: bool) -> ExpenseResult<()> {
    if !confirmed {
        return Err(ExpenseError::Validation(
            "Refusing to delete all expenses without --yes".into(),
        ));
    }

    let removed = ExpenseService::new(storage).clear()?;
    println!("All expenses have been cleared ({} removed).", removed);
    Ok(())
}

/// Add randomly generated expenses from the last 30 days
pub fn handle_sample(storage: &Storage, count: usize) -> ExpenseResult<()> {
    let sample = generate_sample(&mut rand::thread_rng(), today(), count);
    ExpenseService::new(storage).add_all(&sample)?;
    println!("{} sample expenses added.", sample.len());
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
