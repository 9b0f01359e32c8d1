//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;

use super::report::format_amount;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format recorded expenses as a table
pub fn format_expense_table(transactions: &[Transaction], symbol: &str, date_format: &str) -> String {
    if transactions.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = transactions
        .iter()
        .enumerate()
        .map(|(i, txn)| ExpenseRow {
            index: i + 1,
            date: txn.date.format(date_format).to_string(),
            category: txn.category.to_string(),
            amount: format_amount(txn.amount, symbol),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// One-line confirmation for a newly recorded expense
pub fn format_added(txn: &Transaction, symbol: &str) -> String {
    format!(
        "Expense added: {} - {} on {}",
        txn.category,
        format_amount(txn.amount, symbol),
        txn.date.format("%Y-%m-%d")
    )
}
