//! Spending by category
//!
//! Totals and counts per category across every recorded expense.

use std::collections::BTreeMap;

use crate::display::report::{format_amount, format_percentage, separator};
use crate::error::ExpenseResult;
use crate::models::{Category, Transaction};
use crate::storage::Storage;

/// Spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: Category,
    pub total: f64,
    pub transaction_count: usize,
    /// Share of overall spending, 0-100
    pub percentage: f64,
}

/// Spending broken down by category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    /// Categories that have at least one expense, in category order
    pub categories: Vec<CategorySpending>,
    pub total: f64,
    pub transaction_count: usize,
}

impl CategorySummary {
    /// Summarize a set of expenses
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut by_category: BTreeMap<Category, (f64, usize)> = BTreeMap::new();
        for txn in transactions {
            let entry = by_category.entry(txn.category).or_insert((0.0, 0));
            entry.0 += txn.amount;
            entry.1 += 1;
        }

        let total: f64 = by_category.values().map(|(sum, _)| sum).sum();

        let categories = by_category
            .into_iter()
            .map(|(category, (sum, count))| CategorySpending {
                category,
                total: sum,
                transaction_count: count,
                percentage: if total > 0.0 { sum / total * 100.0 } else { 0.0 },
            })
            .collect();

        Self {
            categories,
            total,
            transaction_count: transactions.len(),
        }
    }

    /// Summarize the record store
    pub fn generate(storage: &Storage) -> ExpenseResult<Self> {
        let transactions = storage.expenses.read_all()?;
        Ok(Self::from_transactions(&transactions))
    }

    /// The `limit` categories with the most spending
    pub fn top_categories(&self, limit: usize) -> Vec<&CategorySpending> {
        let mut sorted: Vec<&CategorySpending> = self.categories.iter().collect();
        sorted.sort_by(|a, b| b.total.total_cmp(&a.total));
        sorted.truncate(limit);
        sorted
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.categories.is_empty() {
            return "No expenses recorded.\n".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!(
            "{:<16} {:>14} {:>7} {:>7}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&separator(47));
        output.push('\n');

        for row in &self.categories {
            output.push_str(&format!(
                "{:<16} {:>14} {:>7} {:>7}\n",
                row.category.name(),
                format_amount(row.total, symbol),
                row.transaction_count,
                format_percentage(row.percentage)
            ));
        }

        output.push_str(&separator(47));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>14} {:>7}\n",
            "Total",
            format_amount(self.total, symbol),
            self.transaction_count
        ));

        output
    }
}
