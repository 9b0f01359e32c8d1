//! Budget status
//!
//! Compares total recorded spending against the monthly budget.

use crate::display::report::{double_separator, format_amount, format_bar};
use crate::error::ExpenseResult;
use crate::models::Transaction;
use crate::storage::Storage;

const BAR_WIDTH: usize = 30;

/// Total spending measured against the monthly budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    /// Sum of every recorded amount
    pub total_spent: f64,
    /// Monthly budget
    pub budget: f64,
    /// Fraction of the budget used, capped at 1.0
    pub progress: f64,
    /// Whether spending is above the budget
    pub exceeded: bool,
    /// Budget left (negative once exceeded)
    pub remaining: f64,
}

impl BudgetStatus {
    /// Compute the status for a set of expenses
    pub fn from_transactions(transactions: &[Transaction], budget: f64) -> Self {
        let total_spent: f64 = transactions.iter().map(|t| t.amount).sum();

        let progress = if budget > 0.0 {
            (total_spent / budget).min(1.0)
        } else if total_spent > 0.0 {
            1.0
        } else {
            0.0
        };

        Self {
            total_spent,
            budget,
            progress,
            exceeded: total_spent > budget,
            remaining: budget - total_spent,
        }
    }

    /// Compute the status from the record store
    pub fn generate(storage: &Storage, budget: f64) -> ExpenseResult<Self> {
        let transactions = storage.expenses.read_all()?;
        Ok(Self::from_transactions(&transactions, budget))
    }

    /// Format the status for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Monthly Budget Status\n");
        output.push_str(&double_separator(44));
        output.push('\n');
        output.push_str(&format!(
            "Total Spend:     {:>16}\n",
            format_amount(self.total_spent, symbol)
        ));
        output.push_str(&format!(
            "Monthly Budget:  {:>16}\n",
            format_amount(self.budget, symbol)
        ));
        output.push_str(&format!(
            "{} {:>5.1}%\n\n",
            format_bar(self.progress, BAR_WIDTH),
            self.progress * 100.0
        ));

        if self.exceeded {
            output.push_str("You have exceeded your monthly budget!\n");
        } else {
            output.push_str(&format!(
                "Within budget. Remaining: {}\n",
                format_amount(self.remaining, symbol)
            ));
        }

        output
    }
}
