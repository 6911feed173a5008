//! Derived totals for the dashboard cards.

use serde::{Deserialize, Serialize};

use crate::domain::book::Book;
use crate::domain::transaction::TransactionKind;

/// Headline totals across transactions and dhar records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookTotals {
    pub total_income: f64,
    pub total_expense: f64,
    pub pending_debt: f64,
    pub balance: f64,
}

/// Shopping-list estimate totals and completion counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingSummary {
    pub estimated_total: f64,
    pub completed_total: f64,
    pub item_count: usize,
    pub completed_count: usize,
    pub completion_percent: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Sums income, expense, and pending dhar; balance is income minus
    /// expense. Repaid debts never contribute.
    pub fn totals(book: &Book) -> BookTotals {
        let mut total_income = 0.0;
        let mut total_expense = 0.0;
        for txn in &book.transactions {
            match txn.kind {
                TransactionKind::Income => total_income += txn.amount,
                TransactionKind::Expense => total_expense += txn.amount,
            }
        }
        let pending_debt = book
            .debts
            .iter()
            .filter(|debt| debt.is_pending())
            .map(|debt| debt.amount)
            .sum();
        BookTotals {
            total_income,
            total_expense,
            pending_debt,
            balance: total_income - total_expense,
        }
    }

    /// Folds the shopping list into estimate totals and completion counters.
    /// An empty list reports 0% complete rather than dividing by zero.
    pub fn shopping_summary(book: &Book) -> ShoppingSummary {
        let item_count = book.shopping_items.len();
        let mut estimated_total = 0.0;
        let mut completed_total = 0.0;
        let mut completed_count = 0;
        for item in &book.shopping_items {
            let line = item.line_total();
            estimated_total += line;
            if item.completed {
                completed_total += line;
                completed_count += 1;
            }
        }
        let completion_percent = if item_count == 0 {
            0.0
        } else {
            (completed_count as f64 / item_count as f64) * 100.0
        };
        ShoppingSummary {
            estimated_total,
            completed_total,
            item_count,
            completed_count,
            completion_percent,
        }
    }
}
