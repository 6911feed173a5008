//! The merged activity feed shown on the dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::book::Book;
use crate::domain::debt::Debt;
use crate::domain::transaction::{Transaction, TransactionKind};

/// Category label a dhar record carries when it appears in the feed.
pub const DEBT_FEED_LABEL: &str = "Dhar";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityKind {
    Income,
    Expense,
    Debt,
}

/// One row of the merged feed; a projection, never a stored record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: Uuid,
    pub kind: ActivityKind,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub note: String,
}

impl From<&Transaction> for ActivityEntry {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: txn.id,
            kind: match txn.kind {
                TransactionKind::Income => ActivityKind::Income,
                TransactionKind::Expense => ActivityKind::Expense,
            },
            category: txn.category.clone(),
            amount: txn.amount,
            date: txn.date,
            note: txn.note.clone(),
        }
    }
}

impl From<&Debt> for ActivityEntry {
    fn from(debt: &Debt) -> Self {
        Self {
            id: debt.id,
            kind: ActivityKind::Debt,
            category: DEBT_FEED_LABEL.into(),
            amount: debt.amount,
            date: debt.date,
            note: debt.counterparty.clone(),
        }
    }
}

pub struct ActivityService;

impl ActivityService {
    /// Merges transactions and dhar records into one reverse-chronological
    /// feed capped at `limit`. The sort is stable over the
    /// transactions-then-debts concatenation, so entries sharing a date keep
    /// transactions ahead of debts. Inputs are never mutated.
    pub fn recent(book: &Book, limit: usize) -> Vec<ActivityEntry> {
        let mut feed: Vec<ActivityEntry> = book
            .transactions
            .iter()
            .map(ActivityEntry::from)
            .chain(book.debts.iter().map(ActivityEntry::from))
            .collect();
        feed.sort_by(|a, b| b.date.cmp(&a.date));
        feed.truncate(limit);
        feed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debt_projection_carries_counterparty_as_note() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        let debt = Debt::new("Rahim", 700.0, date, "lunch money");
        let entry = ActivityEntry::from(&debt);
        assert_eq!(entry.kind, ActivityKind::Debt);
        assert_eq!(entry.category, DEBT_FEED_LABEL);
        assert_eq!(entry.amount, 700.0);
        assert_eq!(entry.note, "Rahim");
    }
}
