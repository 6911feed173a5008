//! Chart-ready series for the category doughnut and the expense trend line.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::domain::book::Book;
use crate::domain::transaction::{Transaction, TransactionKind};

/// Number of distinct colors the shells rotate through.
pub const PALETTE_SIZE: usize = 8;

/// Label of the synthetic slice an empty breakdown falls back to.
pub const EMPTY_BREAKDOWN_LABEL: &str = "No Data";

/// Label of the synthetic point an empty trend falls back to.
pub const EMPTY_TREND_LABEL: &str = "Today";

/// Points the trend chart plots per window.
pub const TREND_WINDOW: usize = 7;

/// One slice of the category doughnut. Placeholder slices exist only to keep
/// the chart well-defined; shells suppress their legend value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySlice {
    pub name: String,
    pub value: f64,
    pub is_placeholder: bool,
    pub color_slot: usize,
}

/// One point of the trend line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub amount: f64,
    pub kind: TransactionKind,
}

pub struct ChartService;

impl ChartService {
    /// Buckets expense amounts by category label, preserving first-seen
    /// order for downstream color assignment. An empty expense set yields a
    /// single placeholder slice so the doughnut still renders.
    pub fn category_breakdown(book: &Book) -> Vec<CategorySlice> {
        let mut slices: Vec<CategorySlice> = Vec::new();
        let expenses = book
            .transactions
            .iter()
            .filter(|txn| txn.kind == TransactionKind::Expense);
        for txn in expenses {
            match slices.iter_mut().find(|slice| slice.name == txn.category) {
                Some(slice) => slice.value += txn.amount,
                None => slices.push(CategorySlice {
                    name: txn.category.clone(),
                    value: txn.amount,
                    is_placeholder: false,
                    color_slot: color_slot(&txn.category),
                }),
            }
        }
        if slices.is_empty() {
            slices.push(CategorySlice {
                name: EMPTY_BREAKDOWN_LABEL.into(),
                value: 1.0,
                is_placeholder: true,
                color_slot: color_slot(EMPTY_BREAKDOWN_LABEL),
            });
        }
        slices
    }

    /// The seven most recent transactions by date, emitted oldest first so
    /// the axis reads left to right. Entries sharing a date keep stored
    /// (newest-first) order. An empty book yields a single zero point.
    pub fn expense_trend(book: &Book) -> Vec<TrendPoint> {
        if book.transactions.is_empty() {
            return vec![TrendPoint {
                label: EMPTY_TREND_LABEL.into(),
                amount: 0.0,
                kind: TransactionKind::Expense,
            }];
        }
        let mut ordered: Vec<&Transaction> = book.transactions.iter().collect();
        ordered.sort_by(|a, b| b.date.cmp(&a.date));
        ordered.truncate(TREND_WINDOW);
        ordered.reverse();
        ordered
            .into_iter()
            .map(|txn| TrendPoint {
                label: txn.date.format("%d %b").to_string(),
                amount: txn.amount,
                kind: txn.kind,
            })
            .collect()
    }
}

/// Stable palette slot for a category name; consistent within one session.
pub fn color_slot(name: &str) -> usize {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    (hasher.finish() as usize) % PALETTE_SIZE
}
