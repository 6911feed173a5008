pub mod activity_service;
pub mod chart_service;
pub mod debt_service;
pub mod profile_service;
pub mod shopping_service;
pub mod summary_service;
pub mod transaction_service;

pub use activity_service::{ActivityEntry, ActivityKind, ActivityService, DEBT_FEED_LABEL};
pub use chart_service::{CategorySlice, ChartService, TrendPoint};
pub use debt_service::DebtService;
pub use profile_service::ProfileService;
pub use shopping_service::ShoppingService;
pub use summary_service::{BookTotals, ShoppingSummary, SummaryService};
pub use transaction_service::TransactionService;

use crate::errors::BookError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Book(#[from] BookError),
    #[error("{0}")]
    Invalid(String),
}
