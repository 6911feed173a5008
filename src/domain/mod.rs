//! Snapshot domain models and helpers.

pub mod book;
pub mod common;
pub mod debt;
pub mod profile;
pub mod shopping;
pub mod transaction;

pub use book::{Book, CURRENT_SCHEMA_VERSION};
pub use common::{Identifiable, NamedEntity};
pub use debt::{Debt, DebtStatus};
pub use profile::UserProfile;
pub use shopping::ShoppingItem;
pub use transaction::{Transaction, TransactionKind, DEFAULT_EXPENSE_CATEGORIES};
