//! Business logic helpers for dhar records.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::book::Book;
use crate::domain::debt::{Debt, DebtStatus};

/// Provides validated helpers for informal peer-to-peer debts.
pub struct DebtService;

impl DebtService {
    /// Validates and records a new dhar entry, returning its identifier.
    pub fn add(book: &mut Book, debt: Debt) -> ServiceResult<Uuid> {
        validate(&debt)?;
        Ok(book.add_debt(debt))
    }

    /// Flips the record between pending and repaid, returning the new status.
    /// Counterparty and amount stay untouched.
    pub fn toggle_status(book: &mut Book, id: Uuid) -> ServiceResult<DebtStatus> {
        let status = match book.debt_mut(id) {
            Some(debt) => {
                debt.status = match debt.status {
                    DebtStatus::Pending => DebtStatus::Repaid,
                    DebtStatus::Repaid => DebtStatus::Pending,
                };
                debt.status.clone()
            }
            None => return Err(ServiceError::Invalid("Dhar record not found".into())),
        };
        book.touch();
        Ok(status)
    }

    /// Removes the record identified by `id`, returning the removed instance.
    pub fn remove(book: &mut Book, id: Uuid) -> ServiceResult<Debt> {
        book.remove_debt(id)
            .ok_or_else(|| ServiceError::Invalid("Dhar record not found".into()))
    }

    /// Returns a snapshot of the book's dhar records in stored order.
    pub fn list(book: &Book) -> Vec<&Debt> {
        book.debts.iter().collect()
    }
}

fn validate(debt: &Debt) -> ServiceResult<()> {
    if debt.counterparty.trim().is_empty() {
        return Err(ServiceError::Invalid("Counterparty name is required".into()));
    }
    if !debt.amount.is_finite() || debt.amount < 0.0 {
        return Err(ServiceError::Invalid(
            "Amount must be a non-negative number".into(),
        ));
    }
    Ok(())
}
