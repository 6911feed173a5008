//! Business logic helpers for managing transactions.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::book::Book;
use crate::domain::transaction::Transaction;

/// Provides validated entry and removal helpers for book transactions.
pub struct TransactionService;

impl TransactionService {
    /// Validates and records a new transaction, returning its identifier.
    /// Rejected submissions leave the book untouched.
    pub fn add(book: &mut Book, transaction: Transaction) -> ServiceResult<Uuid> {
        validate(&transaction)?;
        Ok(book.add_transaction(transaction))
    }

    /// Removes the transaction identified by `id`, returning the removed record.
    pub fn remove(book: &mut Book, id: Uuid) -> ServiceResult<Transaction> {
        book.remove_transaction(id)
            .ok_or_else(|| ServiceError::Invalid("Transaction not found".into()))
    }

    /// Returns a snapshot of the book's transactions in stored order.
    pub fn list(book: &Book) -> Vec<&Transaction> {
        book.transactions.iter().collect()
    }
}

fn validate(transaction: &Transaction) -> ServiceResult<()> {
    if !transaction.amount.is_finite() || transaction.amount < 0.0 {
        return Err(ServiceError::Invalid(
            "Amount must be a non-negative number".into(),
        ));
    }
    if transaction.category.trim().is_empty() {
        return Err(ServiceError::Invalid("Category is required".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::TransactionKind;
    use chrono::NaiveDate;

    fn sample(amount: f64, category: &str) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Transaction::new(TransactionKind::Expense, amount, category, date, "")
    }

    #[test]
    fn add_rejects_negative_amount() {
        let mut book = Book::new("Txn");
        let err = TransactionService::add(&mut book, sample(-5.0, "Food"))
            .expect_err("negative amount must be rejected");
        assert!(matches!(err, ServiceError::Invalid(_)));
        assert!(book.transactions.is_empty(), "no partial record may be created");
    }

    #[test]
    fn add_rejects_non_finite_amount() {
        let mut book = Book::new("Txn");
        assert!(TransactionService::add(&mut book, sample(f64::NAN, "Food")).is_err());
        assert!(TransactionService::add(&mut book, sample(f64::INFINITY, "Food")).is_err());
        assert!(book.transactions.is_empty());
    }

    #[test]
    fn add_rejects_blank_category() {
        let mut book = Book::new("Txn");
        let err = TransactionService::add(&mut book, sample(10.0, "  "))
            .expect_err("blank category must be rejected");
        assert!(matches!(err, ServiceError::Invalid(ref message) if message.contains("Category")));
    }

    #[test]
    fn remove_returns_deleted_transaction() {
        let mut book = Book::new("Txn");
        let txn = sample(42.0, "Food");
        let txn_id = txn.id;
        TransactionService::add(&mut book, txn).unwrap();

        let removed = TransactionService::remove(&mut book, txn_id).unwrap();
        assert_eq!(removed.id, txn_id);
        assert!(book.transaction(txn_id).is_none());
    }

    #[test]
    fn list_follows_stored_newest_first_order() {
        let mut book = Book::new("Txn");
        let first = TransactionService::add(&mut book, sample(10.0, "Food")).unwrap();
        let second = TransactionService::add(&mut book, sample(20.0, "Transport")).unwrap();

        let listed = TransactionService::list(&book);
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second);
        assert_eq!(listed[1].id, first);
    }

    #[test]
    fn remove_fails_for_missing_transaction() {
        let mut book = Book::new("Txn");
        let err = TransactionService::remove(&mut book, Uuid::new_v4())
            .expect_err("remove must fail for unknown id");
        assert!(
            matches!(err, ServiceError::Invalid(ref message) if message.contains("not found")),
            "unexpected error: {err:?}"
        );
    }
}
