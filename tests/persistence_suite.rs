use chrono::NaiveDate;
use hisebi_core::{
    core::BookManager,
    domain::{Book, Debt, Transaction, TransactionKind},
    storage::{JsonStorage, StorageBackend},
};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn storage_in(dir: &Path) -> JsonStorage {
    JsonStorage::new(Some(dir.to_path_buf()), Some(3)).unwrap()
}

fn populated_book() -> Book {
    let mut book = Book::new("Household");
    let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
    book.add_transaction(Transaction::new(
        TransactionKind::Income,
        2_000.0,
        "Salary",
        date,
        "",
    ));
    book.add_debt(Debt::new("Rahim", 300.0, date, ""));
    book
}

#[test]
fn roundtrip_preserves_collections_and_profile() {
    let temp = tempdir().unwrap();
    let storage = storage_in(temp.path());
    let book = populated_book();
    storage.save(&book).expect("save book");

    let loaded = storage.load_or_default().expect("load book").book;
    assert_eq!(loaded.transactions.len(), 1);
    assert_eq!(loaded.debts.len(), 1);
    assert_eq!(loaded.profile.name, "Guest User");
    assert_eq!(loaded.profile.monthly_budget, 15_000.0);
}

#[test]
fn corrupt_transactions_field_falls_back_alone() {
    let temp = tempdir().unwrap();
    let storage = storage_in(temp.path());
    let book = populated_book();
    storage.save(&book).expect("save book");

    // Damage only the transactions field; debts must survive the reload.
    let raw = fs::read_to_string(storage.slot_path()).unwrap();
    let mut blob: Value = serde_json::from_str(&raw).unwrap();
    blob["transactions"] = json!(42);
    fs::write(storage.slot_path(), serde_json::to_string(&blob).unwrap()).unwrap();

    let report = storage.load_or_default().expect("load survives corruption");
    assert!(report.book.transactions.is_empty());
    assert_eq!(report.book.debts.len(), 1);
    assert!(
        report
            .warnings
            .iter()
            .any(|warning| warning.contains("transactions")),
        "expected a warning naming the damaged field, got {:?}",
        report.warnings
    );
}

#[test]
fn corrupt_profile_field_falls_back_to_guest() {
    let temp = tempdir().unwrap();
    let storage = storage_in(temp.path());
    let book = populated_book();
    storage.save(&book).expect("save book");

    let raw = fs::read_to_string(storage.slot_path()).unwrap();
    let mut blob: Value = serde_json::from_str(&raw).unwrap();
    blob["profile"] = json!("not an object");
    fs::write(storage.slot_path(), serde_json::to_string(&blob).unwrap()).unwrap();

    let report = storage.load_or_default().expect("load survives corruption");
    assert_eq!(report.book.profile.name, "Guest User");
    assert_eq!(report.book.transactions.len(), 1);
}

#[test]
fn unreadable_blob_yields_a_fresh_default_book() {
    let temp = tempdir().unwrap();
    let storage = storage_in(temp.path());
    fs::write(storage.slot_path(), "{{{ definitely not json").unwrap();

    let report = storage.load_or_default().expect("load never aborts");
    assert!(report.book.transactions.is_empty());
    assert!(report.book.debts.is_empty());
    assert_eq!(report.book.profile.name, "Guest User");
    assert!(!report.warnings.is_empty());
}

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => String::from("tmp"),
    };
    tmp.set_extension(ext);
    tmp
}

#[test]
fn atomic_save_failure_preserves_original_file() {
    let temp = tempdir().unwrap();
    let storage = storage_in(temp.path());

    let mut book = populated_book();
    storage.save(&book).expect("initial save");
    let original = fs::read_to_string(storage.slot_path()).expect("read original file");

    // Create a directory that collides with the temp file name to force
    // File::create to fail mid-save.
    let tmp_path = tmp_path_for(storage.slot_path());
    fs::create_dir_all(&tmp_path).unwrap();

    let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
    book.add_transaction(Transaction::new(
        TransactionKind::Expense,
        99.0,
        "Food",
        date,
        "",
    ));
    assert!(
        storage.save(&book).is_err(),
        "expected save to fail when the temp path is a directory"
    );

    let current = fs::read_to_string(storage.slot_path()).expect("read after failure");
    assert_eq!(
        current, original,
        "atomic save failure must not corrupt the original file"
    );

    let _ = fs::remove_dir_all(&tmp_path);
}

#[test]
fn manager_load_applies_field_fallbacks() {
    let temp = tempdir().unwrap();
    let storage = storage_in(temp.path());
    let book = populated_book();
    storage.save(&book).expect("save book");

    let raw = fs::read_to_string(storage.slot_path()).unwrap();
    let mut blob: Value = serde_json::from_str(&raw).unwrap();
    blob["debts"] = json!({"oops": true});
    fs::write(storage.slot_path(), serde_json::to_string(&blob).unwrap()).unwrap();

    let mut manager = BookManager::new(Box::new(storage));
    let metadata = manager.load().expect("load succeeds with fallback");
    assert!(!metadata.warnings.is_empty());
    let current = manager.current.as_ref().unwrap();
    assert!(current.debts.is_empty());
    assert_eq!(current.transactions.len(), 1);
}
