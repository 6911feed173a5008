use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    common::{find_by_id_mut, remove_by_id},
    debt::Debt,
    profile::UserProfile,
    shopping::ShoppingItem,
    transaction::Transaction,
};

pub const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The complete in-memory snapshot: transactions, dhar records, the shopping
/// list, and the profile. New entries are prepended, so stored order is
/// most-recent-first and no entity needs a sequence number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub name: String,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub shopping_items: Vec<ShoppingItem>,
    #[serde(default)]
    pub profile: UserProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Book::schema_version_default")]
    pub schema_version: u8,
}

impl Book {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            transactions: Vec::new(),
            debts: Vec::new(),
            shopping_items: Vec::new(),
            profile: UserProfile::default(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.insert(0, transaction);
        self.touch();
        id
    }

    pub fn add_debt(&mut self, debt: Debt) -> Uuid {
        let id = debt.id;
        self.debts.insert(0, debt);
        self.touch();
        id
    }

    pub fn add_shopping_item(&mut self, item: ShoppingItem) -> Uuid {
        let id = item.id;
        self.shopping_items.insert(0, item);
        self.touch();
        id
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn debt(&self, id: Uuid) -> Option<&Debt> {
        self.debts.iter().find(|debt| debt.id == id)
    }

    pub fn debt_mut(&mut self, id: Uuid) -> Option<&mut Debt> {
        find_by_id_mut(&mut self.debts, id)
    }

    pub fn shopping_item(&self, id: Uuid) -> Option<&ShoppingItem> {
        self.shopping_items.iter().find(|item| item.id == id)
    }

    pub fn shopping_item_mut(&mut self, id: Uuid) -> Option<&mut ShoppingItem> {
        find_by_id_mut(&mut self.shopping_items, id)
    }

    pub fn remove_transaction(&mut self, id: Uuid) -> Option<Transaction> {
        let removed = remove_by_id(&mut self.transactions, id);
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    pub fn remove_debt(&mut self, id: Uuid) -> Option<Debt> {
        let removed = remove_by_id(&mut self.debts, id);
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    pub fn remove_shopping_item(&mut self, id: Uuid) -> Option<ShoppingItem> {
        let removed = remove_by_id(&mut self.shopping_items, id);
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new("Hisebi")
    }
}
