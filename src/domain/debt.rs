use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::Identifiable;

/// Lifecycle of a dhar record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DebtStatus {
    Pending,
    Repaid,
}

/// An informal loan between the user and a named counterparty. Amount and
/// counterparty are fixed at creation; only the status toggles afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    pub id: Uuid,
    pub counterparty: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub note: String,
    pub status: DebtStatus,
}

impl Debt {
    /// New dhar records always start out pending.
    pub fn new(
        counterparty: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            counterparty: counterparty.into(),
            amount,
            date,
            note: note.into(),
            status: DebtStatus::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, DebtStatus::Pending)
    }
}

impl Identifiable for Debt {
    fn id(&self) -> Uuid {
        self.id
    }
}
