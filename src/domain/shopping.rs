use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::{Identifiable, NamedEntity};

/// One line of the household shopping list. Quantity and price are optional
/// estimates; `created_at` exists only to break ties when ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl ShoppingItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity: None,
            unit_price: None,
            unit: None,
            completed: false,
            created_at: Utc::now(),
        }
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_unit_price(mut self, unit_price: f64) -> Self {
        self.unit_price = Some(unit_price);
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Estimated line value: a missing price counts as 0, a missing quantity
    /// as 1.
    pub fn line_total(&self) -> f64 {
        self.unit_price.unwrap_or(0.0) * self.quantity.unwrap_or(1.0)
    }
}

impl Identifiable for ShoppingItem {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for ShoppingItem {
    fn name(&self) -> &str {
        &self.name
    }
}
