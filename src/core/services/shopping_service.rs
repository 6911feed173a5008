//! Shopping list operations and the display ordering.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::book::Book;
use crate::domain::shopping::ShoppingItem;

pub struct ShoppingService;

impl ShoppingService {
    /// Validates and records a new item, returning its identifier.
    pub fn add(book: &mut Book, item: ShoppingItem) -> ServiceResult<Uuid> {
        validate(&item)?;
        Ok(book.add_shopping_item(item))
    }

    /// Flips the completed flag of exactly one item. Unknown identifiers are
    /// ignored so a stale button press never surfaces an error.
    pub fn toggle(book: &mut Book, id: Uuid) {
        let toggled = match book.shopping_item_mut(id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        };
        if toggled {
            book.touch();
        }
    }

    /// Removes every completed item in one pass, returning the removed count.
    pub fn clear_completed(book: &mut Book) -> usize {
        let before = book.shopping_items.len();
        book.shopping_items.retain(|item| !item.completed);
        let removed = before - book.shopping_items.len();
        if removed > 0 {
            book.touch();
        }
        removed
    }

    /// Removes the item identified by `id`, returning the removed instance.
    pub fn remove(book: &mut Book, id: Uuid) -> ServiceResult<ShoppingItem> {
        book.remove_shopping_item(id)
            .ok_or_else(|| ServiceError::Invalid("Shopping item not found".into()))
    }

    /// Display ordering: incomplete items first, newest first within each
    /// group. Stored order is left untouched; recomputed on every read.
    pub fn sorted(book: &Book) -> Vec<ShoppingItem> {
        let mut items = book.shopping_items.clone();
        items.sort_by(|a, b| {
            a.completed
                .cmp(&b.completed)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        items
    }
}

fn validate(item: &ShoppingItem) -> ServiceResult<()> {
    if item.name.trim().is_empty() {
        return Err(ServiceError::Invalid("Item name is required".into()));
    }
    if let Some(quantity) = item.quantity {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(ServiceError::Invalid(
                "Quantity must be a positive number".into(),
            ));
        }
    }
    if let Some(unit_price) = item.unit_price {
        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(ServiceError::Invalid(
                "Unit price must be a non-negative number".into(),
            ));
        }
    }
    Ok(())
}
