use chrono::{TimeZone, Utc};
use hisebi_core::{
    core::services::ShoppingService,
    domain::{Book, ShoppingItem},
};

fn item_created_at(name: &str, secs: i64) -> ShoppingItem {
    let mut item = ShoppingItem::new(name);
    item.created_at = Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap();
    item
}

#[test]
fn incomplete_items_sort_before_completed_newest_first() {
    let mut book = Book::new("Bazar");
    let rice = ShoppingService::add(&mut book, item_created_at("Rice", 10)).unwrap();
    ShoppingService::add(&mut book, item_created_at("Salt", 20)).unwrap();
    ShoppingService::add(&mut book, item_created_at("Oil", 30)).unwrap();
    ShoppingService::toggle(&mut book, rice);

    let names: Vec<String> = ShoppingService::sorted(&book)
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(names, ["Oil", "Salt", "Rice"]);
}

#[test]
fn toggling_twice_restores_state_and_position() {
    let mut book = Book::new("Bazar");
    ShoppingService::add(&mut book, item_created_at("Rice", 10)).unwrap();
    let salt = ShoppingService::add(&mut book, item_created_at("Salt", 20)).unwrap();
    ShoppingService::add(&mut book, item_created_at("Oil", 30)).unwrap();

    let before: Vec<_> = ShoppingService::sorted(&book)
        .into_iter()
        .map(|item| (item.id, item.completed))
        .collect();

    ShoppingService::toggle(&mut book, salt);
    ShoppingService::toggle(&mut book, salt);

    let after: Vec<_> = ShoppingService::sorted(&book)
        .into_iter()
        .map(|item| (item.id, item.completed))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn toggle_touches_exactly_one_item() {
    let mut book = Book::new("Bazar");
    let rice = ShoppingService::add(
        &mut book,
        item_created_at("Rice", 10).with_quantity(2.0).with_unit("kg"),
    )
    .unwrap();
    let salt = ShoppingService::add(&mut book, item_created_at("Salt", 20)).unwrap();

    ShoppingService::toggle(&mut book, rice);

    let rice_item = book.shopping_item(rice).unwrap();
    assert!(rice_item.completed);
    assert_eq!(rice_item.quantity, Some(2.0));
    assert_eq!(rice_item.unit.as_deref(), Some("kg"));
    assert!(!book.shopping_item(salt).unwrap().completed);
}

#[test]
fn clear_completed_removes_only_checked_items() {
    let mut book = Book::new("Bazar");
    let a = ShoppingService::add(&mut book, item_created_at("A", 10)).unwrap();
    ShoppingService::add(&mut book, item_created_at("B", 20)).unwrap();
    let c = ShoppingService::add(&mut book, item_created_at("C", 30)).unwrap();
    ShoppingService::toggle(&mut book, a);
    ShoppingService::toggle(&mut book, c);

    let removed = ShoppingService::clear_completed(&mut book);
    assert_eq!(removed, 2);
    let names: Vec<&str> = book
        .shopping_items
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(names, ["B"]);
}

#[test]
fn clear_completed_on_clean_list_is_a_no_op() {
    let mut book = Book::new("Bazar");
    ShoppingService::add(&mut book, item_created_at("A", 10)).unwrap();
    assert_eq!(ShoppingService::clear_completed(&mut book), 0);
    assert_eq!(book.shopping_items.len(), 1);
}
