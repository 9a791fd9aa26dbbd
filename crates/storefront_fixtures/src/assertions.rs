//! Custom Test Assertions
//!
//! Assertion helpers for fixture collections and schema values that print
//! the offending ids instead of whole entity dumps.

use rust_decimal::Decimal;
use storefront_kernel::{Entity, Money, Order, Product};

/// Asserts that `entities` hold exactly `expected` ids, in order
///
/// # Panics
///
/// Panics if the lengths differ or any position holds a different id
pub fn assert_ids_in_order<E: Entity>(entities: &[E], expected: &[E::Id]) {
    let actual: Vec<&E::Id> = entities.iter().map(|e| e.id()).collect();
    let expected: Vec<&E::Id> = expected.iter().collect();
    assert_eq!(
        actual, expected,
        "Tracked {} ids differ from expected order",
        E::KIND
    );
}

/// Asserts that an entity with `id` is present
pub fn assert_contains_id<E: Entity>(entities: &[E], id: &E::Id) {
    assert!(
        entities.iter().any(|e| e.id() == id),
        "Expected {} {:?} among {} tracked entities",
        E::KIND,
        id,
        entities.len()
    );
}

/// Asserts that an amount lies in the half-open range `[min, max)`
pub fn assert_money_in_range(money: &Money, min: Decimal, max: Decimal) {
    assert!(
        money.amount() >= min && money.amount() < max,
        "Amount {} outside [{}, {})",
        money,
        min,
        max
    );
}

/// Asserts that a value lies in the half-open range `[min, max)`
pub fn assert_u32_in_range(value: u32, min: u32, max: u32) {
    assert!(
        value >= min && value < max,
        "Value {} outside [{}, {})",
        value,
        min,
        max
    );
}

/// Asserts the schema invariants of a product
pub fn assert_product_valid(product: &Product) {
    assert!(
        product.price.amount() >= Decimal::ZERO,
        "Product {} has negative price {}",
        product.id,
        product.price
    );
    assert!(!product.sku.is_empty(), "Product {} has an empty sku", product.id);
}

/// Asserts the schema invariants of an order
pub fn assert_order_valid(order: &Order) {
    assert!(
        order.total.amount() >= Decimal::ZERO,
        "Order {} has negative total {}",
        order.id,
        order.total
    );
    for item in &order.items {
        assert!(
            item.quantity.get() >= 1,
            "Order {} has a non-positive quantity for {}",
            order.id,
            item.product_id
        );
    }
}
