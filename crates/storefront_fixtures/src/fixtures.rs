//! Pre-built Test Fixtures
//!
//! Deterministic users, products, and orders that mirror the storefront's
//! seed data. Generated orders reference `user-1` and `product-1..=3` from
//! here by default.

use rust_decimal_macros::dec;
use storefront_kernel::{LineItem, Money, Order, OrderStatus, Product, Quantity, Role, User};

use crate::generators::DEFAULT_PASSWORD;

/// Fixture for seeded users
pub struct UserFixtures;

impl UserFixtures {
    /// The regular customer account (`user-1`)
    pub fn customer() -> User {
        User {
            id: "user-1".into(),
            email: "customer@example.com".to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            role: Role::Customer,
        }
    }

    /// The administrator account (`user-2`)
    pub fn admin() -> User {
        User {
            id: "user-2".into(),
            email: "admin@example.com".to_string(),
            password: "admin123".to_string(),
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            role: Role::Admin,
        }
    }

    pub fn all() -> Vec<User> {
        vec![Self::customer(), Self::admin()]
    }
}

/// Fixture for seeded catalog products
pub struct ProductFixtures;

impl ProductFixtures {
    pub fn product_1() -> Product {
        Product {
            id: "product-1".into(),
            name: "Test Product 1".to_string(),
            description: "This is a test product for testing purposes".to_string(),
            price: Money::new(dec!(29.99)).unwrap_or_default(),
            sku: "TEST-001".to_string(),
            stock: 100,
            category_id: "category-1".into(),
        }
    }

    pub fn product_2() -> Product {
        Product {
            id: "product-2".into(),
            name: "Test Product 2".to_string(),
            description: "Another test product with different properties".to_string(),
            price: Money::new(dec!(49.99)).unwrap_or_default(),
            sku: "TEST-002".to_string(),
            stock: 50,
            category_id: "category-1".into(),
        }
    }

    /// The premium product, in the second category
    pub fn product_3() -> Product {
        Product {
            id: "product-3".into(),
            name: "Test Product 3".to_string(),
            description: "Premium test product".to_string(),
            price: Money::new(dec!(99.99)).unwrap_or_default(),
            sku: "TEST-003".to_string(),
            stock: 25,
            category_id: "category-2".into(),
        }
    }

    pub fn catalog() -> Vec<Product> {
        vec![Self::product_1(), Self::product_2(), Self::product_3()]
    }
}

/// Fixture for seeded orders
pub struct OrderFixtures;

impl OrderFixtures {
    /// Pending order for two lines
    pub fn order_1() -> Order {
        Order {
            id: "order-1".into(),
            user_id: "user-1".into(),
            items: vec![
                LineItem::new("product-1", Quantity::at_least_one(2)),
                LineItem::new("product-2", Quantity::ONE),
            ],
            total: Money::new(dec!(109.97)).unwrap_or_default(),
            status: OrderStatus::Pending,
        }
    }

    /// Confirmed single-line order
    pub fn order_2() -> Order {
        Order {
            id: "order-2".into(),
            user_id: "user-1".into(),
            items: vec![LineItem::new("product-3", Quantity::ONE)],
            total: Money::new(dec!(99.99)).unwrap_or_default(),
            status: OrderStatus::Confirmed,
        }
    }

    pub fn all() -> Vec<Order> {
        vec![Self::order_1(), Self::order_2()]
    }
}
