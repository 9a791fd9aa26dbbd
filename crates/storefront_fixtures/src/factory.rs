//! Tracking Fixture Factory
//!
//! The factory wraps the generators and remembers every entity it created so
//! that a test's teardown can discard them in one call.
//!
//! There is no shared instance. Each test constructs its own factory and
//! passes it where it is needed, so parallel tests never see each other's
//! fixtures:
//!
//! ```rust
//! use storefront_fixtures::{FixtureFactory, OrderOverrides, TestFactory};
//!
//! # tokio_test_block(async {
//! let mut factory = TestFactory::new();
//! let user = factory.create_user(Default::default());
//! factory.create_order(OrderOverrides::for_user(&user));
//! assert_eq!(factory.created_count(), 2);
//!
//! factory.cleanup().await;
//! assert!(factory.created_users().is_empty());
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f);
//! # }
//! ```

use async_trait::async_trait;
use storefront_kernel::{Entity, Order, Product, User};
use tracing::{debug, info};

use crate::generators::{generate_order, generate_product, generate_user};
use crate::overrides::{OrderOverrides, ProductOverrides, UserOverrides};

/// Creates fixtures and tears them down again
///
/// `cleanup` is async so that an implementation backed by a real store can
/// issue deletions. The in-memory [`TestFactory`] resolves immediately.
#[async_trait]
pub trait FixtureFactory: Send {
    fn create_user(&mut self, overrides: UserOverrides) -> User;

    fn create_product(&mut self, overrides: ProductOverrides) -> Product;

    fn create_order(&mut self, overrides: OrderOverrides) -> Order;

    /// Discards everything created so far
    async fn cleanup(&mut self);
}

/// Append-only record of created entities, in creation order
#[derive(Debug, Clone)]
struct Tracked<E> {
    entities: Vec<E>,
}

impl<E: Entity> Tracked<E> {
    fn new() -> Self {
        Self { entities: Vec::new() }
    }

    fn record(&mut self, entity: E) -> E {
        debug!(kind = E::KIND, id = ?entity.id(), "created fixture");
        self.entities.push(entity.clone());
        entity
    }

    fn snapshot(&self) -> Vec<E> {
        self.entities.clone()
    }

    fn len(&self) -> usize {
        self.entities.len()
    }

    /// Empties the record and returns how many entities it held
    fn clear(&mut self) -> usize {
        let count = self.entities.len();
        self.entities.clear();
        count
    }
}

/// In-memory fixture factory
///
/// Not meant to be shared between concurrently running tests.
#[derive(Debug, Clone)]
pub struct TestFactory {
    users: Tracked<User>,
    products: Tracked<Product>,
    orders: Tracked<Order>,
}

impl Default for TestFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFactory {
    pub fn new() -> Self {
        Self {
            users: Tracked::new(),
            products: Tracked::new(),
            orders: Tracked::new(),
        }
    }

    /// Copy of the users created so far, in creation order
    pub fn created_users(&self) -> Vec<User> {
        self.users.snapshot()
    }

    /// Copy of the products created so far, in creation order
    pub fn created_products(&self) -> Vec<Product> {
        self.products.snapshot()
    }

    /// Copy of the orders created so far, in creation order
    pub fn created_orders(&self) -> Vec<Order> {
        self.orders.snapshot()
    }

    /// Total number of tracked fixtures across all kinds
    pub fn created_count(&self) -> usize {
        self.users.len() + self.products.len() + self.orders.len()
    }
}

#[async_trait]
impl FixtureFactory for TestFactory {
    fn create_user(&mut self, overrides: UserOverrides) -> User {
        self.users.record(generate_user(overrides))
    }

    fn create_product(&mut self, overrides: ProductOverrides) -> Product {
        self.products.record(generate_product(overrides))
    }

    fn create_order(&mut self, overrides: OrderOverrides) -> Order {
        self.orders.record(generate_order(overrides))
    }

    async fn cleanup(&mut self) {
        let users = self.users.clear();
        let products = self.products.clear();
        let orders = self.orders.clear();
        info!(users, products, orders, "discarded test fixtures");
    }
}
