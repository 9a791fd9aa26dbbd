//! Storefront Kernel - Entity schemas shared by the storefront test suite
//!
//! This crate provides the data contracts every fixture is built from:
//! - Strongly-typed string identifiers for each entity kind
//! - `Money` and `Quantity` value types that cannot hold invalid amounts
//! - User, Product, and Order shapes with their closed enumerations

pub mod identifiers;
pub mod money;
pub mod user;
pub mod product;
pub mod order;
pub mod entity;
pub mod error;

pub use identifiers::{UserId, ProductId, OrderId, CategoryId, ImageId};
pub use money::{Money, Quantity};
pub use user::{User, Role};
pub use product::{Product, Category, ProductImage};
pub use order::{Order, LineItem, OrderStatus};
pub use entity::Entity;
pub use error::KernelError;
