//! Field overrides for fixture generation
//!
//! An override carries any subset of an entity's fields. Generators build a
//! complete default entity first and then apply the override on top, so every
//! field present in the override ends up in the result unchanged.
//!
//! Overrides can be built with the `with_*` setters or deserialized from a
//! partial camelCase JSON object:
//!
//! ```rust
//! use storefront_fixtures::OrderOverrides;
//! use storefront_kernel::OrderStatus;
//!
//! let overrides: OrderOverrides =
//!     serde_json::from_value(serde_json::json!({ "status": "shipped" })).unwrap();
//! assert_eq!(overrides.status, Some(OrderStatus::Shipped));
//! ```

use serde::Deserialize;
use storefront_kernel::{
    CategoryId, LineItem, Money, Order, OrderId, OrderStatus, Product, ProductId, Role, User,
    UserId,
};

/// Partial user fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct UserOverrides {
    pub id: Option<UserId>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<Role>,
}

impl UserOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<UserId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_first_name(mut self, name: impl Into<String>) -> Self {
        self.first_name = Some(name.into());
        self
    }

    pub fn with_last_name(mut self, name: impl Into<String>) -> Self {
        self.last_name = Some(name.into());
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Shorthand for an admin override
    pub fn admin() -> Self {
        Self::new().with_role(Role::Admin)
    }

    /// Replaces every field of `base` that this override sets
    pub fn apply_to(self, base: User) -> User {
        User {
            id: self.id.unwrap_or(base.id),
            email: self.email.unwrap_or(base.email),
            password: self.password.unwrap_or(base.password),
            first_name: self.first_name.unwrap_or(base.first_name),
            last_name: self.last_name.unwrap_or(base.last_name),
            role: self.role.unwrap_or(base.role),
        }
    }
}

/// Partial product fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ProductOverrides {
    pub id: Option<ProductId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Money>,
    pub sku: Option<String>,
    pub stock: Option<u32>,
    pub category_id: Option<CategoryId>,
}

impl ProductOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<ProductId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn with_category_id(mut self, category_id: impl Into<CategoryId>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// Shorthand for a product with no stock left
    pub fn out_of_stock() -> Self {
        Self::new().with_stock(0)
    }

    /// Replaces every field of `base` that this override sets
    pub fn apply_to(self, base: Product) -> Product {
        Product {
            id: self.id.unwrap_or(base.id),
            name: self.name.unwrap_or(base.name),
            description: self.description.unwrap_or(base.description),
            price: self.price.unwrap_or(base.price),
            sku: self.sku.unwrap_or(base.sku),
            stock: self.stock.unwrap_or(base.stock),
            category_id: self.category_id.unwrap_or(base.category_id),
        }
    }
}

/// Partial order fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct OrderOverrides {
    pub id: Option<OrderId>,
    pub user_id: Option<UserId>,
    pub items: Option<Vec<LineItem>>,
    pub total: Option<Money>,
    pub status: Option<OrderStatus>,
}

impl OrderOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<OrderId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<UserId>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_items(mut self, items: Vec<LineItem>) -> Self {
        self.items = Some(items);
        self
    }

    /// Appends one line item, starting from an empty list
    pub fn with_item(mut self, item: LineItem) -> Self {
        self.items.get_or_insert_with(Vec::new).push(item);
        self
    }

    pub fn with_total(mut self, total: Money) -> Self {
        self.total = Some(total);
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Shorthand for an order placed by `user`
    pub fn for_user(user: &User) -> Self {
        Self::new().with_user_id(user.id.clone())
    }

    /// Replaces every field of `base` that this override sets
    pub fn apply_to(self, base: Order) -> Order {
        Order {
            id: self.id.unwrap_or(base.id),
            user_id: self.user_id.unwrap_or(base.user_id),
            items: self.items.unwrap_or(base.items),
            total: self.total.unwrap_or(base.total),
            status: self.status.unwrap_or(base.status),
        }
    }
}
