//! Orders, line items, and the order status lifecycle

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entity::Entity;
use crate::error::KernelError;
use crate::identifiers::{OrderId, ProductId, UserId};
use crate::money::{Money, Quantity};

/// Order status
///
/// Statuses form a one-directional lifecycle:
/// pending -> confirmed -> shipped -> delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Returns the next lifecycle step, if any
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::Shipped),
            OrderStatus::Shipped => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }

    /// Returns true if `target` lies later in the lifecycle
    pub fn can_advance_to(&self, target: OrderStatus) -> bool {
        target > *self
    }

    /// Moves to `target`, refusing backwards or same-step moves
    pub fn advance_to(self, target: OrderStatus) -> Result<OrderStatus, KernelError> {
        if self.can_advance_to(target) {
            Ok(target)
        } else {
            Err(KernelError::InvalidStatusTransition { from: self, to: target })
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One product line of an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: ProductId,
    pub quantity: Quantity,
}

impl LineItem {
    pub fn new(product_id: impl Into<ProductId>, quantity: Quantity) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// A customer order
///
/// `user_id` is a weak back-reference. Nothing checks that the user exists,
/// and `total` is stored as given rather than derived from the items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<LineItem>,
    pub total: Money,
    pub status: OrderStatus,
}

impl Order {
    /// Sum of all line-item quantities
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity.get())).sum()
    }
}

impl Entity for Order {
    type Id = OrderId;
    const KIND: &'static str = "order";

    fn id(&self) -> &OrderId {
        &self.id
    }
}
