//! Property-Based Test Strategies
//!
//! proptest strategies for schema values and override structures. Override
//! strategies leave each field unset about half the time, so properties cover
//! both the generated default and the caller-supplied value.

use proptest::option;
use proptest::prelude::*;
use rust_decimal::Decimal;
use storefront_kernel::{LineItem, Money, OrderStatus, Quantity, Role};

use crate::overrides::{OrderOverrides, ProductOverrides, UserOverrides};

/// Strategy for roles
pub fn role_strategy() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Customer), Just(Role::Admin)]
}

/// Strategy for order statuses
pub fn order_status_strategy() -> impl Strategy<Value = OrderStatus> {
    prop_oneof![
        Just(OrderStatus::Pending),
        Just(OrderStatus::Confirmed),
        Just(OrderStatus::Shipped),
        Just(OrderStatus::Delivered),
    ]
}

/// Strategy for non-negative amounts with up to two decimal places
pub fn money_strategy() -> impl Strategy<Value = Money> {
    (0i64..10_000_000i64, 0u32..3u32)
        .prop_map(|(mantissa, scale)| Money::new(Decimal::new(mantissa, scale)).unwrap_or_default())
}

/// Strategy for positive quantities
pub fn quantity_strategy() -> impl Strategy<Value = Quantity> {
    (1u32..1000u32).prop_map(Quantity::at_least_one)
}

/// Strategy for opaque identifiers with the given prefix
pub fn id_strategy(prefix: &'static str) -> impl Strategy<Value = String> {
    "[a-z0-9]{1,12}".prop_map(move |suffix| format!("{prefix}-{suffix}"))
}

/// Strategy for email addresses
pub fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{3,10}", "[a-z]{3,8}")
        .prop_map(|(local, domain)| format!("{}@{}.com", local, domain))
}

/// Strategy for names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}".prop_map(|s| s)
}

/// Strategy for line items
pub fn line_item_strategy() -> impl Strategy<Value = LineItem> {
    (id_strategy("product"), quantity_strategy())
        .prop_map(|(product_id, quantity)| LineItem::new(product_id, quantity))
}

/// Strategy for user overrides
pub fn user_overrides_strategy() -> impl Strategy<Value = UserOverrides> {
    (
        option::of(id_strategy("user")),
        option::of(email_strategy()),
        option::of("[a-zA-Z0-9]{8,16}"),
        option::of(name_strategy()),
        option::of(name_strategy()),
        option::of(role_strategy()),
    )
        .prop_map(|(id, email, password, first_name, last_name, role)| UserOverrides {
            id: id.map(Into::into),
            email,
            password,
            first_name,
            last_name,
            role,
        })
}

/// Strategy for product overrides
pub fn product_overrides_strategy() -> impl Strategy<Value = ProductOverrides> {
    (
        option::of(id_strategy("product")),
        option::of(name_strategy()),
        option::of("[a-z ]{0,40}"),
        option::of(money_strategy()),
        option::of("TEST-[A-Z0-9]{3,8}"),
        option::of(0u32..10_000u32),
        option::of(id_strategy("category")),
    )
        .prop_map(
            |(id, name, description, price, sku, stock, category_id)| ProductOverrides {
                id: id.map(Into::into),
                name,
                description,
                price,
                sku,
                stock,
                category_id: category_id.map(Into::into),
            },
        )
}

/// Strategy for order overrides
pub fn order_overrides_strategy() -> impl Strategy<Value = OrderOverrides> {
    (
        option::of(id_strategy("order")),
        option::of(id_strategy("user")),
        option::of(proptest::collection::vec(line_item_strategy(), 0..5)),
        option::of(money_strategy()),
        option::of(order_status_strategy()),
    )
        .prop_map(|(id, user_id, items, total, status)| OrderOverrides {
            id: id.map(Into::into),
            user_id: user_id.map(Into::into),
            items,
            total,
            status,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn money_is_never_negative(money in money_strategy()) {
            prop_assert!(money.amount() >= Decimal::ZERO);
        }

        #[test]
        fn quantity_is_positive(quantity in quantity_strategy()) {
            prop_assert!(quantity.get() >= 1);
        }

        #[test]
        fn ids_carry_prefix(id in id_strategy("order")) {
            prop_assert!(id.starts_with("order-"));
        }
    }
}
