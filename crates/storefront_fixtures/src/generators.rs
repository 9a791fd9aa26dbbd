//! Randomized Fixture Generators
//!
//! Each generator returns one complete entity built from randomized defaults
//! with the caller's overrides applied last. Generators have no side effects;
//! registering the result is the factory's job.
//!
//! Randomness comes from `fake`'s thread-local RNG. Suffixes are short and
//! collisions between them are possible, which is acceptable for test data.

use fake::Fake;
use std::ops::Range;
use storefront_kernel::{
    CategoryId, LineItem, Money, Order, OrderId, OrderStatus, Product, ProductId, Quantity, Role,
    User, UserId,
};

use crate::overrides::{OrderOverrides, ProductOverrides, UserOverrides};

/// Password given to every generated user
pub const DEFAULT_PASSWORD: &str = "password123";

/// User an order belongs to when no override names one
pub const DEFAULT_ORDER_USER: &str = "user-1";

pub const SUFFIX_LEN: usize = 6;
const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

pub const PRICE_RANGE: Range<u64> = 10..110;
pub const STOCK_RANGE: Range<u32> = 10..210;
pub const TOTAL_RANGE: Range<u64> = 50..550;
pub const QUANTITY_RANGE: Range<u32> = 1..4;

/// Number of seeded categories (`category-1` ..= `category-3`)
pub const SEEDED_CATEGORIES: u32 = 3;

/// Number of seeded products (`product-1` ..= `product-3`)
pub const SEEDED_PRODUCTS: u32 = 3;

/// Returns a short lowercase alphanumeric suffix
pub fn random_suffix() -> String {
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARSET[(0..SUFFIX_CHARSET.len()).fake::<usize>()] as char)
        .collect()
}

fn seeded_index(count: u32) -> u32 {
    (1..count + 1).fake::<u32>()
}

/// Generates a user
///
/// Defaults: `user-<s>`, `test-<s>@example.com`, password `password123`,
/// "Test User<s>", customer role.
pub fn generate_user(overrides: UserOverrides) -> User {
    let suffix = random_suffix();
    let defaults = User {
        id: UserId::from_suffix(&suffix),
        email: format!("test-{suffix}@example.com"),
        password: DEFAULT_PASSWORD.to_string(),
        first_name: "Test".to_string(),
        last_name: format!("User{suffix}"),
        role: Role::Customer,
    };
    overrides.apply_to(defaults)
}

/// Generates a product
///
/// Price is a whole amount in [10, 110), stock in [10, 210), and the category
/// one of the three seeded categories.
pub fn generate_product(overrides: ProductOverrides) -> Product {
    let suffix = random_suffix();
    let defaults = Product {
        id: ProductId::from_suffix(&suffix),
        name: format!("Test Product {suffix}"),
        description: format!("Description for test product {suffix}"),
        price: Money::from_whole(PRICE_RANGE.fake::<u64>()),
        sku: format!("TEST-{}", suffix.to_uppercase()),
        stock: STOCK_RANGE.fake::<u32>(),
        category_id: CategoryId::from_suffix(seeded_index(SEEDED_CATEGORIES)),
    };
    overrides.apply_to(defaults)
}

/// Generates an order
///
/// Defaults to a single line item for one of the seeded products, a whole
/// total in [50, 550), `user-1` as the owner, and `pending` status. Overrides
/// win for every field, status included.
pub fn generate_order(overrides: OrderOverrides) -> Order {
    let suffix = random_suffix();
    let defaults = Order {
        id: OrderId::from_suffix(&suffix),
        user_id: UserId::from(DEFAULT_ORDER_USER),
        items: vec![LineItem::new(
            ProductId::from_suffix(seeded_index(SEEDED_PRODUCTS)),
            Quantity::at_least_one(QUANTITY_RANGE.fake::<u32>()),
        )],
        total: Money::from_whole(TOTAL_RANGE.fake::<u64>()),
        status: OrderStatus::Pending,
    };
    overrides.apply_to(defaults)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_suffix_shape() {
        let suffix = random_suffix();
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix.bytes().all(|b| SUFFIX_CHARSET.contains(&b)));
    }

    #[test]
    fn test_user_fields_derive_from_one_suffix() {
        let user = generate_user(UserOverrides::default());
        let suffix = user.id.as_str().strip_prefix("user-").unwrap();
        assert_eq!(user.email, format!("test-{suffix}@example.com"));
        assert_eq!(user.last_name, format!("User{suffix}"));
        assert_eq!(user.password, DEFAULT_PASSWORD);
        assert_eq!(user.role, Role::Customer);
    }

    #[test]
    fn test_product_sku_is_uppercased_suffix() {
        let product = generate_product(ProductOverrides::default());
        let suffix = product.id.as_str().strip_prefix("product-").unwrap();
        assert_eq!(product.sku, format!("TEST-{}", suffix.to_uppercase()));
        assert_eq!(product.price.amount().fract(), Decimal::ZERO);
    }

    #[test]
    fn test_seeded_index_stays_in_range() {
        for _ in 0..200 {
            let index = seeded_index(SEEDED_PRODUCTS);
            assert!((1..=SEEDED_PRODUCTS).contains(&index));
        }
    }
}
