//! Tests for the User, Product, and Order schemas

use rust_decimal_macros::dec;
use serde_json::json;
use storefront_kernel::{
    Category, CategoryId, Entity, ImageId, LineItem, Money, Order, OrderStatus, Product,
    ProductImage, Quantity, Role, User,
};

fn sample_user() -> User {
    User {
        id: "user-1".into(),
        email: "customer@example.com".to_string(),
        password: "password123".to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        role: Role::Customer,
    }
}

mod user_tests {
    use super::*;

    #[test]
    fn test_json_uses_camel_case_and_lowercase_role() {
        let value = serde_json::to_value(sample_user()).unwrap();
        assert_eq!(value["firstName"], "John");
        assert_eq!(value["lastName"], "Doe");
        assert_eq!(value["role"], "customer");
    }

    #[test]
    fn test_unknown_role_rejected() {
        let mut value = serde_json::to_value(sample_user()).unwrap();
        value["role"] = json!("superuser");
        assert!(serde_json::from_value::<User>(value).is_err());
    }

    #[test]
    fn test_full_name_and_entity_id() {
        let user = sample_user();
        assert_eq!(user.full_name(), "John Doe");
        assert_eq!(user.id().as_str(), "user-1");
        assert_eq!(User::KIND, "user");
        assert!(!user.is_admin());
    }
}

mod product_tests {
    use super::*;

    #[test]
    fn test_negative_stock_rejected() {
        let value = json!({
            "id": "product-1",
            "name": "Test Product 1",
            "description": "desc",
            "price": "29.99",
            "sku": "TEST-001",
            "stock": -1,
            "categoryId": "category-1"
        });
        assert!(serde_json::from_value::<Product>(value).is_err());
    }

    #[test]
    fn test_deserializes_valid_product() {
        let value = json!({
            "id": "product-1",
            "name": "Test Product 1",
            "description": "desc",
            "price": "29.99",
            "sku": "TEST-001",
            "stock": 0,
            "categoryId": "category-1"
        });
        let product: Product = serde_json::from_value(value).unwrap();
        assert_eq!(product.price.amount(), dec!(29.99));
        assert_eq!(product.category_id, CategoryId::from("category-1"));
        assert!(!product.in_stock());
    }

    #[test]
    fn test_category_description_is_optional() {
        let category: Category = serde_json::from_value(json!({
            "id": "category-1",
            "name": "Electronics",
            "slug": "electronics"
        }))
        .unwrap();
        assert!(category.description.is_none());
    }

    #[test]
    fn test_primary_image_falls_back_to_first() {
        let image = |id: &str, is_primary| ProductImage {
            id: ImageId::from(id),
            url: format!("https://cdn.example.com/{id}.png"),
            alt: id.to_string(),
            is_primary,
        };
        let images = vec![image("image-1", false), image("image-2", true)];
        assert_eq!(ProductImage::primary(&images).unwrap().id.as_str(), "image-2");

        let no_primary = vec![image("image-3", false)];
        assert_eq!(ProductImage::primary(&no_primary).unwrap().id.as_str(), "image-3");
        assert!(ProductImage::primary(&[]).is_none());
    }
}

mod order_tests {
    use super::*;

    fn sample_order() -> Order {
        Order {
            id: "order-1".into(),
            user_id: "user-1".into(),
            items: vec![
                LineItem::new("product-1", Quantity::new(2).unwrap()),
                LineItem::new("product-2", Quantity::ONE),
            ],
            total: Money::new(dec!(109.97)).unwrap(),
            status: OrderStatus::Pending,
        }
    }

    #[test]
    fn test_item_count_sums_quantities() {
        assert_eq!(sample_order().item_count(), 3);
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample_order()).unwrap();
        assert_eq!(value["userId"], "user-1");
        assert_eq!(value["items"][0]["productId"], "product-1");
        assert_eq!(value["items"][0]["quantity"], 2);
        assert_eq!(value["status"], "pending");
    }

    #[test]
    fn test_status_parses_lowercase() {
        let status: OrderStatus = serde_json::from_value(json!("shipped")).unwrap();
        assert_eq!(status, OrderStatus::Shipped);
        assert!(OrderStatus::Pending.can_advance_to(status));
        assert!(!status.can_advance_to(OrderStatus::Shipped));
    }
}
