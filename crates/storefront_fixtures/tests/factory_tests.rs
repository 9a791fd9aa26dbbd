//! Tests for the tracking fixture factory
//!
//! Each test owns its factory; nothing is shared between tests.

use storefront_fixtures::{
    assert_contains_id, assert_ids_in_order, init_test_tracing, FixtureFactory, OrderOverrides,
    ProductOverrides, TestFactory, UserOverrides,
};
use storefront_kernel::{OrderStatus, ProductId, Role};

mod tracking {
    use super::*;

    #[test]
    fn test_created_user_is_tracked() {
        init_test_tracing();
        let mut factory = TestFactory::new();

        let user = factory.create_user(UserOverrides::default());
        let tracked = factory.created_users();

        assert_eq!(tracked.len(), 1);
        assert_eq!(tracked[0].id, user.id);
        assert_eq!(tracked[0], user);
    }

    #[test]
    fn test_products_tracked_in_call_order() {
        let mut factory = TestFactory::new();
        let ids: Vec<ProductId> = (0..5)
            .map(|_| factory.create_product(ProductOverrides::default()).id)
            .collect();

        let tracked = factory.created_products();
        assert_eq!(tracked.len(), 5);
        assert_ids_in_order(&tracked, &ids);
    }

    #[test]
    fn test_duplicate_ids_are_tracked_twice() {
        let mut factory = TestFactory::new();
        factory.create_product(ProductOverrides::new().with_id("product-dup"));
        factory.create_product(ProductOverrides::new().with_id("product-dup"));

        assert_eq!(factory.created_products().len(), 2);
    }

    #[test]
    fn test_kinds_are_tracked_separately() {
        let mut factory = TestFactory::new();
        let admin = factory.create_user(UserOverrides::admin());
        factory.create_product(ProductOverrides::default());
        let order = factory.create_order(
            OrderOverrides::for_user(&admin).with_status(OrderStatus::Delivered),
        );

        assert_eq!(admin.role, Role::Admin);
        assert_eq!(order.user_id, admin.id);
        assert_eq!(order.status, OrderStatus::Delivered);
        assert_eq!(factory.created_users().len(), 1);
        assert_eq!(factory.created_products().len(), 1);
        assert_contains_id(&factory.created_orders(), &order.id);
        assert_eq!(factory.created_count(), 3);
    }

    #[test]
    fn test_order_user_is_not_checked() {
        let mut factory = TestFactory::new();
        let order = factory.create_order(OrderOverrides::new().with_user_id("user-missing"));

        assert_eq!(order.user_id.as_str(), "user-missing");
        assert!(factory.created_users().is_empty());
    }
}

mod snapshots {
    use super::*;

    #[test]
    fn test_mutating_snapshot_does_not_affect_factory() {
        let mut factory = TestFactory::new();
        let user = factory.create_user(UserOverrides::default());

        let mut snapshot = factory.created_users();
        snapshot.clear();
        snapshot.push(storefront_fixtures::UserFixtures::admin());

        let again = factory.created_users();
        assert_eq!(again.len(), 1);
        assert_eq!(again[0].id, user.id);
    }

    #[test]
    fn test_mutating_snapshot_entity_does_not_affect_factory() {
        let mut factory = TestFactory::new();
        factory.create_order(OrderOverrides::default());

        let mut snapshot = factory.created_orders();
        snapshot[0].status = OrderStatus::Delivered;

        assert_eq!(factory.created_orders()[0].status, OrderStatus::Pending);
    }
}

mod cleanup {
    use super::*;

    #[tokio::test]
    async fn test_cleanup_empties_every_collection() {
        init_test_tracing();
        let mut factory = TestFactory::new();
        factory.create_user(UserOverrides::default());
        factory.create_product(ProductOverrides::default());
        factory.create_product(ProductOverrides::default());
        factory.create_order(OrderOverrides::default());

        factory.cleanup().await;

        assert!(factory.created_users().is_empty());
        assert!(factory.created_products().is_empty());
        assert!(factory.created_orders().is_empty());
        assert_eq!(factory.created_count(), 0);
    }

    #[tokio::test]
    async fn test_cleanup_on_empty_factory() {
        let mut factory = TestFactory::new();
        factory.cleanup().await;
        assert_eq!(factory.created_count(), 0);
    }

    #[tokio::test]
    async fn test_factory_is_reusable_after_cleanup() {
        let mut factory = TestFactory::new();
        factory.create_user(UserOverrides::default());
        factory.cleanup().await;

        let user = factory.create_user(UserOverrides::default());
        assert_ids_in_order(&factory.created_users(), &[user.id]);
    }

    #[tokio::test]
    async fn test_cleanup_through_trait_object() {
        let mut factory: Box<dyn FixtureFactory> = Box::new(TestFactory::new());
        factory.create_user(UserOverrides::default());
        factory.cleanup().await;
    }
}

mod isolation {
    use super::*;

    #[test]
    fn test_separate_factories_do_not_share_state() {
        let mut first = TestFactory::new();
        let second = TestFactory::new();

        first.create_user(UserOverrides::default());

        assert_eq!(first.created_users().len(), 1);
        assert!(second.created_users().is_empty());
    }

    #[tokio::test]
    async fn test_factories_in_parallel_tasks() {
        let handles: Vec<_> = (0..4)
            .map(|n| {
                tokio::spawn(async move {
                    let mut factory = TestFactory::new();
                    for _ in 0..n {
                        factory.create_product(ProductOverrides::default());
                    }
                    let count = factory.created_products().len();
                    factory.cleanup().await;
                    count
                })
            })
            .collect();

        for (n, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.await.unwrap(), n);
        }
    }
}
