use async_trait::async_trait;
use table_order::checkout::{
    CheckoutBackend, CheckoutCoordinator, CheckoutError, CheckoutState, LocalBackend,
};
use table_order::lifecycle::Storefront;
use table_order::model::{CartItem, Order, OrderDraft, OrderId, TableId};

fn dish(id: u64, price: &str, quantity: u32) -> CartItem {
    CartItem {
        id,
        name: format!("Dish {id}"),
        price: price.parse().unwrap(),
        quantity,
        image: format!("/images/{id}.png"),
    }
}

/// Full lock → order → release → relock cycle through the coordinator.
#[tokio::test]
async fn test_checkout_releases_table_after_order() {
    let system = Storefront::in_memory(32);
    let mut checkout = CheckoutCoordinator::new(system.backend());
    checkout.cart_mut().add(dish(1, "10", 2));

    checkout.proceed_to_checkout(Some("T1")).await.unwrap();
    let t1 = TableId::parse("T1").unwrap();
    assert!(!system.table_client.lock(&t1).await.unwrap());

    let order = checkout.place_order(None).await.unwrap();
    assert_eq!(order.total.to_string(), "20.00");
    assert_eq!(checkout.state(), CheckoutState::Idle);

    assert!(system.table_client.lock(&t1).await.unwrap());
    let listed = system.order_client.list_orders(Some(t1)).await.unwrap();
    assert_eq!(listed, vec![order]);
}

#[tokio::test]
async fn test_second_diner_sees_table_in_use() {
    let system = Storefront::in_memory(32);
    let mut first = CheckoutCoordinator::new(system.backend());
    let mut second = CheckoutCoordinator::new(system.backend());
    first.cart_mut().add(dish(1, "8.50", 1));
    second.cart_mut().add(dish(2, "3.00", 4));

    first.proceed_to_checkout(Some("T3")).await.unwrap();
    let result = second.proceed_to_checkout(Some("T3")).await;

    assert!(matches!(result, Err(CheckoutError::TableInUse(_))));
    assert_eq!(result.unwrap_err().to_string(), "Table already in use: T3");
    assert_eq!(second.state(), CheckoutState::Idle);

    first.place_order(None).await.unwrap();
    second.proceed_to_checkout(Some("T3")).await.unwrap();
    let order = second.place_order(Some("Quick service".into())).await.unwrap();
    assert_eq!(order.total.to_string(), "12.00");
    assert_eq!(order.feedback.as_deref(), Some("Quick service"));
}

#[tokio::test]
async fn test_abandoned_checkout_keeps_table_locked() {
    let system = Storefront::in_memory(32);
    let mut checkout = CheckoutCoordinator::new(system.backend());
    checkout.cart_mut().add(dish(1, "5", 1));

    checkout.proceed_to_checkout(Some("T4")).await.unwrap();
    checkout.abandon();

    let locked = system.table_client.locked_tables().await.unwrap();
    assert_eq!(locked, vec![TableId::parse("T4").unwrap()]);
}

#[tokio::test]
async fn test_feedback_after_order() {
    let system = Storefront::in_memory(32);
    let mut checkout = CheckoutCoordinator::new(system.backend());
    checkout.cart_mut().add(dish(1, "5", 1));

    checkout.proceed_to_checkout(Some("T5")).await.unwrap();
    let order = checkout.place_order(None).await.unwrap();

    let updated = checkout.leave_feedback(&order.id, "Great").await.unwrap();
    assert_eq!(updated.feedback.as_deref(), Some("Great"));
}

/// Real table registry, order submission that always fails.
struct OrdersDown(LocalBackend);

#[async_trait]
impl CheckoutBackend for OrdersDown {
    async fn lock_table(&self, table: &TableId) -> Result<bool, CheckoutError> {
        self.0.lock_table(table).await
    }

    async fn release_table(&self, table: &TableId) -> Result<(), CheckoutError> {
        self.0.release_table(table).await
    }

    async fn submit_order(&self, _draft: OrderDraft) -> Result<Order, CheckoutError> {
        Err(CheckoutError::Rejected {
            status: 503,
            message: "Service unavailable".to_string(),
        })
    }

    async fn leave_feedback(&self, order: &OrderId, text: &str) -> Result<Order, CheckoutError> {
        self.0.leave_feedback(order, text).await
    }
}

#[tokio::test]
async fn test_submission_failure_keeps_lock_and_cart() {
    let system = Storefront::in_memory(32);
    let mut checkout = CheckoutCoordinator::new(OrdersDown(system.backend()));
    checkout.cart_mut().add(dish(1, "5", 1));
    checkout.proceed_to_checkout(Some("T6")).await.unwrap();

    let result = checkout.place_order(None).await;

    assert!(matches!(result, Err(CheckoutError::Rejected { status: 503, .. })));
    assert_eq!(checkout.state(), CheckoutState::PaymentSimulated);
    assert_eq!(checkout.cart().total_items(), 1);
    assert_eq!(
        system.table_client.locked_tables().await.unwrap(),
        vec![TableId::parse("T6").unwrap()]
    );
    assert!(system.order_client.list_orders(None).await.unwrap().is_empty());
}
