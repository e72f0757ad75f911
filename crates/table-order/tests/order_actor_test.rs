use actor_framework::ActorClient;
use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use std::collections::HashSet;
use table_order::lifecycle::Storefront;
use table_order::model::{CartItem, OrderDraft, OrderId, OrderStatus, TableId};
use table_order::order_actor::OrderError;

fn draft(table: &str) -> OrderDraft {
    OrderDraft {
        table_num: TableId::parse(table).unwrap(),
        dishes: vec![CartItem {
            id: 1,
            name: "Masala Dosa".to_string(),
            price: Decimal::new(10, 0),
            quantity: 2,
            image: String::new(),
        }],
        total: "20.00".parse().unwrap(),
        order_time: Utc::now(),
        feedback: None,
    }
}

#[tokio::test]
async fn test_create_then_list_for_table() {
    let system = Storefront::in_memory(32);
    let orders = &system.order_client;

    let created = orders.create_order(draft("T2")).await.unwrap();
    orders.create_order(draft("T6")).await.unwrap();

    let listed = orders
        .list_orders(Some(TableId::parse("T2").unwrap()))
        .await
        .unwrap();
    assert_eq!(listed, vec![created.clone()]);
    assert_eq!(listed[0].status, OrderStatus::Completed);
    assert_eq!(listed[0].total.to_string(), "20.00");
    assert_eq!(listed[0].dishes[0].quantity, 2);
}

#[tokio::test]
async fn test_list_sorted_newest_first() {
    let system = Storefront::in_memory(32);
    let orders = &system.order_client;
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    for offset in [5, 1, 9, 3] {
        let mut d = draft("T1");
        d.order_time = base + Duration::minutes(offset);
        orders.create_order(d).await.unwrap();
    }

    let listed = orders.list_orders(None).await.unwrap();
    assert_eq!(listed.len(), 4);
    let minutes: Vec<i64> = listed
        .iter()
        .map(|o| (o.order_time - base).num_minutes())
        .collect();
    assert_eq!(minutes, vec![9, 5, 3, 1]);
}

#[tokio::test]
async fn test_equal_timestamps_newest_created_first() {
    let system = Storefront::in_memory(32);
    let orders = &system.order_client;
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    let mut ids = Vec::new();
    for _ in 0..3 {
        let mut d = draft("T1");
        d.order_time = at;
        ids.push(orders.create_order(d).await.unwrap().id);
    }
    ids.reverse();

    let listed: Vec<OrderId> = orders
        .list_orders(None)
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let system = Storefront::in_memory(64);

    let mut handles = Vec::new();
    for _ in 0..50 {
        let orders = system.order_client.clone();
        handles.push(tokio::spawn(async move {
            orders.create_order(draft("T4")).await.unwrap().id
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }
    assert_eq!(ids.len(), 50);
}

#[tokio::test]
async fn test_feedback_last_write_wins() {
    let system = Storefront::in_memory(32);
    let orders = &system.order_client;
    let order = orders.create_order(draft("T1")).await.unwrap();

    orders
        .attach_feedback(order.id.clone(), "Too spicy".to_string())
        .await
        .unwrap();
    let updated = orders
        .attach_feedback(order.id.clone(), "Perfect".to_string())
        .await
        .unwrap();
    assert_eq!(updated.feedback.as_deref(), Some("Perfect"));

    let stored = orders.get(order.id.clone()).await.unwrap().unwrap();
    assert_eq!(stored.feedback.as_deref(), Some("Perfect"));
    assert_eq!(stored.dishes, order.dishes);
}

#[tokio::test]
async fn test_feedback_on_unknown_order_changes_nothing() {
    let system = Storefront::in_memory(32);
    let orders = &system.order_client;
    orders.create_order(draft("T1")).await.unwrap();
    let before = orders.list_orders(None).await.unwrap();

    let result = orders
        .attach_feedback(OrderId::from("12345"), "Hello".to_string())
        .await;

    assert_eq!(result, Err(OrderError::NotFound("12345".to_string())));
    assert_eq!(orders.list_orders(None).await.unwrap(), before);
}
