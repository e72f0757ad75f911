//! # Order Actor
//!
//! This module implements the order store as a resource actor.
//!
//! ## Overview
//!
//! Orders are created from an [`OrderDraft`](crate::model::OrderDraft), listed
//! (optionally for one table) and amended only by attaching feedback. They are
//! never deleted.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`actions`] - [`OrderAction`] for feedback attachment
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Ids
//!
//! An order id is the creation time in epoch milliseconds. The generator runs
//! inside the actor and never hands out the same value twice: when two orders
//! arrive within one millisecond the second gets the next integer. Seeding the
//! actor with persisted orders starts the sequence above the highest stored id.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::{Order, OrderDraft, OrderId};
use actor_framework::ResourceActor;
use chrono::Utc;

/// Creates a new Order actor and its client, restoring `seed` in its stored order.
pub fn new(buffer_size: usize, seed: Vec<Order>) -> (ResourceActor<Order>, OrderClient) {
    let floor = seed.iter().filter_map(|o| o.id.millis()).max().unwrap_or(0);
    let (actor, generic_client) = ResourceActor::<Order>::new(buffer_size, order_ids(floor));
    let client = OrderClient::new(generic_client);

    (actor.with_seed(seed), client)
}

/// Time-based ids, strictly increasing and always above `floor`.
///
/// The sequence stops at `u64::MAX`. From there every id repeats and the actor
/// rejects the create as a duplicate; [`Storefront::start`](crate::lifecycle::Storefront::start)
/// refuses snapshots that would start there.
pub fn order_ids(floor: u64) -> impl FnMut(&OrderDraft) -> OrderId + Send + 'static {
    let mut last = floor;
    move |_draft: &OrderDraft| {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        last = now.max(last.saturating_add(1));
        OrderId(last.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableId;
    use rust_decimal::Decimal;

    fn draft() -> OrderDraft {
        OrderDraft {
            table_num: TableId::parse("T1").unwrap(),
            dishes: Vec::new(),
            total: Decimal::ZERO,
            order_time: Utc::now(),
            feedback: None,
        }
    }

    #[test]
    fn test_ids_are_strictly_increasing() {
        let mut next = order_ids(0);
        let ids: Vec<u64> = (0..100)
            .map(|_| next(&draft()).millis().unwrap())
            .collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_ids_start_above_floor() {
        let far_future = 99_999_999_999_999;
        let mut next = order_ids(far_future);
        assert_eq!(next(&draft()).millis(), Some(far_future + 1));
        assert_eq!(next(&draft()).millis(), Some(far_future + 2));
    }

    #[test]
    fn test_ids_stop_at_max() {
        let mut next = order_ids(u64::MAX - 1);
        assert_eq!(next(&draft()).millis(), Some(u64::MAX));
        assert_eq!(next(&draft()).millis(), Some(u64::MAX));
    }

    #[tokio::test]
    async fn test_exhausted_ids_reject_create() {
        let seeded = Order::from_draft(OrderId(u64::MAX.to_string()), draft());
        let (actor, client) = new(4, vec![seeded]);
        let handle = tokio::spawn(actor.run(()));

        assert!(client.create_order(draft()).await.is_err());
        // The actor is still serving.
        assert_eq!(client.list_orders(None).await.unwrap().len(), 1);

        drop(client);
        handle.await.unwrap();
    }
}
