//! Placed orders.
//!
//! # Actor Framework
//! [`Order`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! See [`crate::order_actor`] for details on:
//! - Creation parameters ([`OrderDraft`])
//! - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))

use crate::model::{CartItem, TableId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders: the creation time in epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    /// Numeric value of the id, if it has one.
    pub fn millis(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Every order starts here.
    #[default]
    Completed,
    Preparing,
    Delivered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub table_num: TableId,
    pub dishes: Vec<CartItem>,
    /// As submitted by the client; never recomputed.
    pub total: Decimal,
    pub order_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
}

/// Payload for creating a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub table_num: TableId,
    pub dishes: Vec<CartItem>,
    pub total: Decimal,
    #[serde(default = "Utc::now")]
    pub order_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// Restricts an order listing to one table.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFilter {
    pub table: TableId,
}

impl Order {
    pub fn from_draft(id: OrderId, draft: OrderDraft) -> Self {
        Self {
            id,
            table_num: draft.table_num,
            dishes: draft.dishes,
            total: draft.total,
            order_time: draft.order_time,
            feedback: draft.feedback,
            status: OrderStatus::Completed,
        }
    }
}
