//! Request and response bodies shared by the handlers and [`HttpBackend`](crate::checkout::HttpBackend).

use crate::model::{Order, OrderId, TableId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableRequest {
    #[serde(default)]
    pub table: Option<String>,
}

impl TableRequest {
    pub fn new(table: &TableId) -> Self {
        Self {
            table: Some(table.to_string()),
        }
    }
}

/// `{ "success": bool, "message"?: string }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiMessage {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    #[serde(default)]
    pub order_id: Option<OrderRef>,
    #[serde(default)]
    pub feedback: Option<String>,
}

/// An order id as clients send it: a string, or the bare number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderRef {
    Text(String),
    Number(u64),
}

impl OrderRef {
    /// `None` for a blank string.
    pub fn into_order_id(self) -> Option<OrderId> {
        match self {
            OrderRef::Text(text) => {
                let text = text.trim();
                (!text.is_empty()).then(|| OrderId::from(text))
            }
            OrderRef::Number(n) => Some(OrderId(n.to_string())),
        }
    }
}

impl From<&OrderId> for OrderRef {
    fn from(id: &OrderId) -> Self {
        OrderRef::Text(id.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub success: bool,
    pub message: String,
    pub order: Order,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrdersQuery {
    pub table: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
