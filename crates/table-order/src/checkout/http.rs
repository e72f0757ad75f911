//! Checkout over the storefront's HTTP API.

use crate::api::payload::{ApiMessage, FeedbackRequest, FeedbackResponse, OrderRef, TableRequest};
use crate::checkout::{CheckoutBackend, CheckoutError};
use crate::model::{Order, OrderDraft, OrderId, TableId};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Talks to a running server, e.g. `HttpBackend::new("http://localhost:5000")`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, CheckoutError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiMessage>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| status.to_string());
            warn!(%url, status = status.as_u16(), %message, "Request rejected");
            return Err(CheckoutError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl CheckoutBackend for HttpBackend {
    #[instrument(skip(self))]
    async fn lock_table(&self, table: &TableId) -> Result<bool, CheckoutError> {
        let request = TableRequest::new(table);
        let reply: ApiMessage = self.post("lockTable", &request).await?;
        Ok(reply.success)
    }

    #[instrument(skip(self))]
    async fn release_table(&self, table: &TableId) -> Result<(), CheckoutError> {
        let request = TableRequest::new(table);
        let _: ApiMessage = self.post("releaseTable", &request).await?;
        Ok(())
    }

    #[instrument(skip(self, draft))]
    async fn submit_order(&self, draft: OrderDraft) -> Result<Order, CheckoutError> {
        self.post("orders", &draft).await
    }

    #[instrument(skip(self, feedback))]
    async fn leave_feedback(
        &self,
        order: &OrderId,
        feedback: &str,
    ) -> Result<Order, CheckoutError> {
        let request = FeedbackRequest {
            order_id: Some(OrderRef::from(order)),
            feedback: Some(feedback.to_string()),
        };
        let reply: FeedbackResponse = self.post("feedback", &request).await?;
        Ok(reply.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let backend = HttpBackend::new("http://localhost:5000/");
        assert_eq!(backend.url("lockTable"), "http://localhost:5000/api/lockTable");
    }
}
