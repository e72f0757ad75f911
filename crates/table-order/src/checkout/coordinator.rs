use crate::checkout::payment::simulate_payment;
use crate::checkout::{Cart, CheckoutBackend, CheckoutError, PaymentReceipt};
use crate::model::{Order, OrderDraft, OrderId, TableId};
use chrono::Utc;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    Idle,
    /// Waiting for the table lock.
    TableAcquisition,
    /// Table locked and payment recorded; the order can be placed.
    PaymentSimulated,
    /// Order stored, table not yet released.
    OrderSubmitted,
}

/// Sequences one diner's checkout: lock the table, take the (simulated)
/// payment, submit the order, release the table.
///
/// Owns the session's cart and remembers the table between checkouts.
///
/// A checkout that fails after the table was locked does not release it:
/// a failed submission leaves the coordinator in
/// [`CheckoutState::PaymentSimulated`] with the cart intact so it can be
/// retried, and [`abandon`](Self::abandon) drops back to `Idle` with the lock
/// still held.
pub struct CheckoutCoordinator<B> {
    backend: B,
    cart: Cart,
    table: Option<TableId>,
    state: CheckoutState,
    receipt: Option<PaymentReceipt>,
}

impl<B: CheckoutBackend> CheckoutCoordinator<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cart: Cart::new(),
            table: None,
            state: CheckoutState::Idle,
            receipt: None,
        }
    }

    /// Starts with a table remembered from an earlier session.
    pub fn with_table(mut self, table: TableId) -> Self {
        self.table = Some(table);
        self
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    pub fn table(&self) -> Option<&TableId> {
        self.table.as_ref()
    }

    pub fn receipt(&self) -> Option<&PaymentReceipt> {
        self.receipt.as_ref()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Locks the table and records the payment.
    ///
    /// Uses the remembered table if there is one, `table_hint` otherwise.
    /// When the table is taken the coordinator goes back to `Idle` and reports
    /// [`CheckoutError::TableInUse`].
    #[instrument(skip(self))]
    pub async fn proceed_to_checkout(
        &mut self,
        table_hint: Option<&str>,
    ) -> Result<PaymentReceipt, CheckoutError> {
        self.expect_state(CheckoutState::Idle, "proceed to checkout")?;

        let table = match (&self.table, table_hint) {
            (Some(table), _) => table.clone(),
            (None, Some(hint)) => {
                TableId::parse(hint).map_err(|_| CheckoutError::TableRequired)?
            }
            (None, None) => return Err(CheckoutError::TableRequired),
        };

        self.state = CheckoutState::TableAcquisition;
        let acquired = match self.backend.lock_table(&table).await {
            Ok(acquired) => acquired,
            Err(e) => {
                self.state = CheckoutState::Idle;
                return Err(e);
            }
        };
        if !acquired {
            info!(%table, "Table already in use");
            self.state = CheckoutState::Idle;
            return Err(CheckoutError::TableInUse(table));
        }

        let receipt = simulate_payment(self.cart.total());
        info!(%table, transaction_id = %receipt.transaction_id, amount = %receipt.amount, "Payment recorded");
        self.table = Some(table);
        self.receipt = Some(receipt.clone());
        self.state = CheckoutState::PaymentSimulated;
        Ok(receipt)
    }

    /// Submits the cart as an order, then clears the cart and releases the table.
    #[instrument(skip(self, feedback))]
    pub async fn place_order(&mut self, feedback: Option<String>) -> Result<Order, CheckoutError> {
        self.expect_state(CheckoutState::PaymentSimulated, "place order")?;
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let table = self.table.clone().ok_or(CheckoutError::TableRequired)?;

        let draft = OrderDraft {
            table_num: table.clone(),
            dishes: self.cart.items().to_vec(),
            total: self.cart.total(),
            order_time: Utc::now(),
            feedback,
        };
        let order = self.backend.submit_order(draft).await?;
        self.state = CheckoutState::OrderSubmitted;
        self.cart.clear();

        if let Err(e) = self.backend.release_table(&table).await {
            // The order exists; the table stays locked until released by hand.
            warn!(%table, error = %e, "Table release failed after order");
        }

        info!(order_id = %order.id, %table, "Checkout complete");
        self.table = None;
        self.receipt = None;
        self.state = CheckoutState::Idle;
        Ok(order)
    }

    /// Leaves the checkout without releasing the table.
    pub fn abandon(&mut self) {
        if self.state != CheckoutState::Idle {
            warn!(table = ?self.table, state = ?self.state, "Checkout abandoned, table stays locked");
        }
        self.receipt = None;
        self.state = CheckoutState::Idle;
    }

    pub async fn leave_feedback(
        &self,
        order: &OrderId,
        feedback: &str,
    ) -> Result<Order, CheckoutError> {
        self.backend.leave_feedback(order, feedback).await
    }

    fn expect_state(
        &self,
        expected: CheckoutState,
        operation: &'static str,
    ) -> Result<(), CheckoutError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(CheckoutError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CartItem, OrderStatus};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Records calls and answers from fixed settings.
    #[derive(Clone, Default)]
    struct ScriptedBackend {
        table_taken: bool,
        fail_submit: bool,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedBackend {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl CheckoutBackend for ScriptedBackend {
        async fn lock_table(&self, table: &TableId) -> Result<bool, CheckoutError> {
            self.record(format!("lock {table}"));
            Ok(!self.table_taken)
        }

        async fn release_table(&self, table: &TableId) -> Result<(), CheckoutError> {
            self.record(format!("release {table}"));
            Ok(())
        }

        async fn submit_order(&self, draft: OrderDraft) -> Result<Order, CheckoutError> {
            self.record(format!("submit {} {}", draft.table_num, draft.total));
            if self.fail_submit {
                return Err(CheckoutError::Rejected {
                    status: 500,
                    message: "Internal server error".to_string(),
                });
            }
            Ok(Order::from_draft(OrderId::from("1"), draft))
        }

        async fn leave_feedback(
            &self,
            _order: &OrderId,
            _feedback: &str,
        ) -> Result<Order, CheckoutError> {
            unreachable!("not used in these tests")
        }
    }

    fn coordinator(backend: ScriptedBackend) -> CheckoutCoordinator<ScriptedBackend> {
        let mut coordinator = CheckoutCoordinator::new(backend);
        coordinator.cart_mut().add(CartItem {
            id: 1,
            name: "Paneer Tikka".to_string(),
            price: "10.00".parse().unwrap(),
            quantity: 2,
            image: String::new(),
        });
        coordinator
    }

    #[tokio::test]
    async fn test_happy_path() {
        let backend = ScriptedBackend::default();
        let mut checkout = coordinator(backend.clone());

        let receipt = checkout.proceed_to_checkout(Some("T1")).await.unwrap();
        assert_eq!(receipt.amount.to_string(), "20.00");
        assert_eq!(checkout.state(), CheckoutState::PaymentSimulated);

        let order = checkout.place_order(None).await.unwrap();
        assert_eq!(order.total.to_string(), "20.00");
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(checkout.state(), CheckoutState::Idle);
        assert!(checkout.cart().is_empty());
        assert!(checkout.table().is_none());
        assert_eq!(
            backend.calls(),
            vec!["lock T1", "submit T1 20.00", "release T1"]
        );
    }

    #[tokio::test]
    async fn test_missing_table() {
        let mut checkout = coordinator(ScriptedBackend::default());
        assert!(matches!(
            checkout.proceed_to_checkout(None).await,
            Err(CheckoutError::TableRequired)
        ));
        assert!(matches!(
            checkout.proceed_to_checkout(Some("  ")).await,
            Err(CheckoutError::TableRequired)
        ));
        assert_eq!(checkout.state(), CheckoutState::Idle);
    }

    #[tokio::test]
    async fn test_remembered_table_wins_over_hint() {
        let backend = ScriptedBackend::default();
        let mut checkout = coordinator(backend.clone()).with_table(TableId::parse("T7").unwrap());

        checkout.proceed_to_checkout(Some("T1")).await.unwrap();
        assert_eq!(backend.calls(), vec!["lock T7"]);
    }

    #[tokio::test]
    async fn test_table_in_use_returns_to_idle() {
        let backend = ScriptedBackend {
            table_taken: true,
            ..Default::default()
        };
        let mut checkout = coordinator(backend.clone());

        let result = checkout.proceed_to_checkout(Some("T2")).await;
        assert!(matches!(result, Err(CheckoutError::TableInUse(t)) if t.as_str() == "T2"));
        assert_eq!(checkout.state(), CheckoutState::Idle);
        assert!(checkout.receipt().is_none());
        assert_eq!(checkout.cart().items().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_lock_and_cart() {
        let backend = ScriptedBackend {
            fail_submit: true,
            ..Default::default()
        };
        let mut checkout = coordinator(backend.clone());

        checkout.proceed_to_checkout(Some("T3")).await.unwrap();
        assert!(checkout.place_order(None).await.is_err());

        assert_eq!(checkout.state(), CheckoutState::PaymentSimulated);
        assert_eq!(checkout.cart().total_items(), 2);
        assert!(!backend.calls().iter().any(|c| c.starts_with("release")));
    }

    #[tokio::test]
    async fn test_place_order_requires_payment_and_items() {
        let mut checkout = coordinator(ScriptedBackend::default());
        assert!(matches!(
            checkout.place_order(None).await,
            Err(CheckoutError::InvalidState { .. })
        ));

        checkout.proceed_to_checkout(Some("T4")).await.unwrap();
        checkout.cart_mut().clear();
        assert!(matches!(
            checkout.place_order(None).await,
            Err(CheckoutError::EmptyCart)
        ));
    }

    #[tokio::test]
    async fn test_abandon_keeps_lock() {
        let backend = ScriptedBackend::default();
        let mut checkout = coordinator(backend.clone());

        checkout.proceed_to_checkout(Some("T5")).await.unwrap();
        checkout.abandon();

        assert_eq!(checkout.state(), CheckoutState::Idle);
        assert_eq!(checkout.table().map(TableId::as_str), Some("T5"));
        assert_eq!(backend.calls(), vec!["lock T5"]);
    }
}
