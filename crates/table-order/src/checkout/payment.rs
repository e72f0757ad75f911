//! Simulated payment. Nothing is charged; every payment succeeds.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    /// `TXN-` followed by the payment time in epoch milliseconds.
    pub transaction_id: String,
    pub amount: Decimal,
    pub paid_at: DateTime<Utc>,
}

pub fn simulate_payment(amount: Decimal) -> PaymentReceipt {
    let paid_at = Utc::now();
    PaymentReceipt {
        transaction_id: format!("TXN-{}", paid_at.timestamp_millis()),
        amount,
        paid_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_carries_amount() {
        let receipt = simulate_payment(Decimal::new(2000, 2));
        assert_eq!(receipt.amount.to_string(), "20.00");
        assert!(receipt.transaction_id.starts_with("TXN-"));
        assert_eq!(
            receipt.transaction_id,
            format!("TXN-{}", receipt.paid_at.timestamp_millis())
        );
    }
}
