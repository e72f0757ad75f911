use crate::checkout::CheckoutState;
use crate::model::TableId;
use crate::order_actor::OrderError;
use crate::table_actor::TableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckoutError {
    /// No remembered table and no usable hint.
    #[error("Table number required")]
    TableRequired,

    #[error("Table already in use: {0}")]
    TableInUse(TableId),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Cannot {operation} in state {state:?}")]
    InvalidState {
        operation: &'static str,
        state: CheckoutState,
    },

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with an error status.
    #[error("Server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
}
