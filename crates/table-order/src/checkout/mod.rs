//! # Checkout
//!
//! The diner-side half of the storefront: a cart and the coordinator that
//! walks one checkout through its states.
//!
//! ```text
//! Idle ──proceed_to_checkout──▶ TableAcquisition ──locked──▶ PaymentSimulated
//!  ▲            │ table in use                                   │ place_order
//!  │            ▼                                                ▼
//!  └──────── Idle ◀──────────── release ◀──────────────── OrderSubmitted
//! ```
//!
//! The coordinator talks to the stores through a [`CheckoutBackend`]:
//! [`LocalBackend`] calls the actors in-process, [`HttpBackend`] goes through
//! the HTTP API. Both behave the same from the coordinator's point of view.

pub mod backend;
pub mod cart;
pub mod coordinator;
pub mod error;
pub mod http;
pub mod payment;

pub use backend::{CheckoutBackend, LocalBackend};
pub use cart::Cart;
pub use coordinator::{CheckoutCoordinator, CheckoutState};
pub use error::CheckoutError;
pub use http::HttpBackend;
pub use payment::PaymentReceipt;
