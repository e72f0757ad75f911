//! Custom actions for the Order actor.
//!
//! Feedback is the only change an order accepts after it has been placed. It
//! is modelled as an action rather than a generic update so the store cannot
//! be used to rewrite dishes or totals.

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Overwrites the order's feedback text. Last write wins.
    AttachFeedback(String),
}
