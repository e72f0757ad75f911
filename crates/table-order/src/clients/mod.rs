//! Typed wrappers around the generic [`ResourceClient`](actor_framework::ResourceClient)s.
//!
//! Each wrapper turns framework outcomes into domain answers: a lock that
//! already exists becomes `Ok(false)`, an unknown order becomes
//! [`OrderError::NotFound`](crate::order_actor::OrderError::NotFound).

pub mod order_client;
pub mod table_client;

pub use order_client::OrderClient;
pub use table_client::TableClient;
