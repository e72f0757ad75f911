//! Domain models for the storefront.
//!
//! The actor implementations for these types live next to their actors
//! ([`crate::table_actor`], [`crate::order_actor`]); this module only holds data.

pub mod cart;
pub mod order;
pub mod table;

pub use cart::*;
pub use order::*;
pub use table::*;
