//! # Table Order
//!
//! Storefront core for a restaurant's table ordering: a diner locks a table,
//! pays (simulated), places an order and may leave feedback afterwards.
//!
//! - **[table_actor]** / **[order_actor]**: the two stores, each a resource actor.
//! - **[clients]**: typed wrappers ([`TableClient`](clients::TableClient), [`OrderClient`](clients::OrderClient)).
//! - **[checkout]**: the diner-side cart and checkout sequencing.
//! - **[api]**: the HTTP surface.
//! - **[lifecycle]**: starting and stopping the stores.
//! - **[config]**, **[storage]**: settings and JSON snapshots.

pub mod api;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod storage;
pub mod table_actor;
