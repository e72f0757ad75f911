//! # HTTP API
//!
//! JSON endpoints over the table registry and the order store, mounted under `/api`.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | `/api/lockTable` | [`tables::lock_table`] |
//! | POST | `/api/releaseTable` | [`tables::release_table`] |
//! | POST | `/api/orders` | [`orders::create_order`] |
//! | GET | `/api/orders` | [`orders::list_orders`] |
//! | POST | `/api/feedback` | [`feedback::save_feedback`] |
//! | GET | `/api/health` | [`health::health`] |
//!
//! Failures answer `{ "success": false, "message": ... }`; see [`AppError`]
//! for the status codes.

pub mod error;
pub mod extract;
pub mod feedback;
pub mod health;
pub mod orders;
pub mod payload;
pub mod tables;

pub use error::AppError;
pub use extract::ApiJson;

use crate::clients::{OrderClient, TableClient};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Handler state: clients of the running actors.
#[derive(Clone)]
pub struct AppState {
    pub tables: TableClient,
    pub orders: OrderClient,
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/lockTable", post(tables::lock_table))
        .route("/releaseTable", post(tables::release_table))
        .route(
            "/orders",
            get(orders::list_orders).post(orders::create_order),
        )
        .route("/feedback", post(feedback::save_feedback))
        .route("/health", get(health::health));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        // The browser client is served from another origin.
        .layer(CorsLayer::permissive())
        .with_state(state)
}
