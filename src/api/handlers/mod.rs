//! REST endpoint handlers organized by resource.

pub mod system;
pub mod ticket;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(ticket::routes())
        .merge(system::routes())
}
