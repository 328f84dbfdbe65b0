//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::TicketService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Ticket service for all business logic.
    pub ticket_service: Arc<TicketService>,
}
