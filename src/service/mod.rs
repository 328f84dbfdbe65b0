//! Service layer: business logic orchestration.
//!
//! [`TicketService`] is the main entry point for all ticket operations.

pub mod ticket_service;

pub use ticket_service::TicketService;
