//! # flight-booking-api
//!
//! REST API for booking, looking up and cancelling flight tickets.
//!
//! Every endpoint is a thin layer over one or two statements against a
//! single `tickets` table. Ticket creation validates the passenger IIN and
//! the flight times, then stamps a booking reference and creation time.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── CORS + request logging (api/middleware)
//!     ├── REST Handlers (api/)
//!     │
//!     ├── TicketService (service/)
//!     │
//!     └── TicketStore (persistence/)
//!           ├── PostgreSQL
//!           └── in-memory
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
