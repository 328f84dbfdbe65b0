//! Data Transfer Objects for REST request serialization.
//!
//! Responses reuse the domain [`Ticket`](crate::domain::Ticket) directly;
//! only request shapes live here.

pub mod ticket_dto;

pub use ticket_dto::*;
