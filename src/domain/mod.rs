//! Domain layer: ticket records and the value types they are built from.
//!
//! This module contains the server-side domain model: the validated IIN
//! newtype, booking id generation, the ticket shapes moving between the
//! API and the store, and the timestamp wire formats.

pub mod booking_id;
pub mod iin;
pub mod ticket;
pub mod timestamp;

pub use booking_id::BookingIdGenerator;
pub use iin::Iin;
pub use ticket::{NewTicket, Ticket, TicketDetails};
