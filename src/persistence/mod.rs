//! Persistence layer: the `tickets` table.
//!
//! [`TicketStore`] is the seam between the service and storage. The
//! production implementation talks to PostgreSQL through `sqlx::PgPool`;
//! the in-memory one backs the service when persistence is disabled and
//! in tests.
//!
//! A single-row lookup that matches nothing is `Ok(None)`, which is
//! distinct from a failing statement (`Err(ApiError::Storage)`).

pub mod memory;
pub mod models;
pub mod postgres;

use std::fmt;

use async_trait::async_trait;

use crate::domain::{NewTicket, Ticket};
use crate::error::ApiError;

pub use memory::InMemoryTicketStore;
pub use postgres::PostgresTicketStore;

/// Storage operations over the `tickets` table.
#[async_trait]
pub trait TicketStore: Send + Sync + fmt::Debug {
    /// Returns every ticket in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] when the backend fails.
    async fn list(&self) -> Result<Vec<Ticket>, ApiError>;

    /// Fetches one ticket by row id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] when the backend fails.
    async fn get(&self, id: i64) -> Result<Option<Ticket>, ApiError>;

    /// Fetches one ticket by passenger name and booking id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] when the backend fails.
    async fn find_by_name_and_booking(
        &self,
        first_name: &str,
        last_name: &str,
        booking_id: &str,
    ) -> Result<Option<Ticket>, ApiError>;

    /// Fetches one ticket by last name and booking id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] when the backend fails.
    async fn find_by_booking(
        &self,
        last_name: &str,
        booking_id: &str,
    ) -> Result<Option<Ticket>, ApiError>;

    /// Inserts a ticket and returns its assigned row id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] when the backend fails.
    async fn insert(&self, ticket: &NewTicket) -> Result<i64, ApiError>;

    /// Deletes one ticket, returning the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] when the backend fails.
    async fn delete(&self, id: i64) -> Result<u64, ApiError>;

    /// Deletes every ticket, returning the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] when the backend fails.
    async fn delete_all(&self) -> Result<u64, ApiError>;

    /// Returns tickets matching first name, last name and IIN exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] when the backend fails.
    async fn search(
        &self,
        first_name: &str,
        last_name: &str,
        iin: &str,
    ) -> Result<Vec<Ticket>, ApiError>;
}
