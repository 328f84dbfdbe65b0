//! Ticket service: stamps server-assigned fields and orchestrates the store.

use std::sync::Arc;

use chrono::{DateTime, Timelike, Utc};

use crate::domain::{BookingIdGenerator, NewTicket, Ticket, TicketDetails};
use crate::error::ApiError;
use crate::persistence::TicketStore;

/// Orchestration layer for all ticket operations.
///
/// Holds the injected [`TicketStore`] and the process's
/// [`BookingIdGenerator`]. Input is validated before it reaches the
/// service; the service only turns "no row" into
/// [`ApiError::TicketNotFound`] and fills in the fields the client may
/// not set.
#[derive(Debug)]
pub struct TicketService {
    store: Arc<dyn TicketStore>,
    booking_ids: BookingIdGenerator,
}

impl TicketService {
    /// Creates a new `TicketService` over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        Self {
            store,
            booking_ids: BookingIdGenerator::new(),
        }
    }

    /// Lists every ticket.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] on database failure.
    pub async fn list_tickets(&self) -> Result<Vec<Ticket>, ApiError> {
        self.store.list().await
    }

    /// Fetches a ticket by row id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::TicketNotFound`] if no such row exists, or
    /// [`ApiError::Storage`] on database failure.
    pub async fn get_ticket(&self, id: i64) -> Result<Ticket, ApiError> {
        self.store.get(id).await?.ok_or(ApiError::TicketNotFound)
    }

    /// Fetches a ticket by passenger name and booking id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::TicketNotFound`] if nothing matches, or
    /// [`ApiError::Storage`] on database failure.
    pub async fn find_by_name_and_booking(
        &self,
        first_name: &str,
        last_name: &str,
        booking_id: &str,
    ) -> Result<Ticket, ApiError> {
        self.store
            .find_by_name_and_booking(first_name, last_name, booking_id)
            .await?
            .ok_or(ApiError::TicketNotFound)
    }

    /// Fetches a ticket by last name and booking id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::TicketNotFound`] if nothing matches, or
    /// [`ApiError::Storage`] on database failure.
    pub async fn check_ticket(&self, last_name: &str, booking_id: &str) -> Result<Ticket, ApiError> {
        self.store
            .find_by_booking(last_name, booking_id)
            .await?
            .ok_or(ApiError::TicketNotFound)
    }

    /// Returns tickets matching name and IIN exactly; empty when none do.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] on database failure.
    pub async fn search_tickets(
        &self,
        first_name: &str,
        last_name: &str,
        iin: &str,
    ) -> Result<Vec<Ticket>, ApiError> {
        self.store.search(first_name, last_name, iin).await
    }

    /// Books a ticket created now.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] on database failure.
    pub async fn create_ticket(&self, details: TicketDetails) -> Result<Ticket, ApiError> {
        self.create_ticket_at(details, Utc::now()).await
    }

    /// Books a ticket as if created at `now`: generates the booking id,
    /// stamps the creation time, inserts, and returns the persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] on database failure.
    pub async fn create_ticket_at(
        &self,
        details: TicketDetails,
        now: DateTime<Utc>,
    ) -> Result<Ticket, ApiError> {
        let new = NewTicket {
            booking_id: self.booking_ids.next_id(now),
            created_at: now.with_nanosecond(0).unwrap_or(now),
            details,
        };
        let id = self.store.insert(&new).await?;
        tracing::info!(id, booking_id = %new.booking_id, "ticket created");
        Ok(new.into_ticket(id))
    }

    /// Deletes a ticket. Succeeds whether or not the row existed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] on database failure.
    pub async fn delete_ticket(&self, id: i64) -> Result<(), ApiError> {
        let removed = self.store.delete(id).await?;
        tracing::info!(id, removed, "ticket deleted");
        Ok(())
    }

    /// Deletes every ticket.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] on database failure.
    pub async fn delete_all_tickets(&self) -> Result<(), ApiError> {
        let removed = self.store.delete_all().await?;
        tracing::info!(removed, "all tickets deleted");
        Ok(())
    }
}
