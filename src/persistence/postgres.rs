//! PostgreSQL implementation of the ticket store.

use async_trait::async_trait;
use sqlx::PgPool;

use super::TicketStore;
use super::models::{TicketRow, into_tickets};
use crate::domain::{NewTicket, Ticket};
use crate::error::ApiError;

/// PostgreSQL-backed ticket store using `sqlx::PgPool`.
///
/// Every operation is a single autocommit statement. Multi-row reads go
/// through `fetch_all`, which drains and releases the cursor before
/// returning, on success and on error.
#[derive(Debug, Clone)]
pub struct PostgresTicketStore {
    pool: PgPool,
}

impl PostgresTicketStore {
    /// Creates a new store over the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketStore for PostgresTicketStore {
    async fn list(&self) -> Result<Vec<Ticket>, ApiError> {
        let rows = sqlx::query_as::<_, TicketRow>(
            "SELECT id, first_name, last_name, booking_id, iin, created_at, \
             departure_time, arrival_time, departure_airport, arrival_airport \
             FROM tickets",
        )
        .fetch_all(&self.pool)
        .await?;

        into_tickets(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<Ticket>, ApiError> {
        sqlx::query_as::<_, TicketRow>(
            "SELECT id, first_name, last_name, booking_id, iin, created_at, \
             departure_time, arrival_time, departure_airport, arrival_airport \
             FROM tickets WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(Ticket::try_from)
        .transpose()
    }

    async fn find_by_name_and_booking(
        &self,
        first_name: &str,
        last_name: &str,
        booking_id: &str,
    ) -> Result<Option<Ticket>, ApiError> {
        sqlx::query_as::<_, TicketRow>(
            "SELECT id, first_name, last_name, booking_id, iin, created_at, \
             departure_time, arrival_time, departure_airport, arrival_airport \
             FROM tickets WHERE first_name = $1 AND last_name = $2 AND booking_id = $3",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await?
        .map(Ticket::try_from)
        .transpose()
    }

    async fn find_by_booking(
        &self,
        last_name: &str,
        booking_id: &str,
    ) -> Result<Option<Ticket>, ApiError> {
        sqlx::query_as::<_, TicketRow>(
            "SELECT id, first_name, last_name, booking_id, iin, created_at, \
             departure_time, arrival_time, departure_airport, arrival_airport \
             FROM tickets WHERE last_name = $1 AND booking_id = $2",
        )
        .bind(last_name)
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await?
        .map(Ticket::try_from)
        .transpose()
    }

    async fn insert(&self, ticket: &NewTicket) -> Result<i64, ApiError> {
        let details = &ticket.details;
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO tickets (first_name, last_name, booking_id, iin, created_at, \
             departure_time, arrival_time, departure_airport, arrival_airport) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING id",
        )
        .bind(&details.first_name)
        .bind(&details.last_name)
        .bind(&ticket.booking_id)
        .bind(details.iin.as_str())
        .bind(ticket.created_at)
        .bind(details.departure_time)
        .bind(details.arrival_time)
        .bind(&details.departure_airport)
        .bind(&details.arrival_airport)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn delete(&self, id: i64) -> Result<u64, ApiError> {
        let result = sqlx::query("DELETE FROM tickets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete_all(&self) -> Result<u64, ApiError> {
        let result = sqlx::query("DELETE FROM tickets")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn search(
        &self,
        first_name: &str,
        last_name: &str,
        iin: &str,
    ) -> Result<Vec<Ticket>, ApiError> {
        let rows = sqlx::query_as::<_, TicketRow>(
            "SELECT id, first_name, last_name, booking_id, iin, created_at, \
             departure_time, arrival_time, departure_airport, arrival_airport \
             FROM tickets WHERE first_name = $1 AND last_name = $2 AND iin = $3",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(iin)
        .fetch_all(&self.pool)
        .await?;

        into_tickets(rows)
    }
}
