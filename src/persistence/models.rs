//! Database row model for the `tickets` table.

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::FromRow;

use crate::domain::{Iin, Ticket};
use crate::error::ApiError;

/// A raw row from the `tickets` table.
#[derive(Debug, Clone, FromRow)]
pub struct TicketRow {
    /// `BIGSERIAL` primary key.
    pub id: i64,
    /// Passenger first name.
    pub first_name: String,
    /// Passenger last name.
    pub last_name: String,
    /// Booking reference.
    pub booking_id: String,
    /// IIN as stored (`CHAR(12)`).
    pub iin: String,
    /// `TIMESTAMPTZ` insertion moment.
    pub created_at: DateTime<Utc>,
    /// `TIMESTAMP` departure.
    pub departure_time: NaiveDateTime,
    /// `TIMESTAMP` arrival.
    pub arrival_time: NaiveDateTime,
    /// Departure airport code.
    pub departure_airport: String,
    /// Arrival airport code.
    pub arrival_airport: String,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = ApiError;

    fn try_from(row: TicketRow) -> Result<Self, Self::Error> {
        let iin = Iin::parse(row.iin.trim_end()).map_err(|e| {
            ApiError::Storage(format!("ticket {} has a malformed iin: {e}", row.id))
        })?;
        Ok(Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            booking_id: row.booking_id,
            iin,
            created_at: row.created_at,
            departure_time: row.departure_time,
            arrival_time: row.arrival_time,
            departure_airport: row.departure_airport,
            arrival_airport: row.arrival_airport,
        })
    }
}

/// Converts a batch of rows, failing on the first malformed one.
///
/// # Errors
///
/// Returns [`ApiError::Storage`] if any row carries a malformed IIN.
pub fn into_tickets(rows: Vec<TicketRow>) -> Result<Vec<Ticket>, ApiError> {
    rows.into_iter().map(Ticket::try_from).collect()
}
