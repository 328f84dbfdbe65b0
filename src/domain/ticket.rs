//! Ticket records.
//!
//! A booking moves through three shapes: [`TicketDetails`] (what the client
//! supplied, already validated), [`NewTicket`] (details plus the
//! server-stamped booking id and creation time, ready to insert) and
//! [`Ticket`] (the persisted row including its numeric id).

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Iin;
use super::timestamp;

/// A persisted flight ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ticket {
    /// Auto-increment row id.
    pub id: i64,
    /// Passenger first name.
    pub first_name: String,
    /// Passenger last name.
    pub last_name: String,
    /// Server-generated booking reference (`BKG-<nanos>`).
    #[schema(example = "BKG-1714557600123456789")]
    pub booking_id: String,
    /// Passenger IIN.
    #[schema(value_type = String, example = "123456789012")]
    pub iin: Iin,
    /// Insertion moment, UTC.
    #[serde(with = "timestamp::second")]
    #[schema(value_type = String, example = "2024-04-20 08:15:00")]
    pub created_at: DateTime<Utc>,
    /// Scheduled departure.
    #[serde(with = "timestamp::minute")]
    #[schema(value_type = String, example = "2024-05-01 10:00")]
    pub departure_time: NaiveDateTime,
    /// Scheduled arrival.
    #[serde(with = "timestamp::minute")]
    #[schema(value_type = String, example = "2024-05-01 12:00")]
    pub arrival_time: NaiveDateTime,
    /// Departure airport code.
    pub departure_airport: String,
    /// Arrival airport code.
    pub arrival_airport: String,
}

/// Validated, client-supplied ticket fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDetails {
    /// Passenger first name.
    pub first_name: String,
    /// Passenger last name.
    pub last_name: String,
    /// Passenger IIN.
    pub iin: Iin,
    /// Scheduled departure, minute precision.
    pub departure_time: NaiveDateTime,
    /// Scheduled arrival, minute precision.
    pub arrival_time: NaiveDateTime,
    /// Departure airport code.
    pub departure_airport: String,
    /// Arrival airport code.
    pub arrival_airport: String,
}

/// A ticket ready for insertion; everything but the row id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    /// Server-generated booking reference.
    pub booking_id: String,
    /// Creation moment, whole seconds.
    pub created_at: DateTime<Utc>,
    /// Client-supplied fields.
    pub details: TicketDetails,
}

impl NewTicket {
    /// Attaches the row id assigned by the store.
    #[must_use]
    pub fn into_ticket(self, id: i64) -> Ticket {
        let TicketDetails {
            first_name,
            last_name,
            iin,
            departure_time,
            arrival_time,
            departure_airport,
            arrival_airport,
        } = self.details;
        Ticket {
            id,
            first_name,
            last_name,
            booking_id: self.booking_id,
            iin,
            created_at: self.created_at,
            departure_time,
            arrival_time,
            departure_airport,
            arrival_airport,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
pub(crate) mod fixtures {
    use chrono::TimeZone;

    use super::*;

    pub(crate) fn details(first_name: &str, last_name: &str, iin: &str) -> TicketDetails {
        let (Ok(iin), Ok(departure_time), Ok(arrival_time)) = (
            Iin::parse(iin),
            timestamp::parse_minute("2024-05-01 10:00"),
            timestamp::parse_minute("2024-05-01 12:00"),
        ) else {
            panic!("bad fixture");
        };
        TicketDetails {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            iin,
            departure_time,
            arrival_time,
            departure_airport: "JFK".to_string(),
            arrival_airport: "LAX".to_string(),
        }
    }

    pub(crate) fn new_ticket(booking_id: &str, details: TicketDetails) -> NewTicket {
        let Some(created_at) = Utc.timestamp_opt(1_713_600_900, 0).single() else {
            panic!("bad fixture");
        };
        NewTicket {
            booking_id: booking_id.to_string(),
            created_at,
            details,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::fixtures::{details, new_ticket};
    use super::*;

    #[test]
    fn into_ticket_keeps_every_field() {
        let new = new_ticket("BKG-1", details("Jane", "Doe", "123456789012"));
        let ticket = new.clone().into_ticket(7);
        assert_eq!(ticket.id, 7);
        assert_eq!(ticket.booking_id, new.booking_id);
        assert_eq!(ticket.created_at, new.created_at);
        assert_eq!(ticket.iin, new.details.iin);
        assert_eq!(ticket.departure_time, new.details.departure_time);
        assert_eq!(ticket.arrival_airport, "LAX");
    }

    #[test]
    fn serializes_wire_formats() {
        let ticket = new_ticket("BKG-1", details("Jane", "Doe", "012345678901")).into_ticket(1);
        let Ok(json) = serde_json::to_value(&ticket) else {
            panic!("serialization failed");
        };
        assert_eq!(json.get("iin").and_then(|v| v.as_str()), Some("012345678901"));
        assert_eq!(json.get("departure_time").and_then(|v| v.as_str()), Some("2024-05-01 10:00"));
        assert_eq!(json.get("arrival_time").and_then(|v| v.as_str()), Some("2024-05-01 12:00"));
        assert_eq!(json.get("created_at").and_then(|v| v.as_str()), Some("2024-04-20 08:15:00"));
    }

    #[test]
    fn json_round_trip_is_lossless() {
        let ticket = new_ticket("BKG-9", details("Jane", "Doe", "123456789012")).into_ticket(3);
        let Ok(json) = serde_json::to_string(&ticket) else {
            panic!("serialization failed");
        };
        let Ok(back) = serde_json::from_str::<Ticket>(&json) else {
            panic!("deserialization failed");
        };
        assert_eq!(back, ticket);
    }
}
