//! Ticket request DTOs.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::domain::timestamp::parse_minute;
use crate::domain::{Iin, TicketDetails};
use crate::error::ApiError;

/// Request body for `POST /tickets`.
///
/// The server assigns `id`, `booking_id` and `created_at`; if a client
/// sends them they are ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTicketRequest {
    /// Passenger first name.
    pub first_name: String,
    /// Passenger last name.
    pub last_name: String,
    /// Passenger IIN, exactly 12 digits.
    #[schema(example = "123456789012")]
    pub iin: String,
    /// Scheduled departure, `YYYY-MM-DD HH:MM`.
    #[schema(example = "2024-05-01 10:00")]
    pub departure_time: String,
    /// Scheduled arrival, `YYYY-MM-DD HH:MM`.
    #[schema(example = "2024-05-01 12:00")]
    pub arrival_time: String,
    /// Departure airport code.
    pub departure_airport: String,
    /// Arrival airport code.
    pub arrival_airport: String,
}

impl CreateTicketRequest {
    /// Validates the request into [`TicketDetails`].
    ///
    /// Checks run in order: IIN, departure time, arrival time. Times are
    /// parsed at minute precision.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] describing the first field
    /// that failed.
    pub fn validate(self) -> Result<TicketDetails, ApiError> {
        let iin = Iin::parse(&self.iin).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        let departure_time = parse_minute(&self.departure_time)
            .map_err(|_| ApiError::InvalidRequest("Invalid departure time format".to_string()))?;
        let arrival_time = parse_minute(&self.arrival_time)
            .map_err(|_| ApiError::InvalidRequest("Invalid arrival time format".to_string()))?;

        Ok(TicketDetails {
            first_name: self.first_name,
            last_name: self.last_name,
            iin,
            departure_time,
            arrival_time,
            departure_airport: self.departure_airport,
            arrival_airport: self.arrival_airport,
        })
    }
}

/// Request body for `POST /api/tickets/check`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CheckTicketRequest {
    /// Passenger last name.
    pub last_name: String,
    /// Booking reference issued at creation.
    pub booking_id: String,
}

/// Query parameters for `GET /api/tickets/search`.
///
/// A missing parameter is treated as the empty string, which matches
/// nothing.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query)]
pub struct SearchTicketsParams {
    /// Passenger first name, exact match.
    pub first_name: String,
    /// Passenger last name, exact match.
    pub last_name: String,
    /// Passenger IIN, exact match.
    pub iin: String,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::Timelike;

    use super::*;

    fn request() -> CreateTicketRequest {
        CreateTicketRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            iin: "123456789012".to_string(),
            departure_time: "2024-05-01 10:00".to_string(),
            arrival_time: "2024-05-01 12:00".to_string(),
            departure_airport: "JFK".to_string(),
            arrival_airport: "LAX".to_string(),
        }
    }

    fn rejection(req: CreateTicketRequest) -> String {
        match req.validate() {
            Err(ApiError::InvalidRequest(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_request_passes() {
        let Ok(details) = request().validate() else {
            panic!("valid request rejected");
        };
        assert_eq!(details.iin.as_str(), "123456789012");
        assert_eq!(details.departure_time.hour(), 10);
        assert_eq!(details.arrival_time.hour(), 12);
        assert_eq!(details.departure_airport, "JFK");
    }

    #[test]
    fn short_iin_rejected() {
        let req = CreateTicketRequest {
            iin: "12345".to_string(),
            ..request()
        };
        assert_eq!(rejection(req), "IIN must be exactly 12 digits");
    }

    #[test]
    fn iin_checked_before_times() {
        let req = CreateTicketRequest {
            iin: "1234567890123".to_string(),
            departure_time: "tomorrow".to_string(),
            ..request()
        };
        assert_eq!(rejection(req), "IIN must be exactly 12 digits");
    }

    #[test]
    fn bad_departure_rejected() {
        let req = CreateTicketRequest {
            departure_time: "2024-05-01 10:00:00".to_string(),
            ..request()
        };
        assert_eq!(rejection(req), "Invalid departure time format");
    }

    #[test]
    fn bad_arrival_rejected() {
        let req = CreateTicketRequest {
            arrival_time: "01/05/2024 12:00".to_string(),
            ..request()
        };
        assert_eq!(rejection(req), "Invalid arrival time format");
    }

    #[test]
    fn server_fields_in_body_are_ignored() {
        let body = r#"{"id":5,"booking_id":"BKG-1","created_at":"x","first_name":"Jane",
            "last_name":"Doe","iin":"123456789012","departure_time":"2024-05-01 10:00",
            "arrival_time":"2024-05-01 12:00","departure_airport":"JFK","arrival_airport":"LAX"}"#;
        let parsed: Result<CreateTicketRequest, _> = serde_json::from_str(body);
        assert!(parsed.is_ok());
    }

    #[test]
    fn search_params_default_to_empty() {
        let params: Result<SearchTicketsParams, _> = serde_json::from_str(r#"{"firstName":"Jane"}"#);
        let Ok(params) = params else {
            panic!("params rejected");
        };
        assert_eq!(params.first_name, "Jane");
        assert!(params.last_name.is_empty());
        assert!(params.iin.is_empty());
    }
}
