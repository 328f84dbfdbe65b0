//! Ticket handlers: list, get, search, check, create, delete.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};

use crate::api::dto::{CheckTicketRequest, CreateTicketRequest, SearchTicketsParams};
use crate::api::extract::{ApiJson, ApiPath, ApiQuery, parse_ticket_id};
use crate::app_state::AppState;
use crate::domain::Ticket;
use crate::error::{ApiError, ErrorResponse};

/// `GET /tickets` — List all tickets.
///
/// # Errors
///
/// Returns [`ApiError::Storage`] on database failure.
#[utoipa::path(
    get,
    path = "/tickets",
    tag = "Tickets",
    summary = "List tickets",
    description = "Returns every ticket in storage order. An empty store yields an empty array.",
    responses(
        (status = 200, description = "All tickets", body = Vec<Ticket>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_tickets(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let tickets = state.ticket_service.list_tickets().await?;
    Ok(Json(tickets))
}

/// `GET /tickets/:id` — Get one ticket by row id.
///
/// # Errors
///
/// Returns [`ApiError::TicketNotFound`] if the ticket does not exist.
#[utoipa::path(
    get,
    path = "/tickets/{id}",
    tag = "Tickets",
    summary = "Get ticket by id",
    params(
        ("id" = i64, Path, description = "Ticket row id"),
    ),
    responses(
        (status = 200, description = "Ticket", body = Ticket),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Ticket not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_ticket_id(&id)?;
    let ticket = state.ticket_service.get_ticket(id).await?;
    Ok(Json(ticket))
}

/// `GET /tickets/:first_name/:last_name/:booking_id` — Look up a ticket by
/// passenger name and booking reference.
///
/// # Errors
///
/// Returns [`ApiError::TicketNotFound`] if nothing matches.
#[utoipa::path(
    get,
    path = "/tickets/{first_name}/{last_name}/{booking_id}",
    tag = "Tickets",
    summary = "Get ticket by name and booking id",
    params(
        ("first_name" = String, Path, description = "Passenger first name"),
        ("last_name" = String, Path, description = "Passenger last name"),
        ("booking_id" = String, Path, description = "Booking reference"),
    ),
    responses(
        (status = 200, description = "Ticket", body = Ticket),
        (status = 400, description = "Malformed path", body = ErrorResponse),
        (status = 404, description = "Ticket not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn get_ticket_by_booking(
    State(state): State<AppState>,
    ApiPath((first_name, last_name, booking_id)): ApiPath<(String, String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let ticket = state
        .ticket_service
        .find_by_name_and_booking(&first_name, &last_name, &booking_id)
        .await?;
    Ok(Json(ticket))
}

/// `GET /api/tickets/search` — Exact-match search on name and IIN.
///
/// # Errors
///
/// Returns [`ApiError::Storage`] on database failure.
#[utoipa::path(
    get,
    path = "/api/tickets/search",
    tag = "Tickets",
    summary = "Search tickets",
    description = "Matches first name, last name and IIN exactly. Missing parameters match nothing.",
    params(SearchTicketsParams),
    responses(
        (status = 200, description = "Matching tickets", body = Vec<Ticket>),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn search_tickets(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchTicketsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let tickets = state
        .ticket_service
        .search_tickets(&params.first_name, &params.last_name, &params.iin)
        .await?;
    Ok(Json(tickets))
}

/// `POST /api/tickets/check` — Look up a ticket by last name and booking id.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] on a malformed body or
/// [`ApiError::TicketNotFound`] if nothing matches.
#[utoipa::path(
    post,
    path = "/api/tickets/check",
    tag = "Tickets",
    summary = "Check a booking",
    request_body = CheckTicketRequest,
    responses(
        (status = 200, description = "Ticket", body = Ticket),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 404, description = "Ticket not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn check_ticket(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CheckTicketRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let ticket = state
        .ticket_service
        .check_ticket(&req.last_name, &req.booking_id)
        .await?;
    Ok(Json(ticket))
}

/// `POST /tickets` — Book a new ticket.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] on a malformed body, an IIN that
/// is not 12 digits, or a departure/arrival time not in
/// `YYYY-MM-DD HH:MM` form. No storage call is made in those cases.
#[utoipa::path(
    post,
    path = "/tickets",
    tag = "Tickets",
    summary = "Create a ticket",
    description = "Validates the booking, assigns `id`, `booking_id` and `created_at`, and returns the persisted record.",
    request_body = CreateTicketRequest,
    responses(
        (status = 201, description = "Ticket created", body = Ticket),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateTicketRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let details = req.validate()?;
    let ticket = state.ticket_service.create_ticket(details).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// `DELETE /tickets/:id` — Remove a ticket.
///
/// Answers 204 whether or not the ticket existed.
///
/// # Errors
///
/// Returns [`ApiError::Storage`] on database failure.
#[utoipa::path(
    delete,
    path = "/tickets/{id}",
    tag = "Tickets",
    summary = "Delete a ticket",
    params(
        ("id" = i64, Path, description = "Ticket row id"),
    ),
    responses(
        (status = 204, description = "Ticket deleted or never existed"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn delete_ticket(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_ticket_id(&id)?;
    state.ticket_service.delete_ticket(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/tickets/delall` — Remove every ticket.
///
/// # Errors
///
/// Returns [`ApiError::Storage`] on database failure.
#[utoipa::path(
    delete,
    path = "/api/tickets/delall",
    tag = "Tickets",
    summary = "Delete all tickets",
    responses(
        (status = 204, description = "All tickets deleted"),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn delete_all_tickets(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    state.ticket_service.delete_all_tickets().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Ticket routes, including the `/api/tickets/*` aliases older clients use.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tickets", get(list_tickets).post(create_ticket))
        .route("/tickets/{id}", get(get_ticket).delete(delete_ticket))
        .route(
            "/tickets/{first_name}/{last_name}/{booking_id}",
            get(get_ticket_by_booking),
        )
        .route("/api/tickets/search", get(search_tickets))
        .route("/api/tickets/check", post(check_ticket))
        .route("/api/tickets/delall", delete(delete_all_tickets))
        .route("/api/tickets/viewall", get(list_tickets))
        .route("/api/tickets/createticket", post(create_ticket))
        .route("/api/tickets/viewby/{id}", get(get_ticket))
        .route("/api/tickets/delby/{id}", delete(delete_ticket))
}
