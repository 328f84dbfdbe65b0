//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use crate::api::dto::{CheckTicketRequest, CreateTicketRequest};
use crate::api::handlers::{system, ticket};
use crate::domain::Ticket;
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI description of every endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Flight Booking API",
        description = "Book, look up and cancel flight tickets."
    ),
    paths(
        ticket::list_tickets,
        ticket::get_ticket,
        ticket::get_ticket_by_booking,
        ticket::search_tickets,
        ticket::check_ticket,
        ticket::create_ticket,
        ticket::delete_ticket,
        ticket::delete_all_tickets,
        system::health_handler,
    ),
    components(schemas(
        Ticket,
        CreateTicketRequest,
        CheckTicketRequest,
        ErrorResponse,
        ErrorBody,
        system::HealthResponse,
    )),
    tags(
        (name = "Tickets", description = "Ticket booking and lookup"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/swagger-ui`, serving the document at
/// `/api-docs/openapi.json`.
#[cfg(feature = "swagger-ui")]
pub fn swagger_ui() -> utoipa_swagger_ui::SwaggerUi {
    utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
