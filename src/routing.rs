use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    extract::{Path, ValidJson},
    service::tickets_service::TicketsService,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/", get(health_check))
        .route("/tickets", get(list_tickets).post(create_ticket))
        .route("/tickets/", get(list_tickets).post(create_ticket))
        .route("/tickets/:ticket_id", get(get_ticket).put(update_ticket))
        .route("/tickets/:ticket_id/close", patch(close_ticket))
}

async fn health_check() -> Json<output::Health> {
    Json(output::Health { status: "ok" })
}

async fn create_ticket(
    State(service): State<Arc<dyn TicketsService>>,
    ValidJson(ticket): ValidJson<input::TicketCreate>,
) -> Result<(StatusCode, Json<output::Ticket>), Error> {
    let ticket = service.create_ticket(ticket).await?;

    Ok((StatusCode::CREATED, Json(ticket)))
}

async fn list_tickets(
    State(service): State<Arc<dyn TicketsService>>,
) -> Result<Json<Vec<output::Ticket>>, Error> {
    let tickets = service.list_tickets().await?;

    Ok(Json(tickets))
}

async fn get_ticket(
    State(service): State<Arc<dyn TicketsService>>,
    Path(ticket_id): Path<i64>,
) -> Result<Json<output::Ticket>, Error> {
    let ticket = service
        .get_ticket(ticket_id)
        .await?
        .ok_or(Error::TicketNotExist)?;

    Ok(Json(ticket))
}

async fn update_ticket(
    State(service): State<Arc<dyn TicketsService>>,
    Path(ticket_id): Path<i64>,
    ValidJson(update): ValidJson<input::TicketUpdate>,
) -> Result<Json<output::Ticket>, Error> {
    let ticket = service
        .update_ticket(ticket_id, update)
        .await?
        .ok_or(Error::TicketNotExist)?;

    Ok(Json(ticket))
}

async fn close_ticket(
    State(service): State<Arc<dyn TicketsService>>,
    Path(ticket_id): Path<i64>,
) -> Result<Json<output::Ticket>, Error> {
    let ticket = service
        .close_ticket(ticket_id)
        .await?
        .ok_or(Error::TicketNotExist)?;

    Ok(Json(ticket))
}
