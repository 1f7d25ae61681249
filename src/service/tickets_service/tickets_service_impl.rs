use super::TicketsService;
use crate::{
    dto::{input, output},
    error::Error,
    repository::TicketsRepository,
};
use axum::async_trait;
use std::sync::Arc;

pub struct TicketsServiceImpl {
    repository: Arc<dyn TicketsRepository>,
}

impl TicketsServiceImpl {
    pub fn new(repository: Arc<dyn TicketsRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    ///
    /// Creates ticket with status open
    ///
    async fn create_ticket(&self, ticket: input::TicketCreate) -> Result<output::Ticket, Error> {
        tracing::info!("creating ticket");

        let ticket = self.repository.insert(ticket).await?;
        tracing::info!(id = ticket.id, "created ticket");

        Ok(ticket.into())
    }

    async fn list_tickets(&self) -> Result<Vec<output::Ticket>, Error> {
        tracing::info!("listing tickets");

        let tickets = self.repository.find_all().await?;
        tracing::info!(count = tickets.len(), "listed tickets");

        Ok(tickets.into_iter().map(output::Ticket::from).collect())
    }

    async fn get_ticket(&self, id: i64) -> Result<Option<output::Ticket>, Error> {
        tracing::info!(id, "fetching ticket");

        let ticket = self.repository.find(id).await?;

        Ok(ticket.map(output::Ticket::from))
    }

    ///
    /// Applies merge-patch to the ticket
    ///
    /// ### Returns
    /// `None` when ticket does not exist
    ///
    async fn update_ticket(
        &self,
        id: i64,
        update: input::TicketUpdate,
    ) -> Result<Option<output::Ticket>, Error> {
        tracing::info!(id, "updating ticket");

        let ticket = self.repository.update(id, update).await?;
        if ticket.is_some() {
            tracing::info!(id, "updated ticket");
        }

        Ok(ticket.map(output::Ticket::from))
    }

    ///
    /// Closes ticket. Closing already closed ticket is not an error
    ///
    /// ### Returns
    /// `None` when ticket does not exist
    ///
    async fn close_ticket(&self, id: i64) -> Result<Option<output::Ticket>, Error> {
        tracing::info!(id, "closing ticket");

        let ticket = self.repository.close(id).await?;
        if ticket.is_some() {
            tracing::info!(id, "closed ticket");
        }

        Ok(ticket.map(output::Ticket::from))
    }
}
