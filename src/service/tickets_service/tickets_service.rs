use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    async fn create_ticket(&self, ticket: input::TicketCreate) -> Result<output::Ticket, Error>;

    async fn list_tickets(&self) -> Result<Vec<output::Ticket>, Error>;

    async fn get_ticket(&self, id: i64) -> Result<Option<output::Ticket>, Error>;

    async fn update_ticket(
        &self,
        id: i64,
        update: input::TicketUpdate,
    ) -> Result<Option<output::Ticket>, Error>;

    async fn close_ticket(&self, id: i64) -> Result<Option<output::Ticket>, Error>;
}
