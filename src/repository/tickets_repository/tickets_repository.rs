use super::Ticket;
use crate::{dto::input, repository};
use axum::async_trait;

///
/// Not existing tickets are reported as `None`, never as an error
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Inserts new ticket with status open.
    /// id and created_at are assigned by the database
    ///
    async fn insert(&self, ticket: input::TicketCreate) -> Result<Ticket, repository::Error>;

    async fn find(&self, id: i64) -> Result<Option<Ticket>, repository::Error>;

    ///
    /// Finds all tickets sorted ascending by id
    ///
    async fn find_all(&self) -> Result<Vec<Ticket>, repository::Error>;

    ///
    /// Applies fields present in the update and returns the ticket after the change
    ///
    async fn update(
        &self,
        id: i64,
        update: input::TicketUpdate,
    ) -> Result<Option<Ticket>, repository::Error>;

    ///
    /// Sets status to closed regardless of the current one
    ///
    async fn close(&self, id: i64) -> Result<Option<Ticket>, repository::Error>;
}
