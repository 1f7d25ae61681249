use crate::{
    dto::TicketStatus,
    repository::{tickets_repository::entity::TicketFindEntity, Error},
};
use std::str::FromStr;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i64,

    pub title: String,
    pub description: Option<String>,

    pub status: TicketStatus,

    pub created_at: OffsetDateTime,
}

impl TryFrom<TicketFindEntity> for Ticket {
    type Error = Error;

    fn try_from(value: TicketFindEntity) -> Result<Self, Self::Error> {
        let status =
            TicketStatus::from_str(&value.status).map_err(|_| Error::InvalidStatus(value.status))?;

        Ok(Self {
            id: value.id,
            title: value.title,
            description: value.description,
            status,
            created_at: value.created_at,
        })
    }
}
