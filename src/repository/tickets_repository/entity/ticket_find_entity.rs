use sqlx::FromRow;
use time::OffsetDateTime;

#[derive(FromRow)]
pub struct TicketFindEntity {
    pub id: i64,

    pub title: String,
    pub description: Option<String>,

    pub status: String,

    pub created_at: OffsetDateTime,
}
