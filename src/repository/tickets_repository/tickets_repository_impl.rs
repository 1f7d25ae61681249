use super::{
    entity::{TicketFindEntity, TicketUpdateEntity},
    Ticket, TicketsRepository,
};
use crate::{
    dto::{input, TicketStatus},
    repository::{self, Error},
};
use axum::async_trait;
use sqlx::SqlitePool;

const TICKETS: &str = "tickets";

const CREATE_TABLE_TICKETS: &str = r"
    CREATE TABLE IF NOT EXISTS tickets (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        title       VARCHAR(255) NOT NULL,
        description TEXT,
        status      VARCHAR(50) NOT NULL DEFAULT 'open'
                    CHECK (status IN ('open', 'stalled', 'closed')),
        created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
    )
";

const CREATE_INDEX_STATUS: &str = r"
    CREATE INDEX IF NOT EXISTS idx_tickets_status ON tickets (status)
";

pub struct TicketsRepositoryImpl {
    pool: SqlitePool,
}

impl TicketsRepositoryImpl {
    ///
    /// Creates tickets table when it does not exist
    /// and verifies it in the database catalog.
    ///
    /// ### Errors
    /// - [Error::MissingTable] when table is still absent after creation
    ///
    pub async fn new(pool: SqlitePool) -> Result<Self, repository::Error> {
        tracing::debug!(table = TICKETS, "creating table");
        sqlx::query(CREATE_TABLE_TICKETS).execute(&pool).await?;

        tracing::debug!(table = TICKETS, "creating status index");
        sqlx::query(CREATE_INDEX_STATUS).execute(&pool).await?;

        tracing::debug!("fetching table names");
        let table = sqlx::query_scalar::<_, String>(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?",
        )
        .bind(TICKETS)
        .fetch_optional(&pool)
        .await?;

        if table.is_none() {
            return Err(Error::MissingTable(TICKETS));
        }

        Ok(Self { pool })
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(&self, ticket: input::TicketCreate) -> Result<Ticket, repository::Error> {
        let status = TicketStatus::Open;

        let entity = sqlx::query_as::<_, TicketFindEntity>(
            r"
            INSERT INTO tickets (title, description, status)
            VALUES (?, ?, ?)
            RETURNING id, title, description, status, created_at
            ",
        )
        .bind(&ticket.title)
        .bind(ticket.description.as_deref())
        .bind(status.as_ref())
        .fetch_one(&self.pool)
        .await?;

        Ticket::try_from(entity)
    }

    async fn find(&self, id: i64) -> Result<Option<Ticket>, repository::Error> {
        let entity = sqlx::query_as::<_, TicketFindEntity>(
            r"
            SELECT id, title, description, status, created_at
            FROM tickets
            WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        entity.map(Ticket::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Ticket>, repository::Error> {
        let entities = sqlx::query_as::<_, TicketFindEntity>(
            r"
            SELECT id, title, description, status, created_at
            FROM tickets
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        entities.into_iter().map(Ticket::try_from).collect()
    }

    async fn update(
        &self,
        id: i64,
        update: input::TicketUpdate,
    ) -> Result<Option<Ticket>, repository::Error> {
        let entity = TicketUpdateEntity::from(&update);

        // merge happens in a single statement so concurrent writers
        // wait on the write lock instead of failing on lock upgrade
        let entity = sqlx::query_as::<_, TicketFindEntity>(
            r"
            UPDATE tickets
            SET title = COALESCE(?, title),
                description = CASE WHEN ? THEN ? ELSE description END,
                status = COALESCE(?, status)
            WHERE id = ?
            RETURNING id, title, description, status, created_at
            ",
        )
        .bind(entity.title)
        .bind(entity.description_present)
        .bind(entity.description)
        .bind(entity.status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        entity.map(Ticket::try_from).transpose()
    }

    async fn close(&self, id: i64) -> Result<Option<Ticket>, repository::Error> {
        let status = TicketStatus::Closed;

        let entity = sqlx::query_as::<_, TicketFindEntity>(
            r"
            UPDATE tickets
            SET status = ?
            WHERE id = ?
            RETURNING id, title, description, status, created_at
            ",
        )
        .bind(status.as_ref())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        entity.map(Ticket::try_from).transpose()
    }
}
