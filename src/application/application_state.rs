use super::ApplicationEnv;
use crate::{
    repository::{self, TicketsRepositoryImpl},
    service::tickets_service::{TicketsService, TicketsServiceImpl},
};
use axum::extract::FromRef;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub tickets_service: Arc<dyn TicketsService>,
}

pub struct ApplicationStateToClose {
    pub db_pool: SqlitePool,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_pool =
        repository::create_pool(&env.db_connection_string, env.db_max_connections).await?;

    let state = create_state_with_pool(db_pool.clone()).await?;

    Ok((state, ApplicationStateToClose { db_pool }))
}

///
/// Builds state on top of already opened pool.
/// Fails when tickets table cannot be created
///
pub async fn create_state_with_pool(db_pool: SqlitePool) -> anyhow::Result<ApplicationState> {
    tracing::info!("creating repositories");
    let tickets_repository = TicketsRepositoryImpl::new(db_pool).await?;
    let tickets_repository = Arc::new(tickets_repository);

    tracing::info!("creating services");
    let tickets_service = TicketsServiceImpl::new(tickets_repository);
    let tickets_service = Arc::new(tickets_service);

    Ok(ApplicationState { tickets_service })
}
