use anyhow::Result;

use cardweaver_clients::PostgresClient;
use cardweaver_common::ModuleClient;

/// The dependency-injected handles route handlers receive. The store is an
/// explicitly constructed client passed through axum state, not a
/// module-level singleton.
#[derive(Clone)]
pub struct GlobalState {
    pub db: PostgresClient,
}

impl GlobalState {
    pub async fn new() -> Result<Self> {
        let db = PostgresClient::setup_connection().await;
        Ok(Self { db })
    }
}
