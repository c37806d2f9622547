use cardweaver_cards::Card;
use cardweaver_common::{define_module_client, ModuleClient};
use cardweaver_database::init_database;
use sqlx::PgPool;

init_database!(
    tables: [Card]
);

define_module_client! {
    (struct PostgresClient, "postgres")
    client_type: &'static PgPool,
    env: ["DATABASE_URL"],
    setup: async {
        connect(false, true).await
    }
}

impl PostgresClient {
    /// The process-wide pool behind this handle. `'static` because the pool
    /// lives in the `OnceCell` that `connect` initializes.
    pub fn pool(&self) -> &'static PgPool {
        **self.get_client()
    }
}
