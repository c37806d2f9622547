/// Initializes the database connection pool for the application.
///
/// This macro is the single point of entry for setting up the database
/// connection: it creates and configures a pool held in a process-wide
/// `OnceCell` and ensures that tables for the listed types exist.
///
/// # Arguments
/// - `tables: [$($table_type:ty),*]`: A comma-separated list of types
///   implementing `SqlxSchema` whose tables belong to this database.
///
/// # Generated Functions
/// - `async fn connect(drop_tables: bool, create_tables: bool) -> &'static PgPool`
///
/// # Example
/// ```rust,ignore
/// init_database!(tables: [Card]);
///
/// #[tokio::main]
/// async fn main() {
///     let pool = connect(false, true).await;
///     // ... use pool
/// }
/// ```
#[macro_export]
macro_rules! init_database {
    (
        tables: [$($table_type:ty),* $(,)?]
    ) => {
        static POOL: tokio::sync::OnceCell<sqlx::PgPool> = tokio::sync::OnceCell::const_new();

        pub async fn connect(drop_tables: bool, create_tables: bool) -> &'static sqlx::PgPool {
            POOL.get_or_init(|| async {
                let database_url = std::env::var("DATABASE_URL")
                    .expect("DATABASE_URL environment variable not set");

                let pool = sqlx::PgPool::connect(&database_url).await
                    .expect("Failed to connect to database");

                if drop_tables {
                    $(
                        let drop_table_sql_str = <$table_type as $crate::SqlxSchema>::drop_table_sql();
                        if !drop_table_sql_str.trim().is_empty() {
                            sqlx::query(&drop_table_sql_str).execute(&pool).await
                                .unwrap_or_else(|e| {
                                    eprintln!("Warning: Failed to drop table for '{}'. Error: {:?}", stringify!($table_type), e);
                                    sqlx::postgres::PgQueryResult::default()
                                });
                        }
                    )*
                }

                if create_tables {
                    $(
                        let create_table_sql_str = <$table_type as $crate::SqlxSchema>::create_table_sql();
                        if !create_table_sql_str.trim().is_empty() {
                            sqlx::query(&create_table_sql_str).execute(&pool).await
                                .unwrap_or_else(|e| panic!("Failed to create table for '{}'. Error: {:?}", stringify!($table_type), e));
                        }
                    )*
                }

                pool
            }).await
        }
    };
}
