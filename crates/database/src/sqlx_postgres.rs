use sqlx::{Acquire, Error as SqlxError, FromRow, Postgres, postgres::PgArguments};

/// Trait to define the schema of a database object for PostgreSQL.
pub trait SqlxSchema: Send + Sync + Unpin + Clone + std::fmt::Debug {
    /// The type of the primary key for this database object.
    type Id: Send + Sync + Clone + for<'q> sqlx::Encode<'q, Postgres> + sqlx::Type<Postgres> + 'static;

    /// The intermediate type that implements FromRow, used for fetching from the database.
    type Row: for<'r> FromRow<'r, sqlx::postgres::PgRow> + Send + Unpin;

    const TABLE_NAME: &'static str;
    const ID_COLUMN_NAME: &'static str;
    /// A list of all column names in the table.
    const COLUMNS: &'static [&'static str];

    fn id_column_name() -> &'static str { Self::ID_COLUMN_NAME }
    fn table_name() -> &'static str { Self::TABLE_NAME }
    fn columns() -> &'static [&'static str] { Self::COLUMNS }

    /// Retrieves the value of the primary key for an instance of the object.
    fn get_id_value(&self) -> Self::Id;

    /// Converts the intermediate Row type to the Self type.
    fn from_row(row: Self::Row) -> Self;

    fn create_table_sql() -> String;
    fn drop_table_sql() -> String;
    /// The insert must skip system-assigned columns and use RETURNING to
    /// hand back the stored row.
    fn insert_sql() -> String;

    fn select_all_sql() -> String {
        let columns = Self::COLUMNS
            .iter()
            .map(|c| format!("\"{}\"", c))
            .collect::<Vec<_>>()
            .join(", ");
        format!("SELECT {} FROM \"{}\"", columns, Self::TABLE_NAME)
    }

    fn select_by_id_sql() -> String {
        format!("{} WHERE \"{}\" = $1", Self::select_all_sql(), Self::ID_COLUMN_NAME)
    }

    fn count_sql() -> String {
        format!("SELECT COUNT(*) FROM \"{}\"", Self::TABLE_NAME)
    }
}

/// Specifies the direction for ordering query results.
#[derive(Debug, Clone, Copy)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

/// Trait for the persistence operations exposed over PostgreSQL.
///
/// Rows are append-only from this trait's point of view: there is create
/// and read, no update and no delete.
#[async_trait::async_trait]
pub trait SqlxCrud: SqlxSchema + Sized {
    /// Binds the struct fields to an insert query, in `insert_sql` placeholder order.
    fn bind_insert<'q>(&self, query: sqlx::query::QueryAs<'q, Postgres, Self::Row, PgArguments>)
        -> sqlx::query::QueryAs<'q, Postgres, Self::Row, PgArguments>;

    /// Creates a new record in the database and returns the stored row,
    /// including every column the database assigned on insert.
    async fn create<'e, A>(self, acquirer: A) -> Result<Self, SqlxError>
    where
        A: Acquire<'e, Database = Postgres> + Send,
    {
        let mut conn = acquirer.acquire().await?;
        let sql = Self::insert_sql();
        let query_with_bindings = self.bind_insert(sqlx::query_as(&sql));
        query_with_bindings.fetch_one(&mut *conn).await.map(Self::from_row)
    }

    /// Finds a record by its primary key. A missing row is `Ok(None)`, not an error.
    async fn find_by_id<'e, A>(id: Self::Id, acquirer: A) -> Result<Option<Self>, SqlxError>
    where
        A: Acquire<'e, Database = Postgres> + Send,
    {
        let mut conn = acquirer.acquire().await?;
        let sql = Self::select_by_id_sql();
        sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map(|opt_row| opt_row.map(Self::from_row))
    }

    /// Retrieves all records from the table in the given order. No pagination.
    async fn find_all_ordered<'e, A>(
        order_by: &[(&'static str, OrderDirection)],
        acquirer: A,
    ) -> Result<Vec<Self>, SqlxError>
    where
        A: Acquire<'e, Database = Postgres> + Send,
    {
        let mut conn = acquirer.acquire().await?;
        let mut sql = Self::select_all_sql();
        if !order_by.is_empty() {
            let clauses = order_by
                .iter()
                .map(|(column, direction)| format!("\"{}\" {}", column, direction.as_sql()))
                .collect::<Vec<_>>()
                .join(", ");
            sql = format!("{} ORDER BY {}", sql, clauses);
        }
        let rows = sqlx::query_as(&sql)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows.into_iter().map(Self::from_row).collect())
    }

    /// Counts all records in the table.
    async fn count<'e, A>(acquirer: A) -> Result<i64, SqlxError>
    where
        A: Acquire<'e, Database = Postgres> + Send,
    {
        let mut conn = acquirer.acquire().await?;
        let sql = Self::count_sql();
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&mut *conn).await?;
        Ok(count)
    }
}
