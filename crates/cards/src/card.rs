use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::types::Json;
use sqlx::Postgres;

use cardweaver_database::{SqlxCrud, SqlxSchema};

/// The four-color theme applied to a card's visuals. The strings are CSS
/// colors; their content is not validated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Palette {
    pub color1: String,
    pub color2: String,
    pub color3: String,
    pub glow: String,
}

/// Which of the CSS keyframe variants the client renders for a card.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animations {
    pub border_rotation: bool,
    pub glow_pulse: bool,
    pub chromatic: bool,
    pub particles: bool,
    /// Animation speed in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Spacing {
    #[serde(default = "default_padding")]
    pub padding: i32,
    #[serde(default = "default_gap")]
    pub gap: i32,
}

fn default_padding() -> i32 { 30 }
fn default_gap() -> i32 { 12 }

impl Default for Spacing {
    fn default() -> Self {
        Self { padding: default_padding(), gap: default_gap() }
    }
}

/// Alignment tags are free text to the storage layer, same as `element`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(default = "default_content_align")]
    pub content_align: String,
    #[serde(default = "default_text_align")]
    pub text_align: String,
}

fn default_content_align() -> String { "top".to_string() }
fn default_text_align() -> String { "left".to_string() }

impl Default for Layout {
    fn default() -> Self {
        Self { content_align: default_content_align(), text_align: default_text_align() }
    }
}

/// One persisted card configuration. Append-only: `id` and `created_at`
/// are assigned by the store on insert and rows are never updated or
/// deleted afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub app_type: String,
    pub tags: Vec<String>,
    pub element: String,
    pub palette: Palette,
    pub animations: Animations,
    pub width: i32,
    pub height: i32,
    pub border_radius: i32,
    pub font_family: String,
    pub spacing: Spacing,
    pub layout: Layout,
    pub created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct CardRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub app_type: String,
    pub tags: Vec<String>,
    pub element: String,
    pub palette: Json<Palette>,
    pub animations: Json<Animations>,
    pub width: i32,
    pub height: i32,
    pub border_radius: i32,
    pub font_family: String,
    pub spacing: Json<Spacing>,
    pub layout: Json<Layout>,
    pub created_at: DateTime<Utc>,
}

impl SqlxSchema for Card {
    type Id = i32;
    type Row = CardRow;

    const TABLE_NAME: &'static str = "cards";
    const ID_COLUMN_NAME: &'static str = "id";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "title",
        "description",
        "category",
        "app_type",
        "tags",
        "element",
        "palette",
        "animations",
        "width",
        "height",
        "border_radius",
        "font_family",
        "spacing",
        "layout",
        "created_at",
    ];

    fn get_id_value(&self) -> Self::Id { self.id }

    fn from_row(row: Self::Row) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            category: row.category,
            app_type: row.app_type,
            tags: row.tags,
            element: row.element,
            palette: row.palette.0,
            animations: row.animations.0,
            width: row.width,
            height: row.height,
            border_radius: row.border_radius,
            font_family: row.font_family,
            spacing: row.spacing.0,
            layout: row.layout.0,
            created_at: row.created_at,
        }
    }

    fn create_table_sql() -> String {
        r#"CREATE TABLE IF NOT EXISTS "cards" (
            "id" SERIAL PRIMARY KEY,
            "title" TEXT NOT NULL,
            "description" TEXT NOT NULL,
            "category" TEXT NOT NULL,
            "app_type" TEXT NOT NULL,
            "tags" TEXT[] NOT NULL,
            "element" TEXT NOT NULL,
            "palette" JSONB NOT NULL,
            "animations" JSONB NOT NULL,
            "width" INTEGER NOT NULL DEFAULT 380,
            "height" INTEGER NOT NULL DEFAULT 480,
            "border_radius" INTEGER NOT NULL DEFAULT 20,
            "font_family" TEXT NOT NULL DEFAULT 'Rajdhani',
            "spacing" JSONB NOT NULL DEFAULT '{"padding": 30, "gap": 12}',
            "layout" JSONB NOT NULL DEFAULT '{"contentAlign": "top", "textAlign": "left"}',
            "created_at" TIMESTAMPTZ NOT NULL DEFAULT now()
        )"#
        .to_string()
    }

    fn drop_table_sql() -> String {
        "DROP TABLE IF EXISTS \"cards\" CASCADE".to_string()
    }

    fn insert_sql() -> String {
        let all_columns = Self::COLUMNS
            .iter()
            .map(|c| format!("\"{}\"", c))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO \"cards\" (\"title\", \"description\", \"category\", \"app_type\", \"tags\", \
             \"element\", \"palette\", \"animations\", \"width\", \"height\", \"border_radius\", \
             \"font_family\", \"spacing\", \"layout\") \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {}",
            all_columns
        )
    }
}

#[async_trait::async_trait]
impl SqlxCrud for Card {
    fn bind_insert<'q>(
        &self,
        query: sqlx::query::QueryAs<'q, Postgres, Self::Row, PgArguments>,
    ) -> sqlx::query::QueryAs<'q, Postgres, Self::Row, PgArguments> {
        query
            .bind(self.title.clone())
            .bind(self.description.clone())
            .bind(self.category.clone())
            .bind(self.app_type.clone())
            .bind(self.tags.clone())
            .bind(self.element.clone())
            .bind(Json(self.palette.clone()))
            .bind(Json(self.animations.clone()))
            .bind(self.width)
            .bind(self.height)
            .bind(self.border_radius)
            .bind(self.font_family.clone())
            .bind(Json(self.spacing.clone()))
            .bind(Json(self.layout.clone()))
    }
}
