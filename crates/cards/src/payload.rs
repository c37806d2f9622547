use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::card::{Animations, Card, Layout, Palette, Spacing};

/// Rejection of a creation payload, naming the first offending field in
/// schema order. Field names use the wire spelling (`appType`, not `app_type`).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

/// The subset of [`Card`] a client may supply on creation: everything
/// except `id` and `createdAt`, which the store assigns.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCard {
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
}

impl CreateCard {
    /// Validates a raw JSON body field by field, so the error can carry the
    /// exact field that failed first. Defaults are filled in for the
    /// omittable fields; nothing semantic is checked beyond presence and
    /// type — `element` and the alignment tags accept any string, colors
    /// are not format-checked.
    pub fn parse(body: &Value) -> Result<Self, ValidationError> {
        let obj = body
            .as_object()
            .ok_or_else(|| ValidationError::new("body", "request body must be a JSON object"))?;

        Ok(Self {
            title: required_text(obj, "title")?,
            description: required_text(obj, "description")?,
            category: required_text(obj, "category")?,
            app_type: required_text(obj, "appType")?,
            tags: required_string_array(obj, "tags")?,
            element: required_string(obj, "element")?,
            palette: required_object(obj, "palette")?,
            animations: required_object(obj, "animations")?,
            width: optional_int(obj, "width", 380)?,
            height: optional_int(obj, "height", 480)?,
            border_radius: optional_int(obj, "borderRadius", 20)?,
            font_family: optional_string(obj, "fontFamily", "Rajdhani")?,
            spacing: optional_object(obj, "spacing")?,
            layout: optional_object(obj, "layout")?,
        })
    }

    /// Hands the payload to the store as a [`Card`]. The `id` and
    /// `created_at` values here are placeholders; the insert skips both
    /// columns and the database-assigned values come back on RETURNING.
    pub fn into_card(self) -> Card {
        Card {
            id: 0,
            title: self.title,
            description: self.description,
            category: self.category,
            app_type: self.app_type,
            tags: self.tags,
            element: self.element,
            palette: self.palette,
            animations: self.animations,
            width: self.width,
            height: self.height,
            border_radius: self.border_radius,
            font_family: self.font_family,
            spacing: self.spacing,
            layout: self.layout,
            created_at: Utc::now(),
        }
    }
}

fn required_string(obj: &Map<String, Value>, field: &'static str) -> Result<String, ValidationError> {
    let value = obj
        .get(field)
        .ok_or_else(|| ValidationError::new(field, format!("{} is required", field)))?;
    value
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| ValidationError::new(field, format!("{} must be a string", field)))
}

fn required_text(obj: &Map<String, Value>, field: &'static str) -> Result<String, ValidationError> {
    let value = required_string(obj, field)?;
    if value.is_empty() {
        return Err(ValidationError::new(field, format!("{} must not be empty", field)));
    }
    Ok(value)
}

fn required_string_array(obj: &Map<String, Value>, field: &'static str) -> Result<Vec<String>, ValidationError> {
    let value = obj
        .get(field)
        .ok_or_else(|| ValidationError::new(field, format!("{} is required", field)))?;
    let items = value
        .as_array()
        .ok_or_else(|| ValidationError::new(field, format!("{} must be an array of strings", field)))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(|s| s.to_string())
                .ok_or_else(|| ValidationError::new(field, format!("{} must be an array of strings", field)))
        })
        .collect()
}

fn required_object<T: DeserializeOwned>(obj: &Map<String, Value>, field: &'static str) -> Result<T, ValidationError> {
    let value = obj
        .get(field)
        .ok_or_else(|| ValidationError::new(field, format!("{} is required", field)))?;
    serde_json::from_value(value.clone())
        .map_err(|e| ValidationError::new(field, format!("invalid {}: {}", field, e)))
}

fn optional_object<T: DeserializeOwned + Default>(obj: &Map<String, Value>, field: &'static str) -> Result<T, ValidationError> {
    match obj.get(field) {
        None => Ok(T::default()),
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| ValidationError::new(field, format!("invalid {}: {}", field, e))),
    }
}

fn optional_int(obj: &Map<String, Value>, field: &'static str, default: i32) -> Result<i32, ValidationError> {
    match obj.get(field) {
        None => Ok(default),
        Some(value) => {
            let n = value
                .as_i64()
                .ok_or_else(|| ValidationError::new(field, format!("{} must be an integer", field)))?;
            i32::try_from(n)
                .map_err(|_| ValidationError::new(field, format!("{} is out of range", field)))
        }
    }
}

fn optional_string(obj: &Map<String, Value>, field: &'static str, default: &str) -> Result<String, ValidationError> {
    match obj.get(field) {
        None => Ok(default.to_string()),
        Some(value) => value
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ValidationError::new(field, format!("{} must be a string", field))),
    }
}
