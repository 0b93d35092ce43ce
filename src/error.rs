use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use thiserror::Error;

/// Field-level validation messages, keyed by the form field's wire name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first message recorded for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("reservation form has {} invalid field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("a reservation is already being submitted")]
    SubmissionInProgress,

    #[error("menu item not found: {0}")]
    MenuItemNotFound(String),

    #[error("menu item id is not numeric: {0}")]
    InvalidMenuItemId(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("state lock poisoned")]
    Poisoned,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::SubmissionInProgress => "submission_in_progress",
            AppError::MenuItemNotFound(_) => "menu_item_not_found",
            AppError::InvalidMenuItemId(_) => "invalid_menu_item_id",
            AppError::Config(_) => "config",
            AppError::Poisoned => "poisoned",
            AppError::Io(_) => "io",
            AppError::Json(_) => "json",
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        AppError::Poisoned
    }
}

// Commands hand errors to the webview as `{ kind, message, fields? }`.
impl Serialize for AppError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let fields = match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        };
        let len = if fields.is_some() { 3 } else { 2 };
        let mut state = serializer.serialize_struct("AppError", len)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        if let Some(fields) = fields {
            state.serialize_field("fields", fields)?;
        }
        state.end()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
