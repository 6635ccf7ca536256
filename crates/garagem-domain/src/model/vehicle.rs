//! Registered vehicle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::formatters::format_plate_for_display;

/// A vehicle kept in the garage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier
    pub id: String,
    /// Normalized license plate (e.g. "ABC1234", "ABC1D23")
    pub plate: String,
    /// Make and model (e.g. "Fiat Uno")
    pub model: String,
    /// Model year
    pub year: i32,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// When registered
    pub registered_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn new(plate: String, model: String, year: i32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            plate,
            model,
            year,
            color: None,
            notes: None,
            registered_at: Utc::now(),
        }
    }

    pub fn with_color(mut self, color: String) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_notes(mut self, notes: String) -> Self {
        self.notes = Some(notes);
        self
    }

    /// Plate as shown to the user
    pub fn display_plate(&self) -> String {
        format_plate_for_display(&self.plate)
    }
}
