//! Maintenance record attached to a vehicle

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::formatters::{format_currency_brl, format_date_display, format_plate_for_display};
use crate::validators::is_on_or_after;

/// A maintenance performed on, or scheduled for, a vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maintenance {
    /// Unique identifier
    pub id: String,
    /// Normalized plate of the vehicle this record belongs to
    pub vehicle_plate: String,
    /// Service date in `YYYY-MM-DD` form
    pub date: String,
    /// Service description (e.g. "Troca de óleo")
    pub service: String,
    /// Cost in reais
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Maintenance {
    pub fn new(vehicle_plate: String, date: String, service: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            vehicle_plate,
            date,
            service,
            cost: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn with_notes(mut self, notes: String) -> Self {
        self.notes = Some(notes);
        self
    }

    pub fn display_date(&self) -> String {
        format_date_display(&self.date)
    }

    /// Cost as "R$ x,yy", or empty when unknown
    pub fn display_cost(&self) -> String {
        format_currency_brl(self.cost)
    }

    pub fn display_plate(&self) -> String {
        format_plate_for_display(&self.vehicle_plate)
    }

    /// Scheduled for `today` or later
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        is_on_or_after(&self.date, today)
    }
}
