//! Room model.

use serde::{Deserialize, Serialize};

/// A teaching room with a seat capacity and period availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Number of seats.
    pub capacity: u32,
    /// Period labels in which the room can be booked.
    pub available_periods: Vec<String>,
}

impl Room {
    /// Creates a room with the given capacity and no availability.
    pub fn new(id: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity,
            available_periods: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the available periods.
    pub fn with_periods<I, S>(mut self, periods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.available_periods = periods.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    pub fn is_available_in(&self, period: &str) -> bool {
        self.available_periods.iter().any(|p| p == period)
    }

    /// Whether the room seats at least `required` students.
    #[inline]
    pub fn fits(&self, required: u32) -> bool {
        self.capacity >= required
    }
}
