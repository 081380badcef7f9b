//! Lecturer model.
//!
//! A lecturer teaches one or more courses and can take on a bounded number
//! of distinct courses in any single period.

use serde::{Deserialize, Serialize};

/// A lecturer who teaches courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lecturer {
    /// Unique lecturer identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Maximum number of distinct courses taught in one period (>= 1).
    pub max_courses_per_period: u32,
    /// Period labels in which this lecturer can teach.
    pub available_periods: Vec<String>,
}

impl Lecturer {
    /// Creates a lecturer with a load cap of one and no availability.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            max_courses_per_period: 1,
            available_periods: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the per-period load cap.
    pub fn with_max_courses(mut self, max: u32) -> Self {
        self.max_courses_per_period = max;
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

    /// Whether the lecturer can teach in `period`.
    #[inline]
    pub fn is_available_in(&self, period: &str) -> bool {
        self.available_periods.iter().any(|p| p == period)
    }
}
