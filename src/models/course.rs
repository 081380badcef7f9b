//! Course model.

use serde::{Deserialize, Serialize};

/// A course taught by one lecturer in a room of some minimum size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Catalog code (e.g. "MATH101").
    pub code: String,
    /// Display name.
    pub name: String,
    /// Lecturer who teaches this course.
    pub lecturer_id: String,
    /// Smallest room capacity that can host the course.
    pub required_room_capacity: u32,
}

impl Course {
    /// Creates a course taught by `lecturer_id`.
    pub fn new(id: impl Into<String>, lecturer_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: String::new(),
            name: String::new(),
            lecturer_id: lecturer_id.into(),
            required_room_capacity: 1,
        }
    }

    /// Sets the catalog code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the minimum room capacity.
    pub fn with_required_capacity(mut self, capacity: u32) -> Self {
        self.required_room_capacity = capacity;
        self
    }

    /// Case-insensitive substring match against code or name.
    ///
    /// An empty query matches every course.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.code.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builder() {
        let c = Course::new("C1", "L1")
            .with_code("MATH101")
            .with_name("Introduction to Calculus")
            .with_required_capacity(120);

        assert_eq!(c.lecturer_id, "L1");
        assert_eq!(c.required_room_capacity, 120);
    }

    #[test]
    fn test_course_query() {
        let c = Course::new("C1", "L1")
            .with_code("MATH101")
            .with_name("Introduction to Calculus");

        assert!(c.matches_query("calc"));
        assert!(c.matches_query("math"));
        assert!(c.matches_query(""));
        assert!(!c.matches_query("history"));
    }
}
