//! The entity store.
//!
//! A [`Dataset`] holds the four input collections in insertion order. That
//! order is significant: matching processes requests in it and every ranking
//! breaks ties by it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::{Course, Lecturer, Room, StudentRequest};
use crate::error::{CourseMatchError, Result};

/// Lecturers, rooms, courses, and student requests.
///
/// Every collection defaults to empty when absent from a JSON document, so an
/// incomplete file still loads and is rejected by validation rather than by
/// the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub lecturers: Vec<Lecturer>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub requests: Vec<StudentRequest>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lecturer(mut self, lecturer: Lecturer) -> Self {
        self.lecturers.push(lecturer);
        self
    }

    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    pub fn with_request(mut self, request: StudentRequest) -> Self {
        self.requests.push(request);
        self
    }

    /// Parses a dataset from JSON.
    ///
    /// Unknown top-level keys (such as the `analysis` block of an export) are
    /// ignored.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CourseMatchError::File {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Finds a lecturer by id.
    pub fn lecturer(&self, id: &str) -> Option<&Lecturer> {
        self.lecturers.iter().find(|l| l.id == id)
    }

    /// Finds a room by id.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Finds a course by id.
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Finds a request by id.
    pub fn request(&self, id: &str) -> Option<&StudentRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    /// Resolves the lecturer teaching `course_id`.
    ///
    /// `None` if either the course or its lecturer is missing.
    pub fn lecturer_for_course(&self, course_id: &str) -> Option<&Lecturer> {
        self.course(course_id)
            .and_then(|c| self.lecturer(&c.lecturer_id))
    }

    /// Courses taught by `lecturer_id`, in store order.
    pub fn courses_taught_by(&self, lecturer_id: &str) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.lecturer_id == lecturer_id)
            .collect()
    }

    /// Distinct periods that appear in requests, sorted.
    pub fn periods_in_use(&self) -> Vec<&str> {
        let mut periods: Vec<&str> = self.requests.iter().map(|r| r.period.as_str()).collect();
        periods.sort_unstable();
        periods.dedup();
        periods
    }

    /// Requests scoped to `period`, in store order.
    pub fn requests_in_period(&self, period: &str) -> Vec<&StudentRequest> {
        self.requests.iter().filter(|r| r.period == period).collect()
    }

    /// Requests grouped by period. Store order is kept within each group.
    pub fn requests_by_period(&self) -> BTreeMap<&str, Vec<&StudentRequest>> {
        let mut groups: BTreeMap<&str, Vec<&StudentRequest>> = BTreeMap::new();
        for request in &self.requests {
            groups.entry(request.period.as_str()).or_default().push(request);
        }
        groups
    }

    /// Course catalog search.
    ///
    /// Matches `query` case-insensitively against code and name, optionally
    /// restricted to one lecturer.
    pub fn search_courses(&self, query: &str, lecturer_id: Option<&str>) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.matches_query(query))
            .filter(|c| lecturer_id.map_or(true, |id| c.lecturer_id == id))
            .collect()
    }
}
