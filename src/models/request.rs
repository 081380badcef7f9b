//! Student request model.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A student's ranked course choices for one period.
///
/// `course_choices` is ordered by preference, most preferred first. It may
/// contain duplicates or unknown course ids; validation reports those and
/// matching skips them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequest {
    /// Unique request identifier.
    pub id: String,
    /// Student identifier. A student may file requests for several periods.
    pub student_id: String,
    /// Student display name.
    pub student_name: String,
    /// The period this request is scoped to.
    pub period: String,
    /// Course ids in order of preference.
    pub course_choices: Vec<String>,
}

impl StudentRequest {
    /// Creates a request with no choices.
    pub fn new(
        id: impl Into<String>,
        student_id: impl Into<String>,
        period: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            student_id: student_id.into(),
            student_name: String::new(),
            period: period.into(),
            course_choices: Vec::new(),
        }
    }

    /// Sets the student's display name.
    pub fn with_student_name(mut self, name: impl Into<String>) -> Self {
        self.student_name = name.into();
        self
    }

    /// Sets the ranked course choices.
    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.course_choices = choices.into_iter().map(Into::into).collect();
        self
    }

    /// Whether any course id is listed more than once.
    pub fn has_duplicate_choices(&self) -> bool {
        let mut seen = HashSet::new();
        !self.course_choices.iter().all(|c| seen.insert(c.as_str()))
    }

    /// Whether `course_id` appears among the choices.
    #[inline]
    pub fn lists(&self, course_id: &str) -> bool {
        self.course_choices.iter().any(|c| c == course_id)
    }
}
