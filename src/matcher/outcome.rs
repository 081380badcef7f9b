//! Matching results.
//!
//! Every ledger here is owned by one matching run. Maps are ordered so that
//! two runs over the same input serialize identically.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Dataset;

/// Where a request ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Placement {
    /// Assigned to one of the listed choices.
    #[serde(rename_all = "camelCase")]
    Matched {
        course_id: String,
        /// 1-based rank of the course within the request's choices.
        preference: usize,
    },
    /// No listed choice could be committed.
    Unmatched,
}

impl Placement {
    #[inline]
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    pub fn course_id(&self) -> Option<&str> {
        match self {
            Self::Matched { course_id, .. } => Some(course_id),
            Self::Unmatched => None,
        }
    }

    pub fn preference(&self) -> Option<usize> {
        match self {
            Self::Matched { preference, .. } => Some(*preference),
            Self::Unmatched => None,
        }
    }
}

/// The placement of one student request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAssignment {
    pub request_id: String,
    pub student_id: String,
    pub student_name: String,
    pub placement: Placement,
}

/// A course whose enrollment outgrew the room it was bound to.
///
/// Rooms are bound on first enrollment and never revisited, so a popular
/// course can end up with more students than seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityOverflow {
    pub course_id: String,
    pub room_id: String,
    pub enrolled: u32,
    pub capacity: u32,
}

/// Result ledgers for one period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodMatch {
    /// One record per request, in request order.
    pub assignments: Vec<StudentAssignment>,
    /// Course id → students enrolled. Every course has an entry.
    pub course_enrollments: BTreeMap<String, u32>,
    /// Lecturer id → load. Every lecturer has an entry.
    pub lecturer_loads: BTreeMap<String, u32>,
    /// Course id → room id, for courses with at least one student.
    pub room_assignments: BTreeMap<String, String>,
}

impl PeriodMatch {
    /// First assignment recorded for a student.
    pub fn assignment_for_student(&self, student_id: &str) -> Option<&StudentAssignment> {
        self.assignments.iter().find(|a| a.student_id == student_id)
    }

    pub fn enrollment(&self, course_id: &str) -> u32 {
        self.course_enrollments.get(course_id).copied().unwrap_or(0)
    }

    pub fn load(&self, lecturer_id: &str) -> u32 {
        self.lecturer_loads.get(lecturer_id).copied().unwrap_or(0)
    }

    pub fn room_for(&self, course_id: &str) -> Option<&str> {
        self.room_assignments.get(course_id).map(String::as_str)
    }

    /// Number of satisfied requests.
    pub fn satisfied_count(&self) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.placement.is_satisfied())
            .count()
    }

    /// Courses whose enrollment exceeds the capacity of their bound room.
    pub fn capacity_overflows(&self, dataset: &Dataset) -> Vec<CapacityOverflow> {
        self.room_assignments
            .iter()
            .filter_map(|(course_id, room_id)| {
                let room = dataset.room(room_id)?;
                let enrolled = self.enrollment(course_id);
                (enrolled > room.capacity).then(|| CapacityOverflow {
                    course_id: course_id.clone(),
                    room_id: room_id.clone(),
                    enrolled,
                    capacity: room.capacity,
                })
            })
            .collect()
    }
}

/// Matching result for a whole dataset: period label → ledgers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchResult {
    pub periods: BTreeMap<String, PeriodMatch>,
}

impl MatchResult {
    pub fn period(&self, label: &str) -> Option<&PeriodMatch> {
        self.periods.get(label)
    }

    /// All assignments, grouped by period in label order.
    pub fn assignments(&self) -> impl Iterator<Item = &StudentAssignment> {
        self.periods.values().flat_map(|p| p.assignments.iter())
    }

    pub fn assignment_count(&self) -> usize {
        self.periods.values().map(|p| p.assignments.len()).sum()
    }

    /// Capacity overflows across all periods, as (period, overflow) pairs.
    pub fn capacity_overflows(&self, dataset: &Dataset) -> Vec<(String, CapacityOverflow)> {
        self.periods
            .iter()
            .flat_map(|(label, p)| {
                p.capacity_overflows(dataset)
                    .into_iter()
                    .map(move |o| (label.clone(), o))
            })
            .collect()
    }
}
