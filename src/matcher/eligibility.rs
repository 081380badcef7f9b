//! Eligibility evaluation.
//!
//! Answers whether a course can take one more student in a period, given the
//! lecturer load recorded so far in that period. Pure: nothing here mutates
//! the dataset or the ledgers.

use std::collections::BTreeMap;
use std::fmt;

use crate::models::{Course, Dataset, Lecturer, Room};

/// Lecturer load ledger for one period (lecturer id → load).
pub type LoadLedger = BTreeMap<String, u32>;

/// Why a course choice cannot be committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ineligibility {
    /// The course id does not resolve.
    UnknownCourse,
    /// The course's lecturer id does not resolve.
    UnknownLecturer,
    /// The lecturer does not teach in this period.
    LecturerUnavailable,
    /// The lecturer is already at their per-period cap.
    LecturerAtCapacity,
    /// No room is both large enough and free in this period.
    NoSuitableRoom,
}

impl fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::UnknownCourse => "unknown course",
            Self::UnknownLecturer => "unknown lecturer",
            Self::LecturerUnavailable => "lecturer unavailable",
            Self::LecturerAtCapacity => "lecturer at capacity",
            Self::NoSuitableRoom => "no suitable room",
        };
        f.write_str(reason)
    }
}

/// A committable choice: the course, its lecturer, and the room it would use.
#[derive(Debug, Clone, Copy)]
pub struct Offer<'a> {
    pub course: &'a Course,
    pub lecturer: &'a Lecturer,
    /// First suitable room in store order.
    pub room: &'a Room,
}

/// Eligibility checks over a dataset.
#[derive(Debug, Clone, Copy)]
pub struct Eligibility<'a> {
    dataset: &'a Dataset,
}

impl<'a> Eligibility<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Whether the course's lecturer exists, teaches in `period`, and is
    /// below their cap according to `load`.
    pub fn lecturer_available(&self, course: &Course, period: &str, load: &LoadLedger) -> bool {
        self.check_lecturer(course, period, load).is_ok()
    }

    /// Rooms that seat the course and are free in `period`, in store order.
    pub fn suitable_rooms(&self, course: &Course, period: &str) -> Vec<&'a Room> {
        self.dataset
            .rooms
            .iter()
            .filter(|r| r.fits(course.required_room_capacity) && r.is_available_in(period))
            .collect()
    }

    /// Full check for one course choice.
    ///
    /// Checks run in order: course, lecturer, lecturer load, rooms. The first
    /// failure is returned.
    pub fn check(
        &self,
        course_id: &str,
        period: &str,
        load: &LoadLedger,
    ) -> Result<Offer<'a>, Ineligibility> {
        let course = self
            .dataset
            .course(course_id)
            .ok_or(Ineligibility::UnknownCourse)?;
        let lecturer = self.check_lecturer(course, period, load)?;
        let room = self
            .suitable_rooms(course, period)
            .into_iter()
            .next()
            .ok_or(Ineligibility::NoSuitableRoom)?;

        Ok(Offer {
            course,
            lecturer,
            room,
        })
    }

    /// Check for a course that already has students this period.
    ///
    /// The lecturer must still exist and teach in `period`, but no new load
    /// is charged, so the cap is not consulted. The offer carries the room
    /// bound on first enrollment; if that room no longer resolves, the first
    /// suitable room is offered instead.
    pub fn join(
        &self,
        course_id: &str,
        period: &str,
        bound_room: Option<&str>,
    ) -> Result<Offer<'a>, Ineligibility> {
        let course = self
            .dataset
            .course(course_id)
            .ok_or(Ineligibility::UnknownCourse)?;
        let lecturer = self
            .dataset
            .lecturer(&course.lecturer_id)
            .ok_or(Ineligibility::UnknownLecturer)?;
        if !lecturer.is_available_in(period) {
            return Err(Ineligibility::LecturerUnavailable);
        }
        let room = match bound_room.and_then(|id| self.dataset.room(id)) {
            Some(room) => room,
            None => self
                .suitable_rooms(course, period)
                .into_iter()
                .next()
                .ok_or(Ineligibility::NoSuitableRoom)?,
        };

        Ok(Offer {
            course,
            lecturer,
            room,
        })
    }

    fn check_lecturer(
        &self,
        course: &Course,
        period: &str,
        load: &LoadLedger,
    ) -> Result<&'a Lecturer, Ineligibility> {
        let lecturer = self
            .dataset
            .lecturer(&course.lecturer_id)
            .ok_or(Ineligibility::UnknownLecturer)?;

        if !lecturer.is_available_in(period) {
            return Err(Ineligibility::LecturerUnavailable);
        }
        let current = load.get(&lecturer.id).copied().unwrap_or(0);
        if current >= lecturer.max_courses_per_period {
            return Err(Ineligibility::LecturerAtCapacity);
        }
        Ok(lecturer)
    }
}
