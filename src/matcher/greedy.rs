//! Greedy per-period matcher.
//!
//! # Algorithm
//!
//! 1. Group requests by period. Periods never interact.
//! 2. Start each period with zeroed enrollment and load ledgers.
//! 3. Walk the period's requests in store order. For each request, walk its
//!    choices in listed order and commit the first one that passes
//!    [`Eligibility::check`].
//! 4. On a course's first enrollment in the period, charge its lecturer one
//!    unit of load and bind the first suitable room. The room is never
//!    reconsidered.
//! 5. Under [`LoadPolicy::DistinctCourses`], a course that already has
//!    students this period goes through [`Eligibility::join`] instead: the
//!    lecturer must still be available, but the load cap does not apply
//!    since joining adds no load.
//!
//! There is no backtracking: an earlier request can take the last lecturer
//! slot that a later request needed.
//!
//! # Complexity
//! O(r * k * (c + l + m)) where r=requests, k=choices/request, c=courses,
//! l=lecturers, m=rooms (lookups are linear scans).

use serde::{Deserialize, Serialize};

use super::eligibility::{Eligibility, LoadLedger};
use super::outcome::{MatchResult, PeriodMatch, Placement, StudentAssignment};
use crate::models::{Dataset, StudentRequest};

/// How lecturer load is charged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadPolicy {
    /// One unit per distinct course with at least one student.
    #[default]
    DistinctCourses,
    /// One unit per enrolled student.
    PerStudent,
}

/// Matcher settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchConfig {
    pub load_policy: LoadPolicy,
}

/// Greedy, preference-order matcher.
///
/// # Example
///
/// ```
/// use course_match::matcher::GreedyMatcher;
/// use course_match::models::sample;
///
/// let dataset = sample::crestwood();
/// let result = GreedyMatcher::new().run(&dataset);
/// assert_eq!(result.assignment_count(), dataset.requests.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyMatcher {
    config: MatchConfig,
}

impl GreedyMatcher {
    /// Creates a matcher using distinct-course load.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_load_policy(mut self, policy: LoadPolicy) -> Self {
        self.config.load_policy = policy;
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Matches every period in the dataset.
    pub fn run(&self, dataset: &Dataset) -> MatchResult {
        let mut result = MatchResult::default();

        for (period, requests) in dataset.requests_by_period() {
            let period_match = self.match_period(dataset, period, &requests);
            tracing::debug!(
                period,
                requests = requests.len(),
                satisfied = period_match.satisfied_count(),
                "period matched"
            );
            result.periods.insert(period.to_string(), period_match);
        }

        tracing::info!(
            periods = result.periods.len(),
            assignments = result.assignment_count(),
            satisfied = result.assignments().filter(|a| a.placement.is_satisfied()).count(),
            policy = ?self.config.load_policy,
            "matching finished"
        );
        result
    }

    /// Matches one period's requests against fresh ledgers.
    pub fn match_period(
        &self,
        dataset: &Dataset,
        period: &str,
        requests: &[&StudentRequest],
    ) -> PeriodMatch {
        let eligibility = Eligibility::new(dataset);
        let mut ledgers = PeriodMatch::default();

        for course in &dataset.courses {
            ledgers.course_enrollments.insert(course.id.clone(), 0);
        }
        let mut load: LoadLedger = dataset
            .lecturers
            .iter()
            .map(|l| (l.id.clone(), 0))
            .collect();

        for request in requests {
            let placement = self.place(&eligibility, request, period, &mut load, &mut ledgers);
            ledgers.assignments.push(StudentAssignment {
                request_id: request.id.clone(),
                student_id: request.student_id.clone(),
                student_name: request.student_name.clone(),
                placement,
            });
        }

        ledgers.lecturer_loads = load;
        ledgers
    }

    fn place(
        &self,
        eligibility: &Eligibility<'_>,
        request: &StudentRequest,
        period: &str,
        load: &mut LoadLedger,
        ledgers: &mut PeriodMatch,
    ) -> Placement {
        for (rank, course_id) in request.course_choices.iter().enumerate() {
            let running = self.config.load_policy == LoadPolicy::DistinctCourses
                && ledgers.enrollment(course_id) > 0;
            let checked = if running {
                eligibility.join(course_id, period, ledgers.room_for(course_id))
            } else {
                eligibility.check(course_id, period, load)
            };
            let offer = match checked {
                Ok(offer) => offer,
                Err(reason) => {
                    tracing::debug!(
                        request = %request.id,
                        course = %course_id,
                        period,
                        %reason,
                        "choice skipped"
                    );
                    continue;
                }
            };

            let enrolled = ledgers
                .course_enrollments
                .entry(offer.course.id.clone())
                .or_insert(0);
            *enrolled += 1;
            let first_enrollment = *enrolled == 1;

            if first_enrollment {
                ledgers
                    .room_assignments
                    .insert(offer.course.id.clone(), offer.room.id.clone());
            }
            if first_enrollment || self.config.load_policy == LoadPolicy::PerStudent {
                *load.entry(offer.lecturer.id.clone()).or_insert(0) += 1;
            }

            return Placement::Matched {
                course_id: offer.course.id.clone(),
                preference: rank + 1,
            };
        }

        Placement::Unmatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Lecturer, Room, StudentRequest};

    fn request(id: &str, period: &str, choices: &[&str]) -> StudentRequest {
        StudentRequest::new(id, format!("S-{id}"), period).with_choices(choices.iter().copied())
    }

    fn base() -> Dataset {
        Dataset::new()
            .with_lecturer(
                Lecturer::new("L1")
                    .with_max_courses(1)
                    .with_periods(["A", "B"]),
            )
            .with_lecturer(Lecturer::new("L2").with_max_courses(2).with_periods(["A"]))
            .with_room(Room::new("R1", 30).with_periods(["A", "B"]))
            .with_room(Room::new("R2", 100).with_periods(["A"]))
            .with_course(Course::new("C1", "L1").with_required_capacity(20))
            .with_course(Course::new("C2", "L1").with_required_capacity(20))
            .with_course(Course::new("C3", "L2").with_required_capacity(50))
    }

    #[test]
    fn test_first_choice_taken() {
        let d = base().with_request(request("R1", "A", &["C1", "C3"]));
        let result = GreedyMatcher::new().run(&d);
        let a = &result.period("A").unwrap().assignments[0];
        assert_eq!(
            a.placement,
            Placement::Matched {
                course_id: "C1".into(),
                preference: 1
            }
        );
    }

    #[test]
    fn test_lecturer_cap_pushes_to_next_choice() {
        // L1 may teach one distinct course per period: C1 binds it, C2 is refused.
        let d = base()
            .with_request(request("R1", "A", &["C1"]))
            .with_request(request("R2", "A", &["C2", "C3"]));
        let result = GreedyMatcher::new().run(&d);
        let p = result.period("A").unwrap();

        assert_eq!(p.assignments[1].placement.course_id(), Some("C3"));
        assert_eq!(p.assignments[1].placement.preference(), Some(2));
        assert_eq!(p.load("L1"), 1);
        assert_eq!(p.load("L2"), 1);
        assert_eq!(p.enrollment("C2"), 0);
    }

    #[test]
    fn test_room_bound_on_first_enrollment() {
        let d = base()
            .with_request(request("R1", "A", &["C3"]))
            .with_request(request("R2", "A", &["C1"]));
        let p = GreedyMatcher::new().run(&d).periods.remove("A").unwrap();

        assert_eq!(p.room_for("C3"), Some("R2"));
        assert_eq!(p.room_for("C1"), Some("R1"));
        assert_eq!(p.room_for("C2"), None);
    }

    #[test]
    fn test_unavailable_period_unmatched() {
        // L2 and R2 are not available in B; C3 cannot run there.
        let d = base().with_request(request("R1", "B", &["C3"]));
        let p = GreedyMatcher::new().run(&d).periods.remove("B").unwrap();
        assert_eq!(p.assignments[0].placement, Placement::Unmatched);
        assert_eq!(p.enrollment("C3"), 0);
    }

    #[test]
    fn test_dangling_references_skipped() {
        let d = base()
            .with_course(Course::new("C9", "L-missing"))
            .with_request(request("R1", "A", &["NOPE", "C9", "C1"]));
        let p = GreedyMatcher::new().run(&d).periods.remove("A").unwrap();
        assert_eq!(p.assignments[0].placement.preference(), Some(3));
    }

    #[test]
    fn test_ledgers_initialized_for_all() {
        let d = base().with_request(request("R1", "A", &[]));
        let p = GreedyMatcher::new().run(&d).periods.remove("A").unwrap();
        assert_eq!(p.course_enrollments.len(), 3);
        assert_eq!(p.lecturer_loads.len(), 2);
        assert!(p.room_assignments.is_empty());
        assert_eq!(p.assignments[0].placement, Placement::Unmatched);
    }

    #[test]
    fn test_periods_independent() {
        let d = base()
            .with_request(request("R1", "A", &["C1"]))
            .with_request(request("R2", "B", &["C2"]));
        let result = GreedyMatcher::new().run(&d);
        // L1's load in A does not block C2 in B.
        assert_eq!(result.period("A").unwrap().load("L1"), 1);
        assert_eq!(result.period("B").unwrap().load("L1"), 1);
        assert_eq!(
            result.period("B").unwrap().assignments[0].placement.course_id(),
            Some("C2")
        );
    }

    #[test]
    fn test_distinct_course_load() {
        let d = base()
            .with_request(request("R1", "A", &["C1"]))
            .with_request(request("R2", "A", &["C1"]))
            .with_request(request("R3", "A", &["C1"]));
        let p = GreedyMatcher::new().run(&d).periods.remove("A").unwrap();
        assert_eq!(p.satisfied_count(), 3);
        assert_eq!(p.enrollment("C1"), 3);
        assert_eq!(p.load("L1"), 1);
    }

    #[test]
    fn test_capped_lecturer_still_takes_students_into_running_course() {
        // L1 is at its cap of one course after R1: C2 is refused, C1 is joined.
        let d = base()
            .with_request(request("R1", "A", &["C1"]))
            .with_request(request("R2", "A", &["C2"]))
            .with_request(request("R3", "A", &["C1"]));
        let p = GreedyMatcher::new().run(&d).periods.remove("A").unwrap();

        assert_eq!(p.assignments[1].placement, Placement::Unmatched);
        assert_eq!(p.assignments[2].placement.course_id(), Some("C1"));
        assert_eq!(p.enrollment("C1"), 2);
        assert_eq!(p.load("L1"), 1);
        assert_eq!(p.room_for("C1"), Some("R1"));
    }

    #[test]
    fn test_per_student_load() {
        let d = base()
            .with_request(request("R1", "A", &["C1"]))
            .with_request(request("R2", "A", &["C1"]));
        let p = GreedyMatcher::new()
            .with_load_policy(LoadPolicy::PerStudent)
            .run(&d)
            .periods
            .remove("A")
            .unwrap();

        assert_eq!(p.satisfied_count(), 1);
        assert_eq!(p.assignments[1].placement, Placement::Unmatched);
        assert_eq!(p.load("L1"), 1);
    }

    #[test]
    fn test_rerun_is_identical() {
        let d = base()
            .with_request(request("R1", "A", &["C1", "C3"]))
            .with_request(request("R2", "A", &["C2", "C3"]))
            .with_request(request("R3", "B", &["C2"]));
        let matcher = GreedyMatcher::new();
        let first = serde_json::to_string(&matcher.run(&d)).unwrap();
        let second = serde_json::to_string(&matcher.run(&d)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_config_json_defaults() {
        let config: MatchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.load_policy, LoadPolicy::DistinctCourses);
        let config: MatchConfig =
            serde_json::from_str(r#"{ "loadPolicy": "per-student" }"#).unwrap();
        assert_eq!(config.load_policy, LoadPolicy::PerStudent);
    }

    #[test]
    fn test_empty_dataset() {
        let result = GreedyMatcher::new().run(&Dataset::new());
        assert!(result.periods.is_empty());
        assert_eq!(result.assignment_count(), 0);
    }
}
