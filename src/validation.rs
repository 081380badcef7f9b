//! Dataset validation.
//!
//! Checks a dataset for consistency before matching. Detects:
//! - Empty collections
//! - Missing identifiers, non-positive sizes, duplicate IDs
//! - Dangling lecturer and course references
//! - Courses no room can ever seat
//! - Requests with too few, zero, or duplicate choices
//! - Demand in periods where a lecturer or room is unavailable
//!
//! Every check runs regardless of earlier findings. Problems are returned as
//! data; validation never fails.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::Dataset;

/// Requests listing fewer choices than this get a warning.
pub const RECOMMENDED_MIN_CHOICES: usize = 3;

/// How bad an issue is. Only errors affect validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Categories of validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// A required field is empty or a size is zero, or an ID is reused.
    Structural,
    /// An ID refers to a record that does not exist.
    Referential,
    /// No resource can ever satisfy a requirement.
    Feasibility,
    /// A request is shaped in a way that limits matching.
    Quality,
    /// Demand falls in a period where a resource is unavailable.
    Availability,
}

/// The kind of record an issue is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Lecturer,
    Room,
    Course,
    Request,
    /// The dataset as a whole.
    System,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    #[serde(rename = "type")]
    pub scope: Scope,
    /// ID of the offending record (or a positional label when the ID itself
    /// is missing).
    #[serde(rename = "id")]
    pub subject_id: String,
    pub message: String,
    pub severity: Severity,
}

impl ValidationIssue {
    fn error(kind: IssueKind, scope: Scope, subject_id: impl Into<String>, message: String) -> Self {
        Self {
            kind,
            scope,
            subject_id: subject_id.into(),
            message,
            severity: Severity::Error,
        }
    }

    fn warning(
        kind: IssueKind,
        scope: Scope,
        subject_id: impl Into<String>,
        message: String,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(kind, scope, subject_id, message)
        }
    }
}

/// Validation verdict with errors and warnings kept apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// `true` iff `errors` is empty.
    pub valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    fn push(&mut self, issue: ValidationIssue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
        }
    }

    /// Errors and warnings about one record.
    pub fn issues_for(&self, scope: Scope, subject_id: &str) -> Vec<&ValidationIssue> {
        self.errors
            .iter()
            .chain(&self.warnings)
            .filter(|i| i.scope == scope && i.subject_id == subject_id)
            .collect()
    }

    /// Errors of a given kind.
    pub fn errors_of(&self, kind: IssueKind) -> impl Iterator<Item = &ValidationIssue> {
        self.errors.iter().filter(move |i| i.kind == kind)
    }

    /// Warnings of a given kind.
    pub fn warnings_of(&self, kind: IssueKind) -> impl Iterator<Item = &ValidationIssue> {
        self.warnings.iter().filter(move |i| i.kind == kind)
    }
}

/// Validates a dataset.
///
/// Checks, in report order:
/// 1. Each collection is non-empty
/// 2. Required IDs are present, sizes are positive, IDs are unique
/// 3. Every course's lecturer exists
/// 4. Every course fits in at least one room (ignoring periods)
/// 5. Every request's choices exist; requests have choices, ideally three
///    or more, without duplicates
/// 6. Lecturers are available in the periods their courses are requested
/// 7. Rooms are available in every period in use
pub fn validate_dataset(dataset: &Dataset) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_not_empty(dataset, &mut report);
    check_structure(dataset, &mut report);
    check_course_references(dataset, &mut report);
    check_room_feasibility(dataset, &mut report);
    check_requests(dataset, &mut report);
    check_lecturer_availability(dataset, &mut report);
    check_room_availability(dataset, &mut report);

    report.valid = report.errors.is_empty();
    tracing::info!(
        valid = report.valid,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "dataset validated"
    );
    report
}

fn check_not_empty(dataset: &Dataset, report: &mut ValidationReport) {
    let collections = [
        (dataset.lecturers.is_empty(), "no-lecturers", "lecturers"),
        (dataset.rooms.is_empty(), "no-rooms", "rooms"),
        (dataset.courses.is_empty(), "no-courses", "courses"),
        (dataset.requests.is_empty(), "no-requests", "student requests"),
    ];
    for (empty, id, what) in collections {
        if empty {
            report.push(ValidationIssue::error(
                IssueKind::Structural,
                Scope::System,
                id,
                format!("No {what} defined in the dataset."),
            ));
        }
    }
}

fn check_structure(dataset: &Dataset, report: &mut ValidationReport) {
    let mut lecturer_ids = HashSet::new();
    for (i, lecturer) in dataset.lecturers.iter().enumerate() {
        let subject = label(&lecturer.id, "lecturer", i);
        if lecturer.id.is_empty() {
            report.push(missing(Scope::Lecturer, &subject, "id"));
        } else if !lecturer_ids.insert(lecturer.id.as_str()) {
            report.push(duplicate(Scope::Lecturer, &lecturer.id));
        }
        if lecturer.max_courses_per_period == 0 {
            report.push(ValidationIssue::error(
                IssueKind::Structural,
                Scope::Lecturer,
                subject.clone(),
                format!("Lecturer {subject} has a maximum of 0 courses per period."),
            ));
        }
        if lecturer.available_periods.is_empty() {
            report.push(ValidationIssue::warning(
                IssueKind::Structural,
                Scope::Lecturer,
                subject.clone(),
                format!("Lecturer {subject} is not available in any period."),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for (i, room) in dataset.rooms.iter().enumerate() {
        let subject = label(&room.id, "room", i);
        if room.id.is_empty() {
            report.push(missing(Scope::Room, &subject, "id"));
        } else if !room_ids.insert(room.id.as_str()) {
            report.push(duplicate(Scope::Room, &room.id));
        }
        if room.capacity == 0 {
            report.push(ValidationIssue::error(
                IssueKind::Structural,
                Scope::Room,
                subject.clone(),
                format!("Room {subject} has a capacity of 0."),
            ));
        }
    }

    let mut course_ids = HashSet::new();
    for (i, course) in dataset.courses.iter().enumerate() {
        let subject = label(&course.id, "course", i);
        if course.id.is_empty() {
            report.push(missing(Scope::Course, &subject, "id"));
        } else if !course_ids.insert(course.id.as_str()) {
            report.push(duplicate(Scope::Course, &course.id));
        }
        if course.required_room_capacity == 0 {
            report.push(ValidationIssue::error(
                IssueKind::Structural,
                Scope::Course,
                subject.clone(),
                format!("Course {subject} requires a room capacity of 0."),
            ));
        }
    }

    let mut request_ids = HashSet::new();
    for (i, request) in dataset.requests.iter().enumerate() {
        let subject = label(&request.id, "request", i);
        if request.id.is_empty() {
            report.push(missing(Scope::Request, &subject, "id"));
        } else if !request_ids.insert(request.id.as_str()) {
            report.push(duplicate(Scope::Request, &request.id));
        }
        if request.student_id.is_empty() {
            report.push(missing(Scope::Request, &subject, "student id"));
        }
        if request.period.is_empty() {
            report.push(missing(Scope::Request, &subject, "period"));
        }
    }
}

fn check_course_references(dataset: &Dataset, report: &mut ValidationReport) {
    for course in &dataset.courses {
        if dataset.lecturer(&course.lecturer_id).is_none() {
            report.push(ValidationIssue::error(
                IssueKind::Referential,
                Scope::Course,
                course.id.clone(),
                format!(
                    "Course {} ({}) references non-existent lecturer ID: {}.",
                    course.code, course.name, course.lecturer_id
                ),
            ));
        }
    }
}

fn check_room_feasibility(dataset: &Dataset, report: &mut ValidationReport) {
    for course in &dataset.courses {
        if !dataset
            .rooms
            .iter()
            .any(|r| r.fits(course.required_room_capacity))
        {
            report.push(ValidationIssue::error(
                IssueKind::Feasibility,
                Scope::Course,
                course.id.clone(),
                format!(
                    "Course {} requires room capacity of {}, but no suitable rooms exist.",
                    course.code, course.required_room_capacity
                ),
            ));
        }
    }
}

fn check_requests(dataset: &Dataset, report: &mut ValidationReport) {
    for request in &dataset.requests {
        for course_id in &request.course_choices {
            if dataset.course(course_id).is_none() {
                report.push(ValidationIssue::error(
                    IssueKind::Referential,
                    Scope::Request,
                    request.id.clone(),
                    format!(
                        "Student request for {} references non-existent course ID: {course_id}.",
                        request.student_name
                    ),
                ));
            }
        }

        let count = request.course_choices.len();
        if count == 0 {
            report.push(ValidationIssue::error(
                IssueKind::Quality,
                Scope::Request,
                request.id.clone(),
                format!(
                    "Student {} has no course choices for period {}.",
                    request.student_name, request.period
                ),
            ));
        } else if count < RECOMMENDED_MIN_CHOICES {
            report.push(ValidationIssue::warning(
                IssueKind::Quality,
                Scope::Request,
                request.id.clone(),
                format!(
                    "Student {} has fewer than {RECOMMENDED_MIN_CHOICES} course choices ({count}) for period {}.",
                    request.student_name, request.period
                ),
            ));
        }

        if request.has_duplicate_choices() {
            report.push(ValidationIssue::warning(
                IssueKind::Quality,
                Scope::Request,
                request.id.clone(),
                format!(
                    "Student {} has duplicate course choices for period {}.",
                    request.student_name, request.period
                ),
            ));
        }
    }
}

fn check_lecturer_availability(dataset: &Dataset, report: &mut ValidationReport) {
    let periods = dataset.periods_in_use();

    for lecturer in &dataset.lecturers {
        let taught: HashSet<&str> = dataset
            .courses_taught_by(&lecturer.id)
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        if taught.is_empty() {
            continue;
        }

        for &period in &periods {
            if lecturer.is_available_in(period) {
                continue;
            }
            let requested = dataset.requests.iter().any(|r| {
                r.period == period && r.course_choices.iter().any(|c| taught.contains(c.as_str()))
            });
            if requested {
                report.push(ValidationIssue::warning(
                    IssueKind::Availability,
                    Scope::Lecturer,
                    lecturer.id.clone(),
                    format!(
                        "Lecturer {} is not available in period {period}, but teaches courses requested during this period.",
                        lecturer.name
                    ),
                ));
            }
        }
    }
}

fn check_room_availability(dataset: &Dataset, report: &mut ValidationReport) {
    let periods = dataset.periods_in_use();

    for room in &dataset.rooms {
        for &period in &periods {
            if !room.is_available_in(period) {
                report.push(ValidationIssue::warning(
                    IssueKind::Availability,
                    Scope::Room,
                    room.id.clone(),
                    format!("Room {} is not available in period {period}.", room.name),
                ));
            }
        }
    }
}

/// The record's ID, or `kind[index]` when the ID is empty.
fn label(id: &str, kind: &str, index: usize) -> String {
    if id.is_empty() {
        format!("{kind}[{index}]")
    } else {
        id.to_string()
    }
}

fn missing(scope: Scope, subject: &str, field: &str) -> ValidationIssue {
    ValidationIssue::error(
        IssueKind::Structural,
        scope,
        subject,
        format!("Record {subject} is missing a required {field}."),
    )
}

fn duplicate(scope: Scope, id: &str) -> ValidationIssue {
    ValidationIssue::error(
        IssueKind::Structural,
        scope,
        id,
        format!("Duplicate ID: {id}."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{sample, Course, Lecturer, Room, StudentRequest};

    fn sample_dataset() -> Dataset {
        Dataset::new()
            .with_lecturer(
                Lecturer::new("L1")
                    .with_name("Ada")
                    .with_max_courses(2)
                    .with_periods(["A", "B"]),
            )
            .with_room(Room::new("R1", 50).with_name("Hall").with_periods(["A", "B"]))
            .with_course(Course::new("C1", "L1").with_code("C1").with_required_capacity(30))
            .with_course(Course::new("C2", "L1").with_code("C2").with_required_capacity(30))
            .with_course(Course::new("C3", "L1").with_code("C3").with_required_capacity(30))
            .with_request(
                StudentRequest::new("SR1", "S1", "A")
                    .with_student_name("Alex")
                    .with_choices(["C1", "C2", "C3"]),
            )
    }

    #[test]
    fn test_valid_input() {
        let report = validate_dataset(&sample_dataset());
        assert!(report.valid);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_empty_dataset() {
        let report = validate_dataset(&Dataset::new());
        assert!(!report.valid);
        let ids: Vec<&str> = report.errors.iter().map(|e| e.subject_id.as_str()).collect();
        assert_eq!(ids, vec!["no-lecturers", "no-rooms", "no-courses", "no-requests"]);
        assert!(report.errors.iter().all(|e| e.scope == Scope::System));
    }

    #[test]
    fn test_dangling_lecturer() {
        let d = sample_dataset().with_course(Course::new("C4", "L9").with_required_capacity(10));
        let report = validate_dataset(&d);
        assert!(!report.valid);
        let issues = report.issues_for(Scope::Course, "C4");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::Referential);
    }

    #[test]
    fn test_dangling_course_choice() {
        let d = sample_dataset().with_request(
            StudentRequest::new("SR2", "S2", "A").with_choices(["C1", "C2", "C99"]),
        );
        let report = validate_dataset(&d);
        assert_eq!(report.errors_of(IssueKind::Referential).count(), 1);
        assert!(report.errors[0].message.contains("C99"));
    }

    #[test]
    fn test_no_room_large_enough() {
        let d = sample_dataset().with_course(
            Course::new("C4", "L1")
                .with_code("BIG")
                .with_required_capacity(500),
        );
        let report = validate_dataset(&d);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].kind, IssueKind::Feasibility);
        assert_eq!(report.errors[0].scope, Scope::Course);
    }

    #[test]
    fn test_room_feasibility_ignores_periods() {
        // R2 is never available but still counts as large enough.
        let d = sample_dataset()
            .with_room(Room::new("R2", 800))
            .with_course(Course::new("C4", "L1").with_required_capacity(500));
        let report = validate_dataset(&d);
        assert_eq!(report.errors_of(IssueKind::Feasibility).count(), 0);
    }

    #[test]
    fn test_request_choice_counts() {
        let d = sample_dataset()
            .with_request(StudentRequest::new("SR2", "S2", "A"))
            .with_request(StudentRequest::new("SR3", "S3", "A").with_choices(["C1", "C2"]));
        let report = validate_dataset(&d);

        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].subject_id, "SR2");
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].subject_id, "SR3");
        assert_eq!(report.warnings[0].kind, IssueKind::Quality);
    }

    #[test]
    fn test_duplicate_choices_single_warning() {
        let d = sample_dataset().with_request(
            StudentRequest::new("SR2", "S2", "A").with_choices(["C1", "C1", "C1", "C2", "C2"]),
        );
        let report = validate_dataset(&d);
        assert!(report.valid);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].message.contains("duplicate"));
    }

    #[test]
    fn test_structural_issues() {
        let d = sample_dataset()
            .with_lecturer(Lecturer::new("L1").with_periods(["A"]))
            .with_lecturer(Lecturer::new("").with_max_courses(0))
            .with_room(Room::new("R0", 0).with_periods(["A", "B"]))
            .with_course(Course::new("C5", "L1").with_required_capacity(0))
            .with_request(StudentRequest::new("SR9", "", "").with_choices(["C1", "C2", "C3"]));
        let report = validate_dataset(&d);

        let structural: Vec<&ValidationIssue> =
            report.errors_of(IssueKind::Structural).collect();
        // duplicate L1, missing id, zero max, zero room capacity, zero course
        // requirement, missing student id, missing period
        assert_eq!(structural.len(), 7);
        assert!(structural.iter().any(|i| i.subject_id == "lecturer[2]"));
        // The id-less lecturer has no periods.
        assert_eq!(report.warnings_of(IssueKind::Structural).count(), 1);
    }

    #[test]
    fn test_lecturer_unavailable_warning() {
        let d = sample_dataset().with_request(
            StudentRequest::new("SR2", "S2", "C").with_choices(["C1", "C2", "C3"]),
        );
        let report = validate_dataset(&d);
        assert!(report.valid);
        let lecturer = report.issues_for(Scope::Lecturer, "L1");
        assert_eq!(lecturer.len(), 1);
        assert!(lecturer[0].message.contains("period C"));
        // The room is also unavailable in C.
        assert_eq!(report.issues_for(Scope::Room, "R1").len(), 1);
    }

    #[test]
    fn test_lecturer_without_demand_not_warned() {
        let d = sample_dataset()
            .with_lecturer(Lecturer::new("L2").with_name("Idle").with_periods(["B"]));
        let report = validate_dataset(&d);
        assert!(report.issues_for(Scope::Lecturer, "L2").is_empty());
    }

    #[test]
    fn test_valid_flag_matches_errors() {
        for d in [sample_dataset(), Dataset::new(), sample::crestwood()] {
            let report = validate_dataset(&d);
            assert_eq!(report.valid, report.errors.is_empty());
        }
    }

    #[test]
    fn test_crestwood_report() {
        let report = validate_dataset(&sample::crestwood());
        // C8 (PSYCH101) needs 200 seats; Main Hall has exactly 200.
        assert!(report.valid);
        assert!(!report.warnings.is_empty());
    }

    #[test]
    fn test_issue_json_shape() {
        let report = validate_dataset(&Dataset::new());
        let json = serde_json::to_value(&report.errors[0]).unwrap();
        assert_eq!(json["type"], "system");
        assert_eq!(json["id"], "no-lecturers");
        assert_eq!(json["severity"], "error");
        assert_eq!(json["kind"], "structural");
    }
}
