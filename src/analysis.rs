//! Dataset statistics and insights.
//!
//! Read-only: nothing computed here affects validity or matching.
//!
//! # Statistics
//!
//! | Statistic | Definition |
//! |-----------|-----------|
//! | Total students | Distinct student IDs across requests |
//! | Requests per period | Requests scoped to each period in use |
//! | Courses per lecturer | Courses naming the lecturer |
//! | Requests per course | Requests listing the course at least once |
//! | Room utilization | Courses whose size requirement the room meets |
//!
//! Rankings are stable: ties keep store order (periods: label order).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::models::Dataset;
use crate::validation::{validate_dataset, ValidationReport, RECOMMENDED_MIN_CHOICES};

/// Ranking sizes and thresholds used when writing insights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisConfig {
    /// Courses listed in the popularity insight.
    pub top_courses: usize,
    /// Periods listed in the demand insight.
    pub top_periods: usize,
    /// Lecturers listed in the teaching-load insight.
    pub top_lecturers: usize,
    /// Least-used rooms inspected for the idle-room insight.
    pub least_used_rooms: usize,
    /// Requests with fewer choices trigger the recommendation.
    pub min_recommended_choices: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_courses: 3,
            top_periods: 2,
            top_lecturers: 2,
            least_used_rooms: 2,
            min_recommended_choices: RECOMMENDED_MIN_CHOICES,
        }
    }
}

/// Descriptive aggregates over a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataStatistics {
    pub total_students: usize,
    pub total_requests: usize,
    pub total_courses: usize,
    pub total_lecturers: usize,
    pub total_rooms: usize,
    /// Sorted period labels appearing in requests.
    pub periods_in_use: Vec<String>,
    pub requests_per_period: BTreeMap<String, usize>,
    pub courses_per_lecturer: BTreeMap<String, usize>,
    pub requests_per_course: BTreeMap<String, usize>,
    pub room_utilization: BTreeMap<String, usize>,
}

impl DataStatistics {
    /// Computes statistics for a dataset.
    pub fn calculate(dataset: &Dataset) -> Self {
        let students: HashSet<&str> = dataset
            .requests
            .iter()
            .map(|r| r.student_id.as_str())
            .collect();

        Self {
            total_students: students.len(),
            total_requests: dataset.requests.len(),
            total_courses: dataset.courses.len(),
            total_lecturers: dataset.lecturers.len(),
            total_rooms: dataset.rooms.len(),
            periods_in_use: dataset
                .periods_in_use()
                .into_iter()
                .map(str::to_string)
                .collect(),
            requests_per_period: into_map(period_demand(dataset)),
            courses_per_lecturer: into_map(lecturer_course_counts(dataset)),
            requests_per_course: into_map(course_demand(dataset)),
            room_utilization: into_map(room_fit_counts(dataset)),
        }
    }
}

/// Statistics, insights, and the validation verdict for one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetAnalysis {
    pub insights: Vec<String>,
    pub statistics: DataStatistics,
    pub validation: ValidationReport,
}

/// Produces statistics and natural-language insights.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    /// Analyzes a dataset, running validation alongside.
    pub fn analyze(&self, dataset: &Dataset) -> DatasetAnalysis {
        let analysis = DatasetAnalysis {
            insights: self.insights(dataset),
            statistics: DataStatistics::calculate(dataset),
            validation: validate_dataset(dataset),
        };
        tracing::debug!(insights = analysis.insights.len(), "dataset analyzed");
        analysis
    }

    /// Human-readable observations about demand and resources.
    ///
    /// In order: popular courses, busiest periods, busiest lecturers, rooms
    /// no course fits, periods with unavailable lecturers, and a
    /// recommendation when requests list too few choices. Each is omitted
    /// when it has nothing to say.
    pub fn insights(&self, dataset: &Dataset) -> Vec<String> {
        let cfg = &self.config;
        let mut insights = Vec::new();

        let popular = top_n(course_demand(dataset), cfg.top_courses);
        if !popular.is_empty() {
            let listed: Vec<String> = popular
                .iter()
                .map(|(id, count)| {
                    let code = dataset.course(id).map_or(*id, |c| c.code.as_str());
                    format!("{code} ({count} requests)")
                })
                .collect();
            insights.push(format!("Most popular courses: {}.", listed.join(", ")));
        }

        let busy_periods = top_n(period_demand(dataset), cfg.top_periods);
        if !busy_periods.is_empty() {
            let listed: Vec<String> = busy_periods
                .iter()
                .map(|(period, count)| format!("{period} ({count} requests)"))
                .collect();
            insights.push(format!("Highest demand periods: {}.", listed.join(", ")));
        }

        let busy_lecturers = top_n(lecturer_course_counts(dataset), cfg.top_lecturers);
        if !busy_lecturers.is_empty() {
            let listed: Vec<String> = busy_lecturers
                .iter()
                .map(|(id, count)| {
                    let name = dataset.lecturer(id).map_or(*id, |l| l.name.as_str());
                    format!("{name} ({count} courses)")
                })
                .collect();
            insights.push(format!("Lecturers with most courses: {}.", listed.join(", ")));
        }

        let mut rooms = room_fit_counts(dataset);
        rooms.sort_by_key(|&(_, count)| count);
        let idle: Vec<&str> = rooms
            .iter()
            .take(cfg.least_used_rooms)
            .filter(|&&(_, count)| count == 0)
            .map(|&(id, _)| dataset.room(id).map_or(id, |r| r.name.as_str()))
            .collect();
        if !idle.is_empty() {
            insights.push(format!(
                "Some rooms have no suitable courses: {}.",
                idle.join(", ")
            ));
        }

        let conflicts = missing_lecturers_by_period(dataset);
        if !conflicts.is_empty() {
            let listed: Vec<String> = conflicts
                .iter()
                .map(|(period, count)| format!("{period} ({count} missing lecturers)"))
                .collect();
            insights.push(format!(
                "Potential scheduling conflicts in periods: {}.",
                listed.join(", ")
            ));
        }

        if dataset
            .requests
            .iter()
            .any(|r| r.course_choices.len() < cfg.min_recommended_choices)
        {
            insights.push(format!(
                "Recommendation: Encourage students to provide at least {} course preferences to increase matching flexibility.",
                cfg.min_recommended_choices
            ));
        }

        insights
    }
}

/// Analyzes a dataset with default settings.
pub fn analyze_dataset(dataset: &Dataset) -> DatasetAnalysis {
    Analyzer::new().analyze(dataset)
}

fn period_demand(dataset: &Dataset) -> Vec<(&str, usize)> {
    dataset
        .requests_by_period()
        .into_iter()
        .map(|(period, requests)| (period, requests.len()))
        .collect()
}

fn lecturer_course_counts(dataset: &Dataset) -> Vec<(&str, usize)> {
    dataset
        .lecturers
        .iter()
        .map(|l| (l.id.as_str(), dataset.courses_taught_by(&l.id).len()))
        .collect()
}

fn course_demand(dataset: &Dataset) -> Vec<(&str, usize)> {
    dataset
        .courses
        .iter()
        .map(|c| {
            let count = dataset.requests.iter().filter(|r| r.lists(&c.id)).count();
            (c.id.as_str(), count)
        })
        .collect()
}

fn room_fit_counts(dataset: &Dataset) -> Vec<(&str, usize)> {
    dataset
        .rooms
        .iter()
        .map(|r| {
            let count = dataset
                .courses
                .iter()
                .filter(|c| r.fits(c.required_room_capacity))
                .count();
            (r.id.as_str(), count)
        })
        .collect()
}

/// Per period: lecturers of requested courses who are absent or unavailable.
///
/// A lecturer id counts as present if any record with that id teaches in the
/// period.
fn missing_lecturers_by_period(dataset: &Dataset) -> Vec<(&str, usize)> {
    dataset
        .requests_by_period()
        .into_iter()
        .filter_map(|(period, requests)| {
            let requested: HashSet<&str> = requests
                .iter()
                .flat_map(|r| r.course_choices.iter().map(String::as_str))
                .collect();
            let required: HashSet<&str> = dataset
                .courses
                .iter()
                .filter(|c| requested.contains(c.id.as_str()))
                .map(|c| c.lecturer_id.as_str())
                .collect();
            let missing = required
                .iter()
                .filter(|&&id| {
                    !dataset
                        .lecturers
                        .iter()
                        .any(|l| l.id == id && l.is_available_in(period))
                })
                .count();
            (missing > 0).then_some((period, missing))
        })
        .collect()
}

/// Stable descending sort by count, truncated to `n`.
fn top_n(mut entries: Vec<(&str, usize)>, n: usize) -> Vec<(&str, usize)> {
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);
    entries
}

// Duplicate ids collapse: the last record's count wins.
fn into_map(entries: Vec<(&str, usize)>) -> BTreeMap<String, usize> {
    entries
        .into_iter()
        .map(|(id, count)| (id.to_string(), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{sample, Course, Lecturer, Room, StudentRequest};

    #[test]
    fn test_crestwood_statistics() {
        let stats = DataStatistics::calculate(&sample::crestwood());
        assert_eq!(stats.total_students, 8);
        assert_eq!(stats.total_requests, 8);
        assert_eq!(stats.total_courses, 8);
        assert_eq!(stats.periods_in_use, vec!["A", "B", "C", "D"]);
        assert_eq!(stats.requests_per_period["A"], 2);
        assert_eq!(stats.courses_per_lecturer["L1"], 2);
        assert_eq!(stats.courses_per_lecturer["L4"], 1);
        // C1 is listed by SR1, SR3, SR7, SR8
        assert_eq!(stats.requests_per_course["C1"], 4);
        assert_eq!(stats.requests_per_course["C4"], 1);
        // Main Hall seats every course; Computer Lab only CS150
        assert_eq!(stats.room_utilization["R1"], 8);
        assert_eq!(stats.room_utilization["R5"], 1);
    }

    #[test]
    fn test_crestwood_insights() {
        let insights = Analyzer::new().insights(&sample::crestwood());
        assert_eq!(
            insights[0],
            "Most popular courses: MATH101 (4 requests), PHYS200 (4 requests), PSYCH101 (4 requests)."
        );
        // All periods tie at 2; label order decides.
        assert_eq!(
            insights[1],
            "Highest demand periods: A (2 requests), B (2 requests)."
        );
        assert_eq!(
            insights[2],
            "Lecturers with most courses: Dr. Sarah Johnson (2 courses), Prof. Michael Chen (2 courses)."
        );
        assert_eq!(insights.len(), 3);
    }

    #[test]
    fn test_idle_rooms_and_conflicts() {
        let d = Dataset::new()
            .with_lecturer(Lecturer::new("L1").with_name("Ada").with_periods(["A"]))
            .with_room(Room::new("R1", 100).with_name("Hall").with_periods(["A", "B"]))
            .with_room(Room::new("R2", 5).with_name("Closet").with_periods(["A", "B"]))
            .with_course(Course::new("C1", "L1").with_code("X1").with_required_capacity(50))
            .with_course(Course::new("C2", "L9").with_code("X2").with_required_capacity(50))
            .with_request(StudentRequest::new("SR1", "S1", "B").with_choices(["C1", "C2"]));

        let insights = Analyzer::new().insights(&d);
        assert!(insights.contains(&"Some rooms have no suitable courses: Closet.".to_string()));
        // L1 unavailable in B, L9 does not exist.
        assert!(insights
            .contains(&"Potential scheduling conflicts in periods: B (2 missing lecturers).".to_string()));
        assert!(insights.last().unwrap().starts_with("Recommendation:"));
    }

    #[test]
    fn test_configurable_thresholds() {
        let config = AnalysisConfig {
            top_courses: 1,
            min_recommended_choices: 4,
            ..AnalysisConfig::default()
        };
        let insights = Analyzer::new().with_config(config).insights(&sample::crestwood());
        assert_eq!(insights[0], "Most popular courses: MATH101 (4 requests).");
        assert!(insights.last().unwrap().contains("at least 4 course preferences"));
    }

    #[test]
    fn test_empty_dataset_analysis() {
        let analysis = analyze_dataset(&Dataset::new());
        assert!(analysis.insights.is_empty());
        assert_eq!(analysis.statistics, DataStatistics::default());
        assert!(!analysis.validation.valid);
    }

    #[test]
    fn test_unique_students() {
        let d = Dataset::new()
            .with_request(StudentRequest::new("SR1", "S1", "A"))
            .with_request(StudentRequest::new("SR2", "S1", "B"));
        let stats = DataStatistics::calculate(&d);
        assert_eq!(stats.total_students, 1);
        assert_eq!(stats.total_requests, 2);
    }

    #[test]
    fn test_duplicate_lecturer_id_available_in_any_record() {
        let d = Dataset::new()
            .with_lecturer(Lecturer::new("L1").with_periods(["B"]))
            .with_lecturer(Lecturer::new("L1").with_periods(["A"]))
            .with_course(Course::new("C1", "L1"))
            .with_request(StudentRequest::new("SR1", "S1", "A").with_choices(["C1"]));

        assert!(missing_lecturers_by_period(&d).is_empty());

        let d = d.with_request(StudentRequest::new("SR2", "S2", "C").with_choices(["C1"]));
        assert_eq!(missing_lecturers_by_period(&d), vec![("C", 1)]);
    }

    #[test]
    fn test_top_n_is_stable() {
        let ranked = top_n(vec![("a", 1), ("b", 3), ("c", 1), ("d", 3)], 3);
        assert_eq!(ranked, vec![("b", 3), ("d", 3), ("a", 1)]);
    }
}
