//! Matching quality metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Satisfaction rate | Satisfied requests / all requests, in percent |
//! | First-choice rate | Requests given their first choice / all requests, in percent |
//! | Preference counts | Satisfied requests per preference rank |
//! | Unassigned | Requests with no placement |

use serde::Serialize;
use std::collections::BTreeMap;

use super::outcome::{MatchResult, PeriodMatch, StudentAssignment};

/// Aggregate outcome of a matching run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    /// Assignment records counted (one per request).
    pub total_students: usize,
    pub satisfied_students: usize,
    pub unassigned_count: usize,
    /// Percentage of satisfied requests (0.0..=100.0).
    pub satisfaction_rate: f64,
    /// Preference rank → satisfied requests at that rank.
    pub preference_counts: BTreeMap<usize, usize>,
}

impl MatchSummary {
    /// Summarizes every period of a result.
    pub fn from_result(result: &MatchResult) -> Self {
        Self::from_assignments(result.assignments())
    }

    /// Summarizes a single period.
    pub fn from_period(period: &PeriodMatch) -> Self {
        Self::from_assignments(period.assignments.iter())
    }

    /// One summary per period, keyed by period label.
    pub fn per_period(result: &MatchResult) -> BTreeMap<String, Self> {
        result
            .periods
            .iter()
            .map(|(label, p)| (label.clone(), Self::from_period(p)))
            .collect()
    }

    fn from_assignments<'a>(assignments: impl Iterator<Item = &'a StudentAssignment>) -> Self {
        let mut summary = Self::default();

        for assignment in assignments {
            summary.total_students += 1;
            match assignment.placement.preference() {
                Some(rank) => {
                    summary.satisfied_students += 1;
                    *summary.preference_counts.entry(rank).or_insert(0) += 1;
                }
                None => summary.unassigned_count += 1,
            }
        }

        summary.satisfaction_rate = summary.percent(summary.satisfied_students);
        summary
    }

    /// Satisfied requests at `rank` (1-based).
    pub fn count_at(&self, rank: usize) -> usize {
        self.preference_counts.get(&rank).copied().unwrap_or(0)
    }

    /// Percentage of requests given their first choice.
    pub fn first_choice_rate(&self) -> f64 {
        self.percent(self.count_at(1))
    }

    /// Percentage of requests left unassigned.
    pub fn unassigned_rate(&self) -> f64 {
        self.percent(self.unassigned_count)
    }

    fn percent(&self, count: usize) -> f64 {
        if self.total_students == 0 {
            0.0
        } else {
            count as f64 / self.total_students as f64 * 100.0
        }
    }
}
