//! Student-to-course matching.
//!
//! Assigns students to courses from ranked preferences, subject to lecturer
//! availability and per-period load caps, and to room size and availability.
//! Alongside the matcher, the crate validates datasets and describes them.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Lecturer`, `Room`, `Course`,
//!   `StudentRequest`, and the `Dataset` entity store (plus a demo dataset)
//! - **`matcher`**: Greedy per-period matching, eligibility checks, and
//!   `MatchSummary`
//! - **`validation`**: Dataset consistency checks (references, capacity,
//!   availability, request quality)
//! - **`analysis`**: Statistics and natural-language insights
//! - **`export`**: Pretty JSON export of a dataset with its analysis
//! - **`generator`**: Seeded synthetic datasets
//!
//! # Example
//!
//! ```
//! use course_match::prelude::*;
//!
//! let dataset = course_match::models::sample::crestwood();
//! let report = validate_dataset(&dataset);
//! assert!(report.valid);
//!
//! let result = GreedyMatcher::new().run(&dataset);
//! let summary = MatchSummary::from_result(&result);
//! assert_eq!(summary.total_students, 8);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod logging;
pub mod matcher;
pub mod models;
pub mod validation;

pub use error::{CourseMatchError, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::analysis::{analyze_dataset, Analyzer, DatasetAnalysis};
    pub use crate::config::CourseMatchConfig;
    pub use crate::error::CourseMatchError;
    pub use crate::export::DatasetExport;
    pub use crate::matcher::{GreedyMatcher, LoadPolicy, MatchResult, MatchSummary, Placement};
    pub use crate::models::{Course, Dataset, Lecturer, Room, StudentRequest};
    pub use crate::validation::{validate_dataset, Severity, ValidationReport};
}
