//! Run configuration.
//!
//! A JSON file with optional `matching` and `analysis` sections. Missing
//! fields fall back to their defaults:
//!
//! ```json
//! {
//!   "matching": { "loadPolicy": "distinct-courses" },
//!   "analysis": { "topCourses": 3, "minRecommendedChoices": 3 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::analysis::AnalysisConfig;
use crate::error::{CourseMatchError, Result};
use crate::matcher::MatchConfig;

/// Matcher and analyzer settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CourseMatchConfig {
    pub matching: MatchConfig,
    pub analysis: AnalysisConfig,
}

impl CourseMatchConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CourseMatchError::Config(e.to_string()))
    }

    /// Reads a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CourseMatchError::File {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }
}
