//! JSON export of a dataset and its analysis.
//!
//! The document has the four raw collections at the top level next to an
//! `analysis` block, pretty-printed. Loading it back with
//! [`Dataset::from_json_str`] ignores the analysis.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::analysis::{Analyzer, DatasetAnalysis};
use crate::error::Result;
use crate::models::Dataset;

/// File name used when no output path is given.
pub const DEFAULT_EXPORT_FILE: &str = "course-matcher-data.json";

/// A dataset bundled with its analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetExport {
    #[serde(flatten)]
    pub dataset: Dataset,
    pub analysis: DatasetAnalysis,
}

impl DatasetExport {
    /// Analyzes `dataset` with default settings and bundles the result.
    pub fn new(dataset: &Dataset) -> Self {
        Self::with_analyzer(dataset, &Analyzer::new())
    }

    pub fn with_analyzer(dataset: &Dataset, analyzer: &Analyzer) -> Self {
        Self {
            dataset: dataset.clone(),
            analysis: analyzer.analyze(dataset),
        }
    }

    /// Pretty-printed JSON document.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the document to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), "dataset exported");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample;

    #[test]
    fn test_export_shape() {
        let export = DatasetExport::new(&sample::crestwood());
        let value: serde_json::Value =
            serde_json::from_str(&export.to_json_pretty().unwrap()).unwrap();

        for key in ["lecturers", "rooms", "courses", "requests", "analysis"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["lecturers"][0]["maxCoursesPerPeriod"], 2);
        assert_eq!(value["analysis"]["statistics"]["totalRequests"], 8);
        assert_eq!(value["analysis"]["validation"]["valid"], true);
    }

    #[test]
    fn test_export_is_pretty() {
        let json = DatasetExport::new(&sample::crestwood()).to_json_pretty().unwrap();
        assert!(json.starts_with("{\n  \""));
    }

    #[test]
    fn test_write_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILE);
        let original = sample::crestwood();

        DatasetExport::new(&original).write_to(&path).unwrap();
        let reloaded = Dataset::load(&path).unwrap();
        assert_eq!(reloaded, original);
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let export = DatasetExport::new(&sample::crestwood());
        assert!(export
            .write_to(Path::new("/no/such/dir/out.json"))
            .is_err());
    }
}
