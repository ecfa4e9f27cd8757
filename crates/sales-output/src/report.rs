//! Cleaning report writer.

use std::path::{Path, PathBuf};

use sales_transform::CleaningReport;

use crate::common::write_atomic;
use crate::error::OutputError;

/// Write the cleaning report to `path` as pretty-printed JSON.
pub fn write_report_json(report: &CleaningReport, path: &Path) -> crate::Result<PathBuf> {
    write_atomic(path, |file, _| {
        serde_json::to_writer_pretty(file, report)
            .map_err(|source| OutputError::Serialization { source })
    })?;
    tracing::debug!(path = %path.display(), "wrote cleaning report");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_transform::Stage;
    use tempfile::tempdir;

    #[test]
    fn test_write_report_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports/cleaning.json");
        let mut report = CleaningReport::default();
        report.record(Stage::Load, 5, 5);
        report.record(Stage::DropMissing, 5, 4);
        report.columns = vec!["price".to_string(), "quantity".to_string()];

        write_report_json(&report, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["stages"][1]["stage"], "drop_missing");
        assert_eq!(value["stages"][1]["rows_out"], 4);
        assert_eq!(value["columns"][1], "quantity");
    }
}
