// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};
use crate::analysis::FindingsReport;
use crate::letter::Letter;
use crate::utils::error::StorageError;
use std::io::Write;

pub const FINDINGS_FILE_NAME: &str = "dispute_findings.json";

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Saves the letter under its download file name, replacing any previous one
    pub fn save_letter(&self, letter: &Letter) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(letter.file_name);

        let mut file = fs::File::create(&file_path)
            .map_err(StorageError::IoError)?;
        file.write_all(letter.body.as_bytes())
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved letter ({}) to {}", letter.content_type, file_path.display());

        Ok(file_path)
    }

    /// Saves the findings report in JSON format
    pub fn save_findings_report(&self, report: &FindingsReport) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(FINDINGS_FILE_NAME);

        let report_str = serde_json::to_string_pretty(report)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, report_str)
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved findings report to {}", file_path.display());

        Ok(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::letter::generate_letter;
    use chrono::NaiveDate;

    #[test]
    fn test_new_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("output").join("nested");
        assert!(!dir.exists());
        StorageManager::new(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_letter_and_report_are_written() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(tmp.path()).unwrap();

        let findings: Vec<&str> = analyze("").iter().map(|f| f.message()).collect();
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let letter = generate_letter("Jane", "1 Main St", &findings, date).unwrap();

        let letter_path = storage.save_letter(&letter).unwrap();
        assert_eq!(letter_path.file_name().unwrap(), "dispute_letter.txt");
        assert_eq!(fs::read_to_string(&letter_path).unwrap(), letter.body);

        let report = FindingsReport::new("report.txt", 1, "", &analyze(""));
        let report_path = storage.save_findings_report(&report).unwrap();
        let saved: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
        assert_eq!(saved["source_name"], "report.txt");
        assert_eq!(saved["findings"].as_array().unwrap().len(), 2);
    }
}
