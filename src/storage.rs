//! JSON persistence for collected records

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::types::CommitRecord;

/// Write `records` as a pretty-printed JSON array (2-space indent).
pub fn save_json<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(fs::File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Read a JSON array of records.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let reader = BufReader::new(fs::File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

pub fn load_commits(path: &Path) -> Result<Vec<CommitRecord>> {
    load_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReleaseRecord;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_save_is_indented_and_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("commits.json");
        let commits = vec![CommitRecord {
            sha: "abc".to_string(),
            message: "Initial commit".to_string(),
            date: "2024-01-05T10:00:00Z".to_string(),
            author: "alice".to_string(),
        }];

        save_json(&path, &commits).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n  {\n    \"sha\": \"abc\""));
        assert_eq!(load_commits(&path).unwrap(), commits);
    }

    #[test]
    fn test_release_nulls_are_kept() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("releases.json");
        let releases = vec![ReleaseRecord {
            id: 1,
            name: None,
            tag_name: "v1.0.0".to_string(),
            published_at: "2024-03-01T12:00:00Z".to_string(),
            body: None,
        }];

        save_json(&path, &releases).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"name\": null"));
        let loaded: Vec<ReleaseRecord> = load_json(&path).unwrap();
        assert_eq!(loaded, releases);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_commits(&temp_dir.path().join("absent.json"));
        assert!(matches!(result, Err(crate::error::StatsError::Io(_))));
    }
}
