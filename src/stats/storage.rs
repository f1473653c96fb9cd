use super::clubs::ClubSet;
use super::types::StatsSummary;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// File name of the statistics data file
pub const DATA_FILE_NAME: &str = "golf_clubs_statistics.json";

/// Get the default data file path (~/.config/rangeline/golf_clubs_statistics.json)
pub fn get_data_path() -> PathBuf {
    crate::config::get_config_dir().join(DATA_FILE_NAME)
}

/// Flat-file storage for the statistics summary.
///
/// The whole summary is rewritten on every save; the last writer wins.
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the summary from disk, or build zeroed statistics for every club
    /// in `clubs` if there is no data file yet.
    ///
    /// Loaded data is returned as written; it is not checked against `clubs`.
    pub fn load_or_initialize(&self, clubs: &ClubSet) -> Result<StatsSummary> {
        if !self.path.exists() {
            return Ok(StatsSummary::initialize(clubs));
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open golf data file at {}", self.path.display()))?;

        let summary: StatsSummary = serde_json::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("Failed to parse golf data in {}", self.path.display()))?;

        Ok(summary)
    }

    /// Write the whole summary to disk atomically as pretty-printed JSON
    pub fn save(&self, summary: &StatsSummary) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
        }

        let mut file = AtomicWriteFile::open(&self.path)
            .with_context(|| format!("Failed to open atomic write file at {}", self.path.display()))?;

        serde_json::to_writer_pretty(&mut file, summary).context("Failed to serialize golf data")?;

        file.commit().context("Failed to save golf data")?;

        Ok(())
    }

    /// Delete the data file. Deleting a missing file is not an error.
    pub fn delete_all(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to delete golf data at {}", self.path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_store(name: &str) -> StatsStore {
        let path = env::temp_dir().join(format!("rangeline_test_{}.json", name));
        let _ = fs::remove_file(&path);
        StatsStore::new(path)
    }

    #[test]
    fn test_load_missing_file_initializes_defaults() {
        let store = temp_store("storage_missing");

        let summary = store.load_or_initialize(&ClubSet::standard()).unwrap();
        assert_eq!(summary.len(), 29);
        assert_eq!(summary.get("driver").unwrap().total_shots, 0);
        assert!(!store.exists());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let store = temp_store("storage_roundtrip");
        let clubs = ClubSet::new(["driver", "7i"]);

        let mut summary = StatsSummary::initialize(&clubs);
        let driver = summary.get_mut("driver").unwrap();
        driver.push_shot(250);
        driver.push_shot(240);
        driver.recompute_average();

        store.save(&summary).unwrap();
        let loaded = store.load_or_initialize(&ClubSet::standard()).unwrap();

        // The file wins over the club set once it exists
        assert_eq!(loaded, summary);
        assert_eq!(loaded.len(), 2);

        store.delete_all().unwrap();
    }

    #[test]
    fn test_save_writes_two_space_pretty_json() {
        let store = temp_store("storage_pretty");
        let summary = StatsSummary::initialize(&ClubSet::new(["putter"]));

        store.save(&summary).unwrap();
        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("{\n  \"putter\": {\n    \"Average Distance\": 0.0,"));
        assert!(text.contains("\"Past 5 Shots\": [],"));

        store.delete_all().unwrap();
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = env::temp_dir().join("rangeline_test_nested_dir");
        let _ = fs::remove_dir_all(&dir);
        let store = StatsStore::new(dir.join("data").join(DATA_FILE_NAME));

        store.save(&StatsSummary::initialize(&ClubSet::standard())).unwrap();
        assert!(store.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_delete_all_is_idempotent() {
        let store = temp_store("storage_delete");
        store.save(&StatsSummary::initialize(&ClubSet::standard())).unwrap();

        store.delete_all().unwrap();
        assert!(!store.exists());
        store.delete_all().unwrap();
    }

    #[test]
    fn test_load_corrupt_file_is_an_error() {
        let store = temp_store("storage_corrupt");
        fs::write(store.path(), "not json").unwrap();

        let result = store.load_or_initialize(&ClubSet::standard());
        assert!(result.is_err());

        store.delete_all().unwrap();
    }
}
