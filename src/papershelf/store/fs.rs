use super::CatalogSource;
use crate::error::Result;
use crate::model::PaperRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// A catalog stored as a JSON array in a file.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogSource for JsonFileSource {
    fn load(&self) -> Result<Vec<PaperRecord>> {
        let content = fs::read_to_string(&self.path)?;
        let records: Vec<PaperRecord> = serde_json::from_str(&content)?;
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn base_dir(&self) -> Option<PathBuf> {
        Some(
            self.path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        )
    }
}
