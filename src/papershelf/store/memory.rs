use super::CatalogSource;
use crate::error::{Result, ShelfError};
use crate::model::PaperRecord;

/// Records held in memory. Used by tests and by callers that already have data.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<PaperRecord>,
    failure: Option<String>,
}

impl InMemorySource {
    pub fn new(records: Vec<PaperRecord>) -> Self {
        Self {
            records,
            failure: None,
        }
    }

    /// A source whose every load fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

impl CatalogSource for InMemorySource {
    fn load(&self) -> Result<Vec<PaperRecord>> {
        match &self.failure {
            Some(message) => Err(ShelfError::Io(std::io::Error::other(message.clone()))),
            None => Ok(self.records.clone()),
        }
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
