//! Offline provider reading the envelope from a local JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::error;

use super::RecordProvider;
use crate::collector::FetchError;
use crate::model::{Envelope, FinancialRecord};

/// Reads records from a dataset file with the same envelope shape the API
/// returns. Refreshing re-reads the file.
pub struct FileProvider {
    path: PathBuf,
    source: String,
    records: Vec<FinancialRecord>,
    last_error: Option<FetchError>,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let source = path.display().to_string();
        Self {
            path,
            source,
            records: Vec::new(),
            last_error: None,
        }
    }

    fn load(path: &Path) -> Result<Vec<FinancialRecord>, FetchError> {
        let raw = fs::read_to_string(path).map_err(|e| FetchError::Io(e.to_string()))?;
        let envelope: Envelope =
            serde_json::from_str(&raw).map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }
}

impl RecordProvider for FileProvider {
    fn refresh(&mut self) -> Option<&[FinancialRecord]> {
        match Self::load(&self.path) {
            Ok(records) => {
                self.records = records;
                self.last_error = None;
                Some(&self.records)
            }
            Err(e) => {
                error!(
                    error = %e,
                    path = %self.path.display(),
                    "failed to load indicator data"
                );
                self.last_error = Some(e);
                None
            }
        }
    }

    fn records(&self) -> &[FinancialRecord] {
        &self.records
    }

    fn is_live(&self) -> bool {
        false
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"{
        "data": [
            {
                "year": 2016,
                "formallyServed": 68,
                "banked": 26,
                "otherFormal": 42,
                "informallyServed": 21,
                "excluded": 11,
                "savingGroupMember": 35,
                "mfiSaccos": 6,
                "umurengeSACCO": 22,
                "borrowingCredit": 21,
                "insuranceRiskMitigation": 9,
                "mobileMoneyPenetration": null,
                "savingsInvestments": 86
            },
            {
                "year": 2020,
                "formallyServed": 77,
                "banked": 36,
                "otherFormal": 41,
                "informallyServed": 16,
                "excluded": 7,
                "savingGroupMember": null,
                "mfiSaccos": 5,
                "umurengeSACCO": null,
                "borrowingCredit": 30,
                "insuranceRiskMitigation": 8,
                "mobileMoneyPenetration": null,
                "savingsInvestments": 40
            }
        ]
    }"#;

    #[test]
    fn test_refresh_loads_records_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let mut provider = FileProvider::new(file.path());
        let records = provider.refresh().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].year, 2016);
        assert_eq!(records[1].year, 2020);
        assert!(provider.last_error().is_none());
        assert!(!provider.is_live());
    }

    #[test]
    fn test_missing_file_leaves_records_empty() {
        let mut provider = FileProvider::new("/nonexistent/indicators.json");
        assert!(provider.refresh().is_none());
        assert!(provider.records().is_empty());
        assert!(matches!(provider.last_error(), Some(FetchError::Io(_))));
    }

    #[test]
    fn test_garbled_file_keeps_prior_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let mut provider = FileProvider::new(file.path());
        provider.refresh().unwrap();
        assert_eq!(provider.records().len(), 2);

        // Truncate the file to garbage and refresh again.
        let mut file = fs::File::create(provider.path.clone()).unwrap();
        file.write_all(b"{\"data\": [{").unwrap();

        assert!(provider.refresh().is_none());
        assert_eq!(provider.records().len(), 2);
        assert!(matches!(provider.last_error(), Some(FetchError::Decode(_))));
    }
}
