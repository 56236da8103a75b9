//! Live provider backed by the remote API.

use tracing::error;

use super::RecordProvider;
use crate::collector::{ApiCollector, FetchError};
use crate::model::FinancialRecord;

/// Fetches records from the remote API.
///
/// Nothing fetches implicitly: one refresh fires at startup and further ones
/// only on explicit operator request.
pub struct ApiProvider {
    collector: ApiCollector,
    records: Vec<FinancialRecord>,
    last_error: Option<FetchError>,
}

impl ApiProvider {
    pub fn new(collector: ApiCollector) -> Self {
        Self {
            collector,
            records: Vec::new(),
            last_error: None,
        }
    }
}

impl RecordProvider for ApiProvider {
    fn refresh(&mut self) -> Option<&[FinancialRecord]> {
        match self.collector.fetch() {
            Ok(records) => {
                self.records = records;
                self.last_error = None;
                Some(&self.records)
            }
            Err(e) => {
                error!(
                    error = %e,
                    endpoint = self.collector.endpoint(),
                    "failed to fetch indicator data"
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
        true
    }

    fn source(&self) -> &str {
        self.collector.endpoint()
    }

    fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_refresh_keeps_prior_records() {
        // Port 9 (discard) is not listening; the connect fails immediately.
        let collector = ApiCollector::with_endpoint("http://127.0.0.1:9/api/v1/data");
        let mut provider = ApiProvider::new(collector);
        provider.records = vec![FinancialRecord {
            year: 2020,
            ..FinancialRecord::default()
        }];

        assert!(provider.refresh().is_none());
        assert_eq!(provider.records().len(), 1);
        assert_eq!(provider.records()[0].year, 2020);
        assert!(provider.last_error().is_some());
    }

    #[test]
    fn test_failed_initial_refresh_stays_empty() {
        let collector = ApiCollector::with_endpoint("http://127.0.0.1:9/api/v1/data");
        let mut provider = ApiProvider::new(collector);

        assert!(provider.refresh().is_none());
        assert!(provider.records().is_empty());
    }
}
