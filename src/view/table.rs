//! Table view model for the indicators grid.

use crate::model::{COLUMN_COUNT, FinancialRecord, Indicator};
use crate::util::format_number;

/// Placeholder shown for falsy cells.
///
/// The display rule is truthiness, so a rate of exactly 0 renders the same
/// as an unmeasured one.
pub const NULL_PLACEHOLDER: &str = "null";

/// Text of the single full-width row shown when no records are held.
pub const EMPTY_TEXT: &str = "No data available";

/// One rendered table row.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow {
    /// Row key. Years are not deduplicated; duplicate input years produce
    /// duplicate keys.
    pub year: i32,
    pub cells: Vec<String>,
}

/// Complete indicators table ready to be rendered by any frontend.
#[derive(Debug, Clone)]
pub struct TableViewModel {
    pub headers: Vec<&'static str>,
    pub rows: Vec<ViewRow>,
}

impl TableViewModel {
    /// Builds the 13-column grid from the held records, in input order.
    pub fn from_records(records: &[FinancialRecord]) -> Self {
        let mut headers = Vec::with_capacity(COLUMN_COUNT);
        headers.push("Year");
        headers.extend(Indicator::ALL.iter().map(|i| i.label()));

        let rows = records
            .iter()
            .map(|record| {
                let mut cells = Vec::with_capacity(COLUMN_COUNT);
                cells.push(display_cell(Some(f64::from(record.year))));
                cells.extend(record.indicators().iter().map(|v| display_cell(*v)));
                ViewRow {
                    year: record.year,
                    cells,
                }
            })
            .collect();

        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Applies the truthy-or-placeholder display rule to one cell.
fn display_cell(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 => format_number(v),
        _ => NULL_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Envelope;

    fn sample_records() -> Vec<FinancialRecord> {
        let envelope: Envelope = serde_json::from_str(
            r#"{
                "data": [{
                    "year": 2020,
                    "formallyServed": 77,
                    "banked": 50,
                    "otherFormal": 27,
                    "informallyServed": 10,
                    "excluded": 13,
                    "savingGroupMember": null,
                    "mfiSaccos": 5,
                    "umurengeSACCO": null,
                    "borrowingCredit": 30,
                    "insuranceRiskMitigation": 8,
                    "mobileMoneyPenetration": null,
                    "savingsInvestments": 40
                }]
            }"#,
        )
        .unwrap();
        envelope.data
    }

    #[test]
    fn test_headers_are_the_thirteen_fixed_labels() {
        let table = TableViewModel::from_records(&[]);
        assert_eq!(
            table.headers,
            vec![
                "Year",
                "Formally Served",
                "Banked",
                "Other Formal",
                "Informally Served",
                "Excluded",
                "Saving Group Member",
                "MFI/SACCOs",
                "Umurenge SACCO",
                "Borrowing and Credit",
                "Insurance and Risk Mitigation",
                "Mobile Money Penetration",
                "Savings and Investments",
            ]
        );
    }

    #[test]
    fn test_row_cells_match_record_with_null_placeholders() {
        let table = TableViewModel::from_records(&sample_records());
        assert_eq!(table.rows.len(), 1);
        assert_eq!(
            table.rows[0].cells,
            vec![
                "2020", "77", "50", "27", "10", "13", "null", "5", "null", "30", "8", "null", "40"
            ]
        );
    }

    #[test]
    fn test_zero_renders_as_placeholder() {
        let mut records = sample_records();
        records[0].excluded = 0.0;
        let table = TableViewModel::from_records(&records);
        assert_eq!(table.rows[0].cells[5], "null");
    }

    #[test]
    fn test_fractional_rate_keeps_decimal() {
        let mut records = sample_records();
        records[0].banked = 26.6;
        let table = TableViewModel::from_records(&records);
        assert_eq!(table.rows[0].cells[2], "26.6");
    }

    #[test]
    fn test_empty_collection_builds_empty_model() {
        let table = TableViewModel::from_records(&[]);
        assert!(table.is_empty());
        assert_eq!(table.headers.len(), COLUMN_COUNT);
    }

    #[test]
    fn test_one_row_per_record_in_input_order() {
        let mut records = sample_records();
        let mut second = records[0].clone();
        second.year = 2016;
        records.push(second);

        let table = TableViewModel::from_records(&records);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].year, 2020);
        assert_eq!(table.rows[1].year, 2016);
    }
}
