//! Bar-chart model and the surface that owns it.

use crate::model::{FinancialRecord, Indicator};

/// One bar series: a single indicator's values across all years.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub indicator: Indicator,
    /// One entry per year, in collection order. `None` for years where the
    /// indicator was not measured; missing values pass through to the
    /// renderer untouched.
    pub values: Vec<Option<f64>>,
}

/// Grouped bar chart: one category per year, twelve series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    /// Category labels, in collection order (not sorted).
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartModel {
    /// Builds the chart from the held records.
    pub fn from_records(records: &[FinancialRecord]) -> Self {
        let labels = records.iter().map(|r| r.year.to_string()).collect();
        let series = Indicator::ALL
            .iter()
            .map(|&indicator| Series {
                indicator,
                values: records.iter().map(|r| indicator.value(r)).collect(),
            })
            .collect();
        Self { labels, series }
    }
}

/// Exclusive owner of the currently rendered chart.
///
/// At most one model is ever installed: `replace` drops the previous model
/// in the same operation that installs the new one, so no two models are
/// bound to the surface at any observable time. `clear` drops the current
/// model on teardown.
#[derive(Debug, Default)]
pub struct ChartSurface {
    current: Option<ChartModel>,
}

impl ChartSurface {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Installs a new model, dropping the previous one.
    pub fn replace(&mut self, model: ChartModel) {
        self.current = Some(model);
    }

    /// Drops the current model.
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&ChartModel> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32) -> FinancialRecord {
        FinancialRecord {
            year,
            formally_served: 77.0,
            banked: 50.0,
            mobile_money_penetration: None,
            ..FinancialRecord::default()
        }
    }

    #[test]
    fn test_labels_follow_input_order() {
        let records = vec![record(2020), record(2008), record(2016)];
        let model = ChartModel::from_records(&records);
        assert_eq!(model.labels, vec!["2020", "2008", "2016"]);
    }

    #[test]
    fn test_twelve_series_each_spanning_all_years() {
        let records = vec![record(2016), record(2020)];
        let model = ChartModel::from_records(&records);
        assert_eq!(model.series.len(), 12);
        for series in &model.series {
            assert_eq!(series.values.len(), 2);
        }
    }

    #[test]
    fn test_missing_values_pass_through() {
        let records = vec![record(2020)];
        let model = ChartModel::from_records(&records);

        let mobile_money = model
            .series
            .iter()
            .find(|s| s.indicator == Indicator::MobileMoneyPenetration)
            .unwrap();
        assert_eq!(mobile_money.values, vec![None]);

        let banked = model
            .series
            .iter()
            .find(|s| s.indicator == Indicator::Banked)
            .unwrap();
        assert_eq!(banked.values, vec![Some(50.0)]);
    }

    #[test]
    fn test_surface_holds_at_most_one_model() {
        let mut surface = ChartSurface::new();
        assert!(surface.current().is_none());

        surface.replace(ChartModel::from_records(&[record(2016)]));
        surface.replace(ChartModel::from_records(&[record(2020)]));

        let current = surface.current().unwrap();
        assert_eq!(current.labels, vec!["2020"]);
    }

    #[test]
    fn test_clear_drops_the_model() {
        let mut surface = ChartSurface::new();
        surface.replace(ChartModel::from_records(&[record(2020)]));
        surface.clear();
        assert!(surface.current().is_none());
    }
}
