use crate::catalog::{DirectionalMetricDefinition, MetricDefinition};
use crate::stat_record::StatRecord;

/// One side-by-side comparison row. `field` is unique within a row list and
/// values are always concrete numbers (missing source stats read as 0).
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub label: String,
    pub field: String,
    pub value_a: f64,
    pub value_b: f64,
}

/// A produced-vs-allowed row: the two sides came from different fields, so
/// there is no single field name to carry.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalRow {
    pub label: String,
    pub home_value: f64,
    pub away_value: f64,
}

/// Combine two stat records against a catalog. Total over the catalog (one
/// row per entry, even when both values are 0) and order-preserving.
pub fn merge(catalog: &[MetricDefinition], a: &StatRecord, b: &StatRecord) -> Vec<MetricRow> {
    catalog
        .iter()
        .map(|entry| MetricRow {
            label: entry.label.to_string(),
            field: entry.field.to_string(),
            value_a: a.value_or_zero(entry.field),
            value_b: b.value_or_zero(entry.field),
        })
        .collect()
}

/// Combine two records against a directional catalog: record A supplies the
/// away-side field, record B the home-side field, independently.
pub fn merge_directional(
    catalog: &[DirectionalMetricDefinition],
    a: &StatRecord,
    b: &StatRecord,
) -> Vec<DirectionalRow> {
    catalog
        .iter()
        .map(|entry| DirectionalRow {
            label: entry.label.to_string(),
            away_value: a.value_or_zero(entry.away_field),
            home_value: b.value_or_zero(entry.home_field),
        })
        .collect()
}

/// Proportional bar width for one value of a row, in percent. The
/// denominator is floored at 1 so a 0/0 row renders as empty bars rather
/// than dividing by zero.
pub fn bar_width(value: f64, other: f64) -> f64 {
    value / value.max(other).max(1.0) * 100.0
}
