use std::collections::BTreeSet;

use crate::merge::MetricRow;
use crate::stat_record::{format_field_label, StatRecord, IDENTITY_FIELDS};

/// A residual field offered in the custom-metric selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableMetric {
    pub value: String,
    pub label: String,
}

/// Fields eligible for ad hoc selection: the union of both records' field
/// names minus the identity set, sorted for a stable selector order.
pub fn available_metrics(a: &StatRecord, b: &StatRecord) -> Vec<AvailableMetric> {
    let mut fields: BTreeSet<&str> = BTreeSet::new();
    fields.extend(a.field_names());
    fields.extend(b.field_names());

    fields
        .into_iter()
        .filter(|field| !IDENTITY_FIELDS.contains(field))
        .map(|field| AvailableMetric {
            value: field.to_string(),
            label: format_field_label(field),
        })
        .collect()
}

/// Append a user-selected metric row, pulling live values from both records.
/// Adding a field that is already present is a silent no-op.
pub fn add_custom_metric(
    selected: &AvailableMetric,
    current: &[MetricRow],
    a: &StatRecord,
    b: &StatRecord,
) -> Vec<MetricRow> {
    let mut rows = current.to_vec();
    if rows.iter().any(|row| row.field == selected.value) {
        return rows;
    }
    rows.push(MetricRow {
        label: selected.label.clone(),
        field: selected.value.clone(),
        value_a: a.value_or_zero(&selected.value),
        value_b: b.value_or_zero(&selected.value),
    });
    rows
}

/// Drop the row with the given field. Removing an absent field is a no-op.
pub fn remove_custom_metric(field: &str, current: &[MetricRow]) -> Vec<MetricRow> {
    current
        .iter()
        .filter(|row| row.field != field)
        .cloned()
        .collect()
}
