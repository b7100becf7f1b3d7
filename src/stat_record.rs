use std::collections::HashMap;

use serde_json::Value;

/// Identity fields present in remote stat payloads. These describe who the
/// record belongs to, not how they performed, and are excluded from any
/// residual-field computation. Both snake_case and camelCase spellings show
/// up depending on the endpoint.
pub const IDENTITY_FIELDS: &[&str] = &[
    "name",
    "player_id",
    "playerId",
    "team_id",
    "teamId",
    "year",
    "team",
    "school",
    "position",
    "conference",
];

/// A duck-typed stat payload from the data service: field name -> numeric
/// value, where the service may send null for stats it did not track.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatRecord {
    values: HashMap<String, Option<f64>>,
}

impl StatRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat JSON object. Numeric fields keep their value, explicit
    /// nulls are kept as absent-valued fields, and string identity fields
    /// (name, school, ...) are dropped since they are never chartable.
    pub fn from_json(raw: &Value) -> Self {
        let mut values = HashMap::new();
        if let Some(obj) = raw.as_object() {
            for (field, value) in obj {
                match value {
                    Value::Number(n) => {
                        values.insert(field.clone(), n.as_f64());
                    }
                    Value::Null => {
                        values.insert(field.clone(), None);
                    }
                    _ => {}
                }
            }
        }
        Self { values }
    }

    pub fn insert(&mut self, field: &str, value: Option<f64>) {
        self.values.insert(field.to_string(), value);
    }

    pub fn get(&self, field: &str) -> Option<f64> {
        self.values.get(field).copied().flatten()
    }

    /// Row semantics: a missing or null stat reads as zero, never NaN.
    pub fn value_or_zero(&self, field: &str) -> f64 {
        self.get(field).filter(|v| v.is_finite()).unwrap_or(0.0)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<const N: usize> From<[(&str, f64); N]> for StatRecord {
    fn from(pairs: [(&str, f64); N]) -> Self {
        let mut record = StatRecord::new();
        for (field, value) in pairs {
            record.insert(field, Some(value));
        }
        record
    }
}

/// Format a snake_case field name for display: "rushing_yards" -> "Rushing Yards".
pub fn format_field_label(field: &str) -> String {
    field
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
