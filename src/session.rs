use crate::catalog::{self, EntityClass};
use crate::custom_metrics::{add_custom_metric, available_metrics, AvailableMetric};
use crate::grade::format_percentile;
use crate::merge::{merge, MetricRow};
use crate::stat_record::StatRecord;
use crate::trend::{build_trend, TrendSeries};
use crate::weekly_index::{GameRecord, WeeklyGradeIndex};

#[derive(Debug, Clone, PartialEq)]
pub struct EntitySelection {
    pub id: u64,
    pub name: String,
    pub year: u32,
}

/// A headline stat rendered for display: letter grade plus formatted
/// percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlineGrade {
    pub grade: &'static str,
    pub percent: String,
}

/// All state of one comparison screen, consolidated into a single value.
/// Transitions are pure: each returns a new snapshot, so recomputation on
/// entity/season/metric changes never accumulates stale rows.
#[derive(Debug, Clone)]
pub struct ComparisonSession {
    pub class: EntityClass,
    pub entity_a: EntitySelection,
    pub entity_b: EntitySelection,
    pub record_a: StatRecord,
    pub record_b: StatRecord,
    pub base_rows: Vec<MetricRow>,
    pub grade_rows: Vec<MetricRow>,
    pub custom_rows: Vec<MetricRow>,
    pub selected_metric: Option<String>,
    pub trend: Option<TrendSeries>,
    pub error: Option<String>,
}

impl ComparisonSession {
    pub fn new(class: EntityClass, entity_a: EntitySelection, entity_b: EntitySelection) -> Self {
        Self {
            class,
            entity_a,
            entity_b,
            record_a: StatRecord::new(),
            record_b: StatRecord::new(),
            base_rows: Vec::new(),
            grade_rows: Vec::new(),
            custom_rows: Vec::new(),
            selected_metric: None,
            trend: None,
            error: None,
        }
    }

    /// Install freshly fetched records and rebuild every derived row list.
    /// Custom rows are re-merged from the new records so their values track
    /// the current season, while the user's selections survive.
    pub fn with_records(&self, record_a: StatRecord, record_b: StatRecord) -> Self {
        let base_rows = merge(catalog::base_catalog(self.class), &record_a, &record_b);
        let grade_rows = merge(catalog::grade_catalog(self.class), &record_a, &record_b);
        let custom_rows = self
            .custom_rows
            .iter()
            .map(|row| MetricRow {
                label: row.label.clone(),
                field: row.field.clone(),
                value_a: record_a.value_or_zero(&row.field),
                value_b: record_b.value_or_zero(&row.field),
            })
            .collect();

        Self {
            record_a,
            record_b,
            base_rows,
            grade_rows,
            custom_rows,
            error: None,
            ..self.clone()
        }
    }

    pub fn with_error(&self, message: String) -> Self {
        Self {
            error: Some(message),
            ..self.clone()
        }
    }

    pub fn available_metrics(&self) -> Vec<AvailableMetric> {
        available_metrics(&self.record_a, &self.record_b)
    }

    pub fn with_custom_added(&self, selected: &AvailableMetric) -> Self {
        Self {
            custom_rows: add_custom_metric(
                selected,
                &self.custom_rows,
                &self.record_a,
                &self.record_b,
            ),
            ..self.clone()
        }
    }

    pub fn with_custom_removed(&self, field: &str) -> Self {
        Self {
            custom_rows: crate::custom_metrics::remove_custom_metric(field, &self.custom_rows),
            ..self.clone()
        }
    }

    /// Select a trend metric and derive its series from the given game list
    /// and weekly index.
    pub fn with_trend_metric(
        &self,
        metric_field: &str,
        games: &[GameRecord],
        index: &WeeklyGradeIndex,
    ) -> Self {
        Self {
            selected_metric: Some(metric_field.to_string()),
            trend: Some(build_trend(games, index, metric_field)),
            ..self.clone()
        }
    }

    /// Render one percentile as a headline grade for this session's entity
    /// class (tight ends use the round curve).
    pub fn headline(&self, percentile: Option<f64>) -> HeadlineGrade {
        HeadlineGrade {
            grade: catalog::ladder(self.class).to_grade(percentile),
            percent: format_percentile(percentile),
        }
    }
}
