use chrono::DateTime;
use serde::Serialize;

use crate::weekly_index::{GameRecord, WeeklyGradeIndex};

/// A time-ordered series for one metric across a game list. `values` keeps
/// `None` where no grade record resolved, so the chart shows a gap instead
/// of a zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
}

/// The finished payload handed to the chart collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
}

/// Build the weekly series for one metric. Labels and values are aligned
/// 1:1 with the date-sorted game list; re-running with the same inputs
/// yields the same output.
pub fn build_trend(
    games: &[GameRecord],
    index: &WeeklyGradeIndex,
    metric_field: &str,
) -> TrendSeries {
    let games = sort_games(games);

    let labels = games.iter().map(|game| opponent_label(game)).collect();
    let values = games
        .iter()
        .map(|game| {
            index
                .resolve(game)
                .and_then(|grade| grade.stats.get(metric_field))
        })
        .collect();

    TrendSeries { labels, values }
}

/// Wrap a series for the chart collaborator, one dataset per series.
pub fn chart_data(metric_label: &str, series: &TrendSeries) -> ChartData {
    ChartData {
        labels: series.labels.clone(),
        datasets: vec![ChartDataset {
            label: metric_label.to_string(),
            data: series.values.clone(),
        }],
    }
}

/// Sort ascending by start date. If any date fails to parse, the whole list
/// falls back to week order rather than mixing the two sort keys.
fn sort_games(games: &[GameRecord]) -> Vec<GameRecord> {
    let mut sorted = games.to_vec();
    let parsed: Option<Vec<i64>> = sorted
        .iter()
        .map(|game| {
            DateTime::parse_from_rfc3339(&game.start_date)
                .ok()
                .map(|dt| dt.timestamp())
        })
        .collect();

    match parsed {
        Some(stamps) => {
            let mut keyed: Vec<(i64, GameRecord)> =
                stamps.into_iter().zip(sorted.into_iter()).collect();
            keyed.sort_by_key(|(stamp, _)| *stamp);
            keyed.into_iter().map(|(_, game)| game).collect()
        }
        None => {
            sorted.sort_by_key(|game| game.week);
            sorted
        }
    }
}

fn opponent_label(game: &GameRecord) -> String {
    if game.team == game.home_team {
        format!("vs. {}", game.away_abbrev)
    } else {
        format!("at {}", game.home_abbrev)
    }
}
