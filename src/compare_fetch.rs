use std::env;

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde_json::Value;

use crate::http_cache::fetch_json_cached;
use crate::http_client::http_client;
use crate::stat_record::StatRecord;
use crate::weekly_index::{GameRecord, SeasonType, WeeklyGrade, WeeklyGradeIndex};

const DEFAULT_API_BASE: &str = "https://api.collegefootballdata.com";

fn api_base() -> String {
    env::var("CFBD_API_BASE")
        .ok()
        .filter(|base| !base.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// One selectable entity in a picker: id plus display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityOption {
    pub value: u64,
    pub label: String,
}

/// One year of an entity's metadata history.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityProfile {
    pub year: u32,
    pub name: String,
    pub headshot_url: Option<String>,
}

/// Everything a comparison screen needs for both entities. Built all-or-
/// nothing: a partial fetch degrades to an error, never a partial render.
#[derive(Debug, Clone)]
pub struct ComparisonBundle {
    pub profile_a: EntityProfile,
    pub profile_b: EntityProfile,
    pub record_a: StatRecord,
    pub record_b: StatRecord,
}

/// Per-game weekly grades. Individual game failures leave a `None` slot and
/// a message here rather than aborting the batch.
#[derive(Debug, Clone)]
pub struct WeeklyFetch {
    pub index: WeeklyGradeIndex,
    pub errors: Vec<String>,
}

/// Entity picker options for a season, deduplicated by id.
pub fn fetch_entity_listing(year: u32) -> Result<Vec<EntityOption>> {
    let client = http_client()?;
    let url = format!("{}/teams/fbs?year={year}", api_base());
    let body = fetch_json_cached(client, &url).context("entity listing request failed")?;
    let v: Value = serde_json::from_str(body.trim()).context("invalid entity listing json")?;

    let mut out = Vec::new();
    if let Some(arr) = v.as_array() {
        for item in arr {
            let Some(id) = item.get("id").and_then(|x| x.as_u64()) else {
                continue;
            };
            let label = item
                .get("school")
                .or_else(|| item.get("name"))
                .and_then(|x| x.as_str())
                .unwrap_or_default()
                .to_string();
            out.push(EntityOption { value: id, label });
        }
    }
    out.sort_by_key(|opt| opt.value);
    out.dedup_by_key(|opt| opt.value);
    Ok(out)
}

/// Metadata history for an entity; picks the entry matching the requested
/// year, else the first entry.
pub fn fetch_entity_profile(entity_id: u64, year: u32) -> Result<EntityProfile> {
    let client = http_client()?;
    let url = format!("{}/player/history?id={entity_id}", api_base());
    let body = fetch_json_cached(client, &url).context("profile request failed")?;
    let v: Value = serde_json::from_str(body.trim()).context("invalid profile json")?;

    let entries: Vec<EntityProfile> = v
        .as_array()
        .map(|arr| arr.iter().filter_map(parse_profile_entry).collect())
        .unwrap_or_default();
    entries
        .iter()
        .find(|entry| entry.year == year)
        .or_else(|| entries.first())
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("no profile history for entity {entity_id}"))
}

fn parse_profile_entry(v: &Value) -> Option<EntityProfile> {
    let year = v.get("year")?.as_u64()? as u32;
    let name = v
        .get("name")
        .or_else(|| v.get("school"))
        .and_then(|x| x.as_str())
        .unwrap_or_default()
        .to_string();
    let headshot_url = v
        .get("headshotURL")
        .and_then(|x| x.as_str())
        .map(|s| s.to_string());
    Some(EntityProfile {
        year,
        name,
        headshot_url,
    })
}

/// The flat season percentile record for one entity.
pub fn fetch_season_percentiles(entity_id: u64, year: u32) -> Result<StatRecord> {
    let client = http_client()?;
    let url = format!(
        "{}/stats/season/percentiles?id={entity_id}&year={year}",
        api_base()
    );
    let body = fetch_json_cached(client, &url).context("percentile request failed")?;
    parse_percentile_json(&body)
}

/// Parse a flat percentile record. The endpoint returns either the record
/// itself or a one-element array wrapping it.
pub fn parse_percentile_json(body: &str) -> Result<StatRecord> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(anyhow::anyhow!("empty percentile response"));
    }
    let v: Value = serde_json::from_str(trimmed).context("invalid percentile json")?;
    let record = match v.as_array() {
        Some(arr) => arr.first().cloned().unwrap_or(Value::Null),
        None => v,
    };
    Ok(StatRecord::from_json(&record))
}

/// The tracked entity's schedule for one season, both regular and
/// postseason games.
pub fn fetch_game_list(team: &str, year: u32) -> Result<Vec<GameRecord>> {
    let client = http_client()?;
    let url = format!("{}/games?year={year}&team={team}&seasonType=both", api_base());
    let body = fetch_json_cached(client, &url).context("game list request failed")?;
    parse_game_list_json(&body, team)
}

/// Parse the schedule endpoint body. Rows missing a week or season type are
/// skipped rather than failing the list.
pub fn parse_game_list_json(body: &str, team: &str) -> Result<Vec<GameRecord>> {
    let v: Value = serde_json::from_str(body.trim()).context("invalid game list json")?;
    let mut out = Vec::new();
    if let Some(arr) = v.as_array() {
        for item in arr {
            if let Some(game) = parse_game_record(item, team) {
                out.push(game);
            }
        }
    }
    Ok(out)
}

pub fn parse_game_record(v: &Value, team: &str) -> Option<GameRecord> {
    let week = v.get("week")?.as_u64()? as u32;
    let season_type = v
        .get("seasonType")
        .and_then(|x| x.as_str())
        .and_then(SeasonType::parse)?;
    let string_field = |name: &str| {
        v.get(name)
            .and_then(|x| x.as_str())
            .unwrap_or_default()
            .to_string()
    };
    Some(GameRecord {
        week,
        season_type,
        start_date: string_field("startDate"),
        team: team.to_string(),
        home_team: string_field("homeTeam"),
        away_team: string_field("awayTeam"),
        home_abbrev: string_field("homeTeamAbbrev"),
        away_abbrev: string_field("awayTeamAbbrev"),
        home_id: v.get("homeId").and_then(|x| x.as_u64()).unwrap_or(0),
        away_id: v.get("awayId").and_then(|x| x.as_u64()).unwrap_or(0),
    })
}

/// Joined fan-out for both sides of a comparison: profiles and percentile
/// records for A and B, all four required before the merge proceeds.
pub fn load_comparison(entity_a: u64, entity_b: u64, year: u32) -> Result<ComparisonBundle> {
    let (side_a, side_b) = with_fetch_pool(|| {
        rayon::join(
            || fetch_comparison_side(entity_a, year),
            || fetch_comparison_side(entity_b, year),
        )
    });
    let (profile_a, record_a) = side_a?;
    let (profile_b, record_b) = side_b?;
    Ok(ComparisonBundle {
        profile_a,
        profile_b,
        record_a,
        record_b,
    })
}

fn fetch_comparison_side(entity_id: u64, year: u32) -> Result<(EntityProfile, StatRecord)> {
    let (profile, record) = rayon::join(
        || fetch_entity_profile(entity_id, year),
        || fetch_season_percentiles(entity_id, year),
    );
    Ok((profile?, record?))
}

/// One grade request per game, fanned out through the bounded pool. A
/// failed game resolves to a `None` slot so the rest of the batch still
/// renders; the message is kept for the status line.
pub fn fetch_weekly_grades(entity_id: u64, year: u32, games: &[GameRecord]) -> WeeklyFetch {
    let results: Vec<(u32, SeasonType, Result<WeeklyGrade>)> = with_fetch_pool(|| {
        games
            .par_iter()
            .map(|game| {
                (
                    game.week,
                    game.season_type,
                    fetch_week_grade(entity_id, year, game),
                )
            })
            .collect()
    });

    let mut index = WeeklyGradeIndex::new();
    let mut errors = Vec::new();
    for (week, season_type, result) in results {
        match result {
            Ok(grade) => index.insert(week, season_type, Some(grade)),
            Err(err) => {
                errors.push(format!("week {week} {season_type} grades failed: {err}"));
                index.insert(week, season_type, None);
            }
        }
    }
    WeeklyFetch { index, errors }
}

fn fetch_week_grade(entity_id: u64, year: u32, game: &GameRecord) -> Result<WeeklyGrade> {
    let client = http_client()?;
    let url = format!(
        "{}/grades/week?id={entity_id}&year={year}&week={}&seasonType={}",
        api_base(),
        game.week,
        game.season_type
    );
    let body = fetch_json_cached(client, &url).context("week grade request failed")?;
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(anyhow::anyhow!("empty week grade response"));
    }
    let v: Value = serde_json::from_str(trimmed).context("invalid week grade json")?;
    let record = match v.as_array() {
        Some(arr) => arr.first().cloned().unwrap_or(Value::Null),
        None => v,
    };
    let start_date = record
        .get("startDate")
        .and_then(|x| x.as_str())
        .unwrap_or(&game.start_date)
        .to_string();
    Ok(WeeklyGrade {
        start_date,
        stats: StatRecord::from_json(&record),
    })
}

fn with_fetch_pool<T>(action: impl FnOnce() -> T + Send) -> T
where
    T: Send,
{
    let threads = fetch_parallelism();
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(action),
        Err(_) => action(),
    }
}

fn fetch_parallelism() -> usize {
    env::var("FETCH_PARALLELISM")
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(6)
        .clamp(2, 32)
}
