use gridiron_terminal::stat_record::StatRecord;
use gridiron_terminal::trend::{build_trend, chart_data};
use gridiron_terminal::weekly_index::{
    week_key, GameRecord, SeasonType, WeeklyGrade, WeeklyGradeIndex,
};

fn game(week: u32, season_type: SeasonType, start_date: &str, home: bool) -> GameRecord {
    GameRecord {
        week,
        season_type,
        start_date: start_date.to_string(),
        team: "Georgia".to_string(),
        home_team: if home { "Georgia" } else { "Alabama" }.to_string(),
        away_team: if home { "Alabama" } else { "Georgia" }.to_string(),
        home_abbrev: if home { "UGA" } else { "ALA" }.to_string(),
        away_abbrev: if home { "ALA" } else { "UGA" }.to_string(),
        home_id: if home { 61 } else { 333 },
        away_id: if home { 333 } else { 61 },
    }
}

fn grade(start_date: &str, field: &str, value: f64) -> WeeklyGrade {
    WeeklyGrade {
        start_date: start_date.to_string(),
        stats: StatRecord::from([(field, value)]),
    }
}

#[test]
fn labels_and_values_align_with_the_game_list() {
    let games = vec![
        game(2, SeasonType::Regular, "2025-09-13T19:30:00Z", true),
        game(1, SeasonType::Regular, "2025-09-06T16:00:00Z", false),
        game(3, SeasonType::Regular, "2025-09-20T23:00:00Z", true),
    ];
    let mut index = WeeklyGradeIndex::new();
    index.insert(1, SeasonType::Regular, Some(grade("2025-09-06T16:00:00Z", "grades_offense", 71.2)));
    index.insert(3, SeasonType::Regular, Some(grade("2025-09-20T23:00:00Z", "grades_offense", 88.4)));

    let series = build_trend(&games, &index, "grades_offense");
    assert_eq!(series.labels.len(), games.len());
    assert_eq!(series.values.len(), games.len());

    // Sorted by start date, so week 1 (an away game) comes first.
    assert_eq!(series.labels[0], "at ALA");
    assert_eq!(series.labels[1], "vs. ALA");
    assert_eq!(series.values[0], Some(71.2));
    // Week 2 has no grade record: a gap, not a zero.
    assert_eq!(series.values[1], None);
    assert_eq!(series.values[2], Some(88.4));
}

#[test]
fn invalid_dates_fall_back_to_week_order() {
    let games = vec![
        game(5, SeasonType::Regular, "not-a-date", true),
        game(2, SeasonType::Regular, "2025-09-13T19:30:00Z", true),
    ];
    let series = build_trend(&games, &WeeklyGradeIndex::new(), "grades_offense");
    // Week 2 sorts first even though its date string is the only valid one.
    assert_eq!(series.values, vec![None, None]);
    assert_eq!(series.labels[0], "vs. ALA");
}

#[test]
fn missing_metric_field_is_a_gap() {
    let games = vec![game(1, SeasonType::Regular, "2025-09-06T16:00:00Z", true)];
    let mut index = WeeklyGradeIndex::new();
    index.insert(1, SeasonType::Regular, Some(grade("2025-09-06T16:00:00Z", "grades_run", 64.0)));

    let series = build_trend(&games, &index, "grades_offense");
    assert_eq!(series.values, vec![None]);
}

#[test]
fn rebuilding_yields_identical_series() {
    let games = vec![
        game(1, SeasonType::Regular, "2025-09-06T16:00:00Z", false),
        game(2, SeasonType::Regular, "2025-09-13T19:30:00Z", true),
    ];
    let mut index = WeeklyGradeIndex::new();
    index.insert(1, SeasonType::Regular, Some(grade("2025-09-06T16:00:00Z", "grades_run", 64.0)));

    let first = build_trend(&games, &index, "grades_run");
    let second = build_trend(&games, &index, "grades_run");
    assert_eq!(first, second);
}

#[test]
fn composite_key_format() {
    assert_eq!(week_key(3, SeasonType::Regular), "3_regular");
    assert_eq!(week_key(1, SeasonType::Postseason), "1_postseason");
}

#[test]
fn postseason_lookup_falls_back_to_start_date() {
    let bowl = game(1, SeasonType::Postseason, "2026-01-01T17:00:00Z", false);
    let mut index = WeeklyGradeIndex::new();
    // The upstream service indexed the bowl under a regular-season week
    // number; only the date matches.
    index.insert(16, SeasonType::Regular, Some(grade("2026-01-01T17:00:00Z", "grades_offense", 90.1)));

    let resolved = index.resolve(&bowl);
    assert_eq!(resolved.map(|g| g.stats.get("grades_offense")), Some(Some(90.1)));
}

#[test]
fn regular_season_lookup_never_scans_by_date() {
    let missing = game(4, SeasonType::Regular, "2025-09-27T19:30:00Z", true);
    let mut index = WeeklyGradeIndex::new();
    index.insert(9, SeasonType::Regular, Some(grade("2025-09-27T19:30:00Z", "grades_offense", 55.0)));

    assert!(index.resolve(&missing).is_none());
}

#[test]
fn failed_fetch_slots_resolve_to_none() {
    let g = game(2, SeasonType::Regular, "2025-09-13T19:30:00Z", true);
    let mut index = WeeklyGradeIndex::new();
    index.insert(2, SeasonType::Regular, None);

    assert!(index.resolve(&g).is_none());
}

#[test]
fn chart_payload_serializes_gaps_as_null() {
    let games = vec![
        game(1, SeasonType::Regular, "2025-09-06T16:00:00Z", true),
        game(2, SeasonType::Regular, "2025-09-13T19:30:00Z", true),
    ];
    let mut index = WeeklyGradeIndex::new();
    index.insert(1, SeasonType::Regular, Some(grade("2025-09-06T16:00:00Z", "grades_offense", 77.0)));

    let series = build_trend(&games, &index, "grades_offense");
    let payload = chart_data("Overall Grade", &series);
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["labels"].as_array().unwrap().len(), 2);
    assert_eq!(json["datasets"][0]["label"], "Overall Grade");
    assert_eq!(json["datasets"][0]["data"][0], 77.0);
    assert!(json["datasets"][0]["data"][1].is_null());
}
