use gridiron_terminal::custom_metrics::{
    add_custom_metric, available_metrics, remove_custom_metric, AvailableMetric,
};
use gridiron_terminal::stat_record::{format_field_label, StatRecord};

fn selector(field: &str) -> AvailableMetric {
    AvailableMetric {
        value: field.to_string(),
        label: format_field_label(field),
    }
}

#[test]
fn available_metrics_is_the_union_minus_identity_fields() {
    let mut a = StatRecord::new();
    a.insert("player_id", Some(42.0));
    a.insert("year", Some(2025.0));
    a.insert("rushing_yards", Some(1100.0));
    let mut b = StatRecord::new();
    b.insert("team_id", Some(7.0));
    b.insert("broken_tackles", Some(38.0));
    b.insert("rushing_yards", Some(930.0));

    let metrics = available_metrics(&a, &b);
    let fields: Vec<&str> = metrics.iter().map(|m| m.value.as_str()).collect();
    assert_eq!(fields, vec!["broken_tackles", "rushing_yards"]);
}

#[test]
fn labels_are_title_cased_from_snake_case() {
    let a = StatRecord::from([("yards_after_contact", 512.0)]);
    let metrics = available_metrics(&a, &StatRecord::new());
    assert_eq!(metrics[0].label, "Yards After Contact");

    assert_eq!(format_field_label("grades_offense"), "Grades Offense");
    assert_eq!(format_field_label("yprr"), "Yprr");
}

#[test]
fn adding_twice_yields_exactly_one_row() {
    let a = StatRecord::from([("broken_tackles", 38.0)]);
    let b = StatRecord::new();
    let pick = selector("broken_tackles");

    let rows = add_custom_metric(&pick, &[], &a, &b);
    let rows = add_custom_metric(&pick, &rows, &a, &b);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].field, "broken_tackles");
    assert_eq!(rows[0].value_a, 38.0);
    assert_eq!(rows[0].value_b, 0.0);
}

#[test]
fn removing_a_nonexistent_field_is_a_no_op() {
    let a = StatRecord::from([("targets", 80.0)]);
    let rows = add_custom_metric(&selector("targets"), &[], &a, &StatRecord::new());

    let after = remove_custom_metric("nonexistent_field", &rows);
    assert_eq!(after, rows);
}

#[test]
fn remove_then_add_round_trips() {
    let a = StatRecord::from([("targets", 80.0), ("drops", 4.0)]);
    let b = StatRecord::from([("targets", 71.0)]);

    let rows = add_custom_metric(&selector("targets"), &[], &a, &b);
    let rows = add_custom_metric(&selector("drops"), &rows, &a, &b);
    assert_eq!(rows.len(), 2);

    let rows = remove_custom_metric("targets", &rows);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].field, "drops");

    let rows = add_custom_metric(&selector("targets"), &rows, &a, &b);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].field, "targets");
    assert_eq!(rows[1].value_b, 71.0);
}
