use gridiron_terminal::grade::{format_percentile, ROUND_LADDER, STANDARD_LADDER};

const ALL_GRADES: &[&str] = &[
    "#1", "A+", "A", "A-", "B+", "B", "B-", "C+", "C", "C-", "D+", "D", "D-", "F",
];

#[test]
fn every_percentile_maps_to_exactly_one_grade() {
    // Walk [0, 100] in small steps; every value must land in the fixed set.
    for i in 0..=10_000 {
        let pct = i as f64 / 100.0;
        let grade = STANDARD_LADDER.to_grade(Some(pct));
        assert!(
            ALL_GRADES.contains(&grade),
            "percentile {pct} produced unknown grade {grade}"
        );
    }
}

#[test]
fn band_boundaries_are_inclusive_on_the_lower_edge() {
    assert_eq!(STANDARD_LADDER.to_grade(Some(87.916667)), "A");
    assert_eq!(STANDARD_LADDER.to_grade(Some(87.916666)), "A-");
    assert_eq!(STANDARD_LADDER.to_grade(Some(95.0)), "A+");
    assert_eq!(STANDARD_LADDER.to_grade(Some(94.999999)), "A");
    assert_eq!(STANDARD_LADDER.to_grade(Some(52.5)), "C+");
    assert_eq!(STANDARD_LADDER.to_grade(Some(17.08333333)), "D-");
    assert_eq!(STANDARD_LADDER.to_grade(Some(17.083333)), "F");
}

#[test]
fn top_rank_sentinel_gets_number_one() {
    assert_eq!(STANDARD_LADDER.to_grade(Some(100.0)), "#1");
    assert_eq!(STANDARD_LADDER.to_grade(Some(99.9)), "A+");
}

#[test]
fn floor_is_f() {
    assert_eq!(STANDARD_LADDER.to_grade(Some(0.0)), "F");
    assert_eq!(STANDARD_LADDER.to_grade(Some(16.9)), "F");
}

#[test]
fn missing_or_malformed_input_is_not_available() {
    assert_eq!(STANDARD_LADDER.to_grade(None), "N/A");
    assert_eq!(STANDARD_LADDER.to_grade(Some(f64::NAN)), "N/A");
    assert_eq!(ROUND_LADDER.to_grade(None), "N/A");
}

#[test]
fn round_ladder_uses_five_point_bands() {
    assert_eq!(ROUND_LADDER.to_grade(Some(95.0)), "A+");
    assert_eq!(ROUND_LADDER.to_grade(Some(94.9)), "A");
    assert_eq!(ROUND_LADDER.to_grade(Some(90.0)), "A");
    assert_eq!(ROUND_LADDER.to_grade(Some(62.0)), "C");
    assert_eq!(ROUND_LADDER.to_grade(Some(40.0)), "D-");
    assert_eq!(ROUND_LADDER.to_grade(Some(39.9)), "F");
    // No "#1" band on the round curve.
    assert_eq!(ROUND_LADDER.to_grade(Some(100.0)), "A+");
}

#[test]
fn the_two_curves_disagree_where_expected() {
    // 92 is an "A" on the standard curve but also "A" on the round curve;
    // 88.5 splits them.
    assert_eq!(STANDARD_LADDER.to_grade(Some(88.5)), "A");
    assert_eq!(ROUND_LADDER.to_grade(Some(88.5)), "A-");
}

#[test]
fn percentile_formatting() {
    assert_eq!(format_percentile(Some(92.0)), "92.0%");
    assert_eq!(format_percentile(Some(7.25)), "7.2%");
    assert_eq!(format_percentile(None), "-");
    assert_eq!(format_percentile(Some(f64::NAN)), "-");
}
