use crate::grade::{GradeLadder, ROUND_LADDER, STANDARD_LADDER};

/// One entry of a static metric table: display label, source field and
/// whether a lower raw value is better (consumed by radial displays only,
/// the merger ignores it).
#[derive(Debug, Clone, Copy)]
pub struct MetricDefinition {
    pub label: &'static str,
    pub field: &'static str,
    pub invert: bool,
}

/// A directional comparison entry: one side's produced stat against the
/// other side's allowed stat, so the two sides pull from different fields.
#[derive(Debug, Clone, Copy)]
pub struct DirectionalMetricDefinition {
    pub label: &'static str,
    pub away_field: &'static str,
    pub home_field: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityClass {
    RunningBack,
    WideReceiver,
    Guard,
    TightEnd,
    TeamOffense,
    TeamDefense,
}

impl EntityClass {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "rb" | "running-back" => Some(Self::RunningBack),
            "wr" | "wide-receiver" => Some(Self::WideReceiver),
            "g" | "guard" => Some(Self::Guard),
            "te" | "tight-end" => Some(Self::TightEnd),
            "offense" | "team-offense" => Some(Self::TeamOffense),
            "defense" | "team-defense" => Some(Self::TeamDefense),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::RunningBack => "Running Back",
            Self::WideReceiver => "Wide Receiver",
            Self::Guard => "Guard",
            Self::TightEnd => "Tight End",
            Self::TeamOffense => "Team Offense",
            Self::TeamDefense => "Team Defense",
        }
    }
}

const RB_BASE: &[MetricDefinition] = &[
    def("Rushing Yards", "rushing_yards"),
    def("Yards Per Carry", "yards_per_carry"),
    def("Rushing TDs", "rushing_touchdowns"),
    def("Broken Tackles", "broken_tackles"),
    def("Yards After Contact", "yards_after_contact"),
    def("Receiving Yards", "receiving_yards"),
    def("Receptions", "receptions"),
    inv("Fumbles", "fumbles"),
];

const RB_GRADES: &[MetricDefinition] = &[
    def("Overall Grade", "grades_offense"),
    def("Run Grade", "grades_run"),
    def("Receiving Grade", "grades_pass_route"),
    def("Pass Block Grade", "grades_pass_block"),
];

const WR_BASE: &[MetricDefinition] = &[
    def("Receiving Yards", "receiving_yards"),
    def("Receptions", "receptions"),
    def("Targets", "targets"),
    def("Receiving TDs", "receiving_touchdowns"),
    def("Yards Per Route Run", "yards_per_route_run"),
    def("Yards After Catch", "yards_after_catch"),
    def("Contested Catches", "contested_catches"),
    inv("Drops", "drops"),
];

const WR_GRADES: &[MetricDefinition] = &[
    def("Overall Grade", "grades_offense"),
    def("Route Grade", "grades_pass_route"),
    def("Hands Grade", "grades_hands_drop"),
    def("Run Block Grade", "grades_run_block"),
];

const GUARD_BASE: &[MetricDefinition] = &[
    def("Snap Counts", "snap_counts_offense"),
    inv("Pressures Allowed", "pressures_allowed"),
    inv("Sacks Allowed", "sacks_allowed"),
    inv("Hurries Allowed", "hurries_allowed"),
    inv("Penalties", "penalties"),
    def("Pass Block Efficiency", "pass_block_efficiency"),
];

const GUARD_GRADES: &[MetricDefinition] = &[
    def("Overall Grade", "grades_offense"),
    def("Pass Block Grade", "grades_pass_block"),
    def("Run Block Grade", "grades_run_block"),
];

const TE_BASE: &[MetricDefinition] = &[
    def("Receiving Yards", "receiving_yards"),
    def("Receptions", "receptions"),
    def("Targets", "targets"),
    def("Receiving TDs", "receiving_touchdowns"),
    def("Yards Per Route Run", "yards_per_route_run"),
    inv("Drops", "drops"),
];

const TE_GRADES: &[MetricDefinition] = &[
    def("Overall Grade", "grades_offense"),
    def("Receiving Grade", "grades_pass_route"),
    def("Run Block Grade", "grades_run_block"),
];

const TEAM_OFFENSE_BASE: &[MetricDefinition] = &[
    def("Points Per Game", "points_per_game"),
    def("Total Yards", "total_yards"),
    def("Yards Per Play", "yards_per_play"),
    def("Rushing Yards", "rushing_yards"),
    def("Passing Yards", "passing_yards"),
    def("Third Down Pct", "third_down_pct"),
    inv("Turnovers", "turnovers"),
];

const TEAM_DEFENSE_BASE: &[MetricDefinition] = &[
    inv("Points Allowed Per Game", "points_allowed_per_game"),
    inv("Yards Allowed", "yards_allowed"),
    inv("Yards Per Play Allowed", "yards_per_play_allowed"),
    def("Sacks", "sacks"),
    def("Interceptions", "interceptions"),
    def("Takeaways", "takeaways"),
];

const TEAM_GRADES: &[MetricDefinition] = &[
    def("Offense Grade", "grades_offense"),
    def("Defense Grade", "grades_defense"),
    def("Special Teams Grade", "grades_special_teams"),
];

/// One side's offensive production against the other side's defensive
/// allowance, keyed by different fields per side.
const MATCHUP_DIRECTIONAL: &[DirectionalMetricDefinition] = &[
    DirectionalMetricDefinition {
        label: "Points",
        away_field: "points_per_game",
        home_field: "points_allowed_per_game",
    },
    DirectionalMetricDefinition {
        label: "Rushing Yards",
        away_field: "rushing_yards",
        home_field: "rushing_yards_allowed",
    },
    DirectionalMetricDefinition {
        label: "Passing Yards",
        away_field: "passing_yards",
        home_field: "passing_yards_allowed",
    },
    DirectionalMetricDefinition {
        label: "Yards Per Play",
        away_field: "yards_per_play",
        home_field: "yards_per_play_allowed",
    },
];

pub fn base_catalog(class: EntityClass) -> &'static [MetricDefinition] {
    match class {
        EntityClass::RunningBack => RB_BASE,
        EntityClass::WideReceiver => WR_BASE,
        EntityClass::Guard => GUARD_BASE,
        EntityClass::TightEnd => TE_BASE,
        EntityClass::TeamOffense => TEAM_OFFENSE_BASE,
        EntityClass::TeamDefense => TEAM_DEFENSE_BASE,
    }
}

pub fn grade_catalog(class: EntityClass) -> &'static [MetricDefinition] {
    match class {
        EntityClass::RunningBack => RB_GRADES,
        EntityClass::WideReceiver => WR_GRADES,
        EntityClass::Guard => GUARD_GRADES,
        EntityClass::TightEnd => TE_GRADES,
        EntityClass::TeamOffense | EntityClass::TeamDefense => TEAM_GRADES,
    }
}

pub fn matchup_catalog() -> &'static [DirectionalMetricDefinition] {
    MATCHUP_DIRECTIONAL
}

/// Tight ends grade on the round 5-point curve; everyone else on the
/// standard curve. The two curves are intentionally kept separate.
pub fn ladder(class: EntityClass) -> &'static GradeLadder {
    match class {
        EntityClass::TightEnd => &ROUND_LADDER,
        _ => &STANDARD_LADDER,
    }
}

const fn def(label: &'static str, field: &'static str) -> MetricDefinition {
    MetricDefinition {
        label,
        field,
        invert: false,
    }
}

const fn inv(label: &'static str, field: &'static str) -> MetricDefinition {
    MetricDefinition {
        label,
        field,
        invert: true,
    }
}
