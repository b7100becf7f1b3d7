use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::stat_record::StatRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonType {
    Regular,
    Postseason,
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonType::Regular => f.write_str("regular"),
            SeasonType::Postseason => f.write_str("postseason"),
        }
    }
}

impl SeasonType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "regular" => Some(Self::Regular),
            "postseason" => Some(Self::Postseason),
            _ => None,
        }
    }
}

/// One game from the schedule endpoint. `team` is the entity the screen is
/// tracking; it matches either the home or the away side.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub week: u32,
    pub season_type: SeasonType,
    pub start_date: String,
    pub team: String,
    pub home_team: String,
    pub away_team: String,
    pub home_abbrev: String,
    pub away_abbrev: String,
    pub home_id: u64,
    pub away_id: u64,
}

/// A single game's grade payload plus the date it was played, kept so
/// mis-keyed postseason rows can still be recovered by date.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyGrade {
    pub start_date: String,
    pub stats: StatRecord,
}

/// Weekly grade records indexed by composite `"<week>_<seasonType>"` key.
/// Built once per game list; slots for failed fetches hold `None`.
#[derive(Debug, Clone, Default)]
pub struct WeeklyGradeIndex {
    entries: HashMap<String, Option<WeeklyGrade>>,
}

pub fn week_key(week: u32, season_type: SeasonType) -> String {
    format!("{week}_{season_type}")
}

impl WeeklyGradeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, week: u32, season_type: SeasonType, grade: Option<WeeklyGrade>) {
        self.entries.insert(week_key(week, season_type), grade);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the grade record for a game. Exact composite key first; for
    /// postseason games whose key is absent, fall back to scanning for an
    /// entry played on the same date, since the upstream service indexes
    /// some postseason rows under inconsistent week numbers.
    pub fn resolve(&self, game: &GameRecord) -> Option<&WeeklyGrade> {
        let key = week_key(game.week, game.season_type);
        if let Some(entry) = self.entries.get(&key) {
            return entry.as_ref();
        }
        if game.season_type == SeasonType::Postseason {
            return self
                .entries
                .values()
                .flatten()
                .find(|grade| grade.start_date == game.start_date);
        }
        None
    }
}
