//! The persisted leaderboard record.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::GameKind;

/// Date stamp layout used in the stored records (`DD/MM/YY`).
pub const DATE_FORMAT: &str = "%d/%m/%y";

/// One finished session on the leaderboard.
///
/// Field names match the stored JSON exactly; `level` is only written for
/// leveled games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub game: GameKind,
    pub points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    pub date: String,
}

impl LeaderboardEntry {
    pub fn new(
        name: impl Into<String>,
        game: GameKind,
        points: u32,
        level: Option<u32>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            game,
            points,
            level,
            date: date.into(),
        }
    }

    /// Entry stamped with today's local date.
    pub fn dated_today(name: impl Into<String>, game: GameKind, points: u32, level: Option<u32>) -> Self {
        Self::new(name, game, points, level, today())
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn today() -> String {
    format_date(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_are_day_month_short_year() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_date(date), "07/03/24");
    }

    #[test]
    fn level_is_omitted_when_absent() {
        let entry = LeaderboardEntry::new("Noa", GameKind::Math, 12, None, "01/02/24");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Noa","game":"math","points":12,"date":"01/02/24"}"#
        );

        let leveled = LeaderboardEntry::new("Ari", GameKind::Translation, 21, Some(3), "01/02/24");
        let json = serde_json::to_string(&leveled).unwrap();
        assert!(json.contains(r#""game":"english-translation""#));
        assert!(json.contains(r#""level":3"#));
    }

    #[test]
    fn stored_records_parse() {
        let raw = r#"{"name":"Dana","game":"english-letters","points":4,"date":"31/12/23"}"#;
        let entry: LeaderboardEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.game, GameKind::Letters);
        assert_eq!(entry.level, None);
    }

    #[test]
    fn today_has_the_stored_shape() {
        let d = today();
        assert_eq!(d.len(), 8);
        assert_eq!(&d[2..3], "/");
        assert_eq!(&d[5..6], "/");
    }
}
