//! User profile types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A MyAnimeList user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    /// `YYYY-MM-DD`, when the user has made it public.
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub anime_statistics: Option<AnimeStatistics>,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub is_supporter: Option<bool>,
}

impl User {
    /// The birthday as a date, if present and well-formed.
    pub fn birthday_date(&self) -> Option<NaiveDate> {
        self.birthday
            .as_deref()
            .and_then(|b| NaiveDate::parse_from_str(b, "%Y-%m-%d").ok())
    }
}

/// Aggregate statistics over a user's anime list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimeStatistics {
    pub num_items_watching: u32,
    pub num_items_completed: u32,
    pub num_items_on_hold: u32,
    pub num_items_dropped: u32,
    pub num_items_plan_to_watch: u32,
    pub num_items: u32,
    pub num_days_watched: f64,
    pub num_days_watching: f64,
    pub num_days_completed: f64,
    pub num_days_on_hold: f64,
    pub num_days_dropped: f64,
    pub num_days: f64,
    pub num_episodes: u32,
    pub num_times_rewatched: u32,
    pub mean_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_date() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "someone",
            "birthday": "1990-04-12",
            "joined_at": "2012-06-01T11:22:33+00:00"
        }))
        .unwrap();

        assert_eq!(user.birthday_date(), NaiveDate::from_ymd_opt(1990, 4, 12));
        assert!(user.joined_at.is_some());
        assert!(user.anime_statistics.is_none());
    }

    #[test]
    fn test_malformed_birthday() {
        let user: User =
            serde_json::from_value(serde_json::json!({"id": 1, "name": "x", "birthday": "1990"}))
                .unwrap();
        assert_eq!(user.birthday_date(), None);
    }
}
