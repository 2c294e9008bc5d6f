//! Anime types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    AlternativeTitles, AnimeListStatus, Genre, Picture, Recommendation, RelatedAnime,
    RelatedManga, Season,
};

/// An anime, as returned by search, ranking, and detail endpoints.
///
/// Listing endpoints only populate the fields requested through `fields`;
/// detail-only fields such as `pictures`, `related_anime` and `statistics`
/// are empty there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anime {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub main_picture: Option<Picture>,
    #[serde(default)]
    pub alternative_titles: Option<AlternativeTitles>,
    /// `YYYY`, `YYYY-MM`, or `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
    /// Mean score.
    #[serde(default)]
    pub mean: Option<f64>,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default)]
    pub num_list_users: Option<u32>,
    #[serde(default)]
    pub num_scoring_users: Option<u32>,
    /// `white`, `gray`, or `black`.
    #[serde(default)]
    pub nsfw: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// e.g. `tv`, `movie`, `ova`.
    #[serde(default)]
    pub media_type: Option<String>,
    /// e.g. `finished_airing`, `currently_airing`.
    #[serde(default)]
    pub status: Option<String>,
    /// The authorized user's list entry, when a token was supplied.
    #[serde(default)]
    pub my_list_status: Option<AnimeListStatus>,
    #[serde(default)]
    pub num_episodes: Option<u32>,
    #[serde(default)]
    pub start_season: Option<StartSeason>,
    #[serde(default)]
    pub broadcast: Option<Broadcast>,
    #[serde(default)]
    pub source: Option<String>,
    /// Average episode length in seconds.
    #[serde(default)]
    pub average_episode_duration: Option<u32>,
    /// e.g. `pg_13`, `r`.
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub studios: Vec<Studio>,
    #[serde(default)]
    pub pictures: Vec<Picture>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub related_anime: Vec<RelatedAnime>,
    #[serde(default)]
    pub related_manga: Vec<RelatedManga>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation<Anime>>,
    #[serde(default)]
    pub statistics: Option<Statistics>,
}

/// The season an anime started airing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartSeason {
    pub year: u32,
    pub season: Season,
}

/// Weekly broadcast slot (Japan time).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Broadcast {
    pub day_of_the_week: String,
    #[serde(default)]
    pub start_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Studio {
    pub id: u64,
    pub name: String,
}

/// How many users have the anime on their list, by status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub num_list_users: u32,
    pub status: StatusCounts,
}

/// Counts per list status. The API sends these as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    #[serde(default)]
    pub watching: String,
    #[serde(default)]
    pub completed: String,
    #[serde(default)]
    pub on_hold: String,
    #[serde(default)]
    pub dropped: String,
    #[serde(default)]
    pub plan_to_watch: String,
}
