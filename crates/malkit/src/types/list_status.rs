//! User list entries and list updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::route::Route;
use crate::types::{Anime, AnimeStatus, Manga, MangaStatus};

/// The user's list entry for an anime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimeListStatus {
    #[serde(default)]
    pub status: Option<AnimeStatus>,
    /// 0 to 10, 0 meaning unscored.
    #[serde(default)]
    pub score: u8,
    #[serde(default, alias = "num_watched_episodes")]
    pub num_episodes_watched: u32,
    #[serde(default)]
    pub is_rewatching: bool,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub finish_date: Option<String>,
    #[serde(default)]
    pub priority: u8,
    #[serde(default)]
    pub num_times_rewatched: u32,
    #[serde(default)]
    pub rewatch_value: u8,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The user's list entry for a manga.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MangaListStatus {
    #[serde(default)]
    pub status: Option<MangaStatus>,
    #[serde(default)]
    pub score: u8,
    #[serde(default)]
    pub num_volumes_read: u32,
    #[serde(default)]
    pub num_chapters_read: u32,
    #[serde(default)]
    pub is_rereading: bool,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub finish_date: Option<String>,
    #[serde(default)]
    pub priority: u8,
    #[serde(default)]
    pub num_times_reread: u32,
    #[serde(default)]
    pub reread_value: u8,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// An entry in a user's anime list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeListEntry {
    pub node: Anime,
    #[serde(default)]
    pub list_status: Option<AnimeListStatus>,
}

/// An entry in a user's manga list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MangaListEntry {
    pub node: Manga,
    #[serde(default)]
    pub list_status: Option<MangaListStatus>,
}

/// Changes to apply to an anime list entry. Unset fields are left untouched.
///
/// # Example
///
/// ```
/// use malkit::types::{AnimeListUpdate, AnimeStatus};
///
/// let update = AnimeListUpdate::new()
///     .status(AnimeStatus::Watching)
///     .num_watched_episodes(3)
///     .score(8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct AnimeListUpdate {
    status: Option<AnimeStatus>,
    is_rewatching: Option<bool>,
    score: Option<u8>,
    num_watched_episodes: Option<u32>,
    priority: Option<u8>,
    num_times_rewatched: Option<u32>,
    rewatch_value: Option<u8>,
    tags: Option<Vec<String>>,
    comments: Option<String>,
}

impl AnimeListUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: AnimeStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_rewatching(mut self, value: bool) -> Self {
        self.is_rewatching = Some(value);
        self
    }

    /// Score from 0 to 10; larger values are clamped.
    pub fn score(mut self, score: u8) -> Self {
        self.score = Some(score.min(10));
        self
    }

    pub fn num_watched_episodes(mut self, episodes: u32) -> Self {
        self.num_watched_episodes = Some(episodes);
        self
    }

    /// Priority from 0 to 2; larger values are clamped.
    pub fn priority(mut self, priority: u8) -> Self {
        self.priority = Some(priority.min(2));
        self
    }

    pub fn num_times_rewatched(mut self, times: u32) -> Self {
        self.num_times_rewatched = Some(times);
        self
    }

    /// Rewatch value from 0 to 5; larger values are clamped.
    pub fn rewatch_value(mut self, value: u8) -> Self {
        self.rewatch_value = Some(value.min(5));
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    pub(crate) fn bind(&self, route: Route) -> Route {
        route
            .param_opt("status", self.status.map(AnimeStatus::as_str))
            .param_opt("is_rewatching", self.is_rewatching)
            .param_opt("score", self.score)
            .param_opt("num_watched_episodes", self.num_watched_episodes)
            .param_opt("priority", self.priority)
            .param_opt("num_times_rewatched", self.num_times_rewatched)
            .param_opt("rewatch_value", self.rewatch_value)
            .param_opt("tags", self.tags.as_ref().map(|t| t.join(",")))
            .param_opt("comments", self.comments.as_deref())
    }
}

/// Changes to apply to a manga list entry. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct MangaListUpdate {
    status: Option<MangaStatus>,
    is_rereading: Option<bool>,
    score: Option<u8>,
    num_volumes_read: Option<u32>,
    num_chapters_read: Option<u32>,
    priority: Option<u8>,
    num_times_reread: Option<u32>,
    reread_value: Option<u8>,
    tags: Option<Vec<String>>,
    comments: Option<String>,
}

impl MangaListUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: MangaStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_rereading(mut self, value: bool) -> Self {
        self.is_rereading = Some(value);
        self
    }

    /// Score from 0 to 10; larger values are clamped.
    pub fn score(mut self, score: u8) -> Self {
        self.score = Some(score.min(10));
        self
    }

    pub fn num_volumes_read(mut self, volumes: u32) -> Self {
        self.num_volumes_read = Some(volumes);
        self
    }

    pub fn num_chapters_read(mut self, chapters: u32) -> Self {
        self.num_chapters_read = Some(chapters);
        self
    }

    /// Priority from 0 to 2; larger values are clamped.
    pub fn priority(mut self, priority: u8) -> Self {
        self.priority = Some(priority.min(2));
        self
    }

    pub fn num_times_reread(mut self, times: u32) -> Self {
        self.num_times_reread = Some(times);
        self
    }

    /// Reread value from 0 to 5; larger values are clamped.
    pub fn reread_value(mut self, value: u8) -> Self {
        self.reread_value = Some(value.min(5));
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    pub(crate) fn bind(&self, route: Route) -> Route {
        route
            .param_opt("status", self.status.map(MangaStatus::as_str))
            .param_opt("is_rereading", self.is_rereading)
            .param_opt("score", self.score)
            .param_opt("num_volumes_read", self.num_volumes_read)
            .param_opt("num_chapters_read", self.num_chapters_read)
            .param_opt("priority", self.priority)
            .param_opt("num_times_reread", self.num_times_reread)
            .param_opt("reread_value", self.reread_value)
            .param_opt("tags", self.tags.as_ref().map(|t| t.join(",")))
            .param_opt("comments", self.comments.as_deref())
    }
}
