//! Manga types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    AlternativeTitles, Genre, MangaListStatus, Picture, Recommendation, RelatedAnime,
    RelatedManga,
};

/// A manga, light novel, or other print work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manga {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub main_picture: Option<Picture>,
    #[serde(default)]
    pub alternative_titles: Option<AlternativeTitles>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
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
    #[serde(default)]
    pub nsfw: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// e.g. `manga`, `novel`, `one_shot`.
    #[serde(default)]
    pub media_type: Option<String>,
    /// e.g. `finished`, `currently_publishing`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub my_list_status: Option<MangaListStatus>,
    /// Zero when unknown.
    #[serde(default)]
    pub num_volumes: Option<u32>,
    #[serde(default)]
    pub num_chapters: Option<u32>,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub pictures: Vec<Picture>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub related_anime: Vec<RelatedAnime>,
    #[serde(default)]
    pub related_manga: Vec<RelatedManga>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation<Manga>>,
    #[serde(default)]
    pub serialization: Vec<Serialization>,
}

/// A person credited on a manga.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub node: AuthorNode,
    /// e.g. `Story & Art`.
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorNode {
    pub id: u64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// A magazine the manga was serialized in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Serialization {
    pub node: SerializationNode,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializationNode {
    pub id: u64,
    pub name: String,
}
