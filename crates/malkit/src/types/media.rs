//! Types shared by anime and manga.

use serde::{Deserialize, Serialize};

use crate::types::{Anime, Manga, StartSeason};

/// Cover image URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

/// Alternative titles for a work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeTitles {
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// English title.
    #[serde(default)]
    pub en: Option<String>,
    /// Japanese title.
    #[serde(default)]
    pub ja: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// A related anime and how it relates to the parent work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedAnime {
    pub node: Anime,
    /// e.g. `sequel`, `prequel`, `side_story`.
    pub relation_type: String,
    #[serde(default)]
    pub relation_type_formatted: Option<String>,
}

/// A related manga and how it relates to the parent work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedManga {
    pub node: Manga,
    pub relation_type: String,
    #[serde(default)]
    pub relation_type_formatted: Option<String>,
}

/// A user recommendation aggregated across the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation<T> {
    pub node: T,
    #[serde(default)]
    pub num_recommendations: u32,
}

/// Links to neighbouring pages of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
}

impl Paging {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub paging: Paging,
}

/// The `{"node": ...}` wrapper used by most listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<T> {
    pub node: T,
}

/// A ranking position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    pub rank: u32,
    #[serde(default)]
    pub previous_rank: Option<u32>,
}

/// An entry in a ranking listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranked<T> {
    pub node: T,
    pub ranking: Ranking,
}

/// A page of seasonal anime, tagged with the season it was requested for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seasonal<T> {
    pub data: Vec<Node<T>>,
    #[serde(default)]
    pub paging: Paging,
    #[serde(default)]
    pub season: Option<StartSeason>,
}
