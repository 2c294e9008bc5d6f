//! Enumerated query parameter values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Implements `as_str` and `Display` for a fieldless enum of API keywords.
macro_rules! api_keyword {
    ($ty:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        impl $ty {
            /// The value as sent to the API.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Which anime ranking to fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimeRankingType {
    /// Top anime series.
    #[default]
    All,
    /// Top airing anime.
    Airing,
    /// Top upcoming anime.
    Upcoming,
    Tv,
    Ova,
    Movie,
    Special,
    /// Top anime by number of list users.
    #[serde(rename = "bypopularity")]
    ByPopularity,
    /// Top favorited anime.
    Favorite,
}

api_keyword!(AnimeRankingType {
    All => "all",
    Airing => "airing",
    Upcoming => "upcoming",
    Tv => "tv",
    Ova => "ova",
    Movie => "movie",
    Special => "special",
    ByPopularity => "bypopularity",
    Favorite => "favorite",
});

/// Which manga ranking to fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MangaRankingType {
    #[default]
    All,
    Manga,
    Novels,
    Oneshots,
    Doujin,
    Manhwa,
    Manhua,
    #[serde(rename = "bypopularity")]
    ByPopularity,
    Favorite,
}

api_keyword!(MangaRankingType {
    All => "all",
    Manga => "manga",
    Novels => "novels",
    Oneshots => "oneshots",
    Doujin => "doujin",
    Manhwa => "manhwa",
    Manhua => "manhua",
    ByPopularity => "bypopularity",
    Favorite => "favorite",
});

/// A broadcast season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// January to March.
    Winter,
    /// April to June.
    Spring,
    /// July to September.
    Summer,
    /// October to December.
    Fall,
}

api_keyword!(Season {
    Winter => "winter",
    Spring => "spring",
    Summer => "summer",
    Fall => "fall",
});

/// Sort order for seasonal anime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalSort {
    #[default]
    AnimeScore,
    AnimeNumListUsers,
}

api_keyword!(SeasonalSort {
    AnimeScore => "anime_score",
    AnimeNumListUsers => "anime_num_list_users",
});

/// Status of an anime on a user's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimeStatus {
    Watching,
    Completed,
    OnHold,
    Dropped,
    PlanToWatch,
}

api_keyword!(AnimeStatus {
    Watching => "watching",
    Completed => "completed",
    OnHold => "on_hold",
    Dropped => "dropped",
    PlanToWatch => "plan_to_watch",
});

/// Status of a manga on a user's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MangaStatus {
    Reading,
    Completed,
    OnHold,
    Dropped,
    PlanToRead,
}

api_keyword!(MangaStatus {
    Reading => "reading",
    Completed => "completed",
    OnHold => "on_hold",
    Dropped => "dropped",
    PlanToRead => "plan_to_read",
});

/// Sort order for a user's anime or manga list.
///
/// The `Anime*` orders only apply to anime lists and the `Manga*` orders
/// only to manga lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserListSort {
    ListScore,
    ListUpdatedAt,
    AnimeTitle,
    AnimeStartDate,
    MangaTitle,
    MangaStartDate,
}

api_keyword!(UserListSort {
    ListScore => "list_score",
    ListUpdatedAt => "list_updated_at",
    AnimeTitle => "anime_title",
    AnimeStartDate => "anime_start_date",
    MangaTitle => "manga_title",
    MangaStartDate => "manga_start_date",
});

/// Sort order for forum topic listings. Only `recent` is supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicSort {
    #[default]
    Recent,
}

api_keyword!(TopicSort {
    Recent => "recent",
});
