//! Typed views of MyAnimeList responses.
//!
//! Every view is built by copying named fields out of the JSON document.
//! Fields the API omits (because they were not requested, or are simply
//! unknown) come back as `None` or an empty `Vec`.

mod anime;
mod forum;
mod list_status;
mod manga;
mod media;
mod query;
mod user;

pub use anime::{Anime, Broadcast, StartSeason, Statistics, StatusCounts, Studio};
pub use forum::{
    ForumBoard, ForumCategory, ForumPoll, ForumPollOption, ForumPost, ForumPostAuthor,
    ForumSubboard, ForumTopic, ForumTopicAuthor, ForumTopicDetail, ForumTopicPage, TopicQuery,
};
pub use list_status::{
    AnimeListEntry, AnimeListStatus, AnimeListUpdate, MangaListEntry, MangaListStatus,
    MangaListUpdate,
};
pub use manga::{Author, AuthorNode, Manga, Serialization, SerializationNode};
pub use media::{
    AlternativeTitles, Genre, Node, Page, Paging, Picture, Ranked, Ranking, Recommendation,
    RelatedAnime, RelatedManga, Seasonal,
};
pub use query::{
    AnimeRankingType, AnimeStatus, MangaRankingType, MangaStatus, Season, SeasonalSort,
    TopicSort, UserListSort,
};
pub use user::{AnimeStatistics, User};
