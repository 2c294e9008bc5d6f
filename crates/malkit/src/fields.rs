//! Field-selection lists and per-endpoint limits.
//!
//! The v2 API only returns a handful of fields unless the request names the
//! ones it wants via the `fields` query parameter. [`Fields::Default`] asks for
//! the full list appropriate to the resource.

/// Maximum `limit` for anime/manga search.
pub const SEARCH_LIMIT: u32 = 100;
/// Maximum `limit` for suggested anime.
pub const SUGGESTION_LIMIT: u32 = 100;
/// Maximum `limit` for rankings.
pub const RANKING_LIMIT: u32 = 500;
/// Maximum `limit` for seasonal anime.
pub const SEASONAL_LIMIT: u32 = 500;
/// Maximum `limit` for a user's anime or manga list.
pub const USER_LIST_LIMIT: u32 = 1000;
/// Maximum `limit` for forum topic listings and posts.
pub const FORUM_LIMIT: u32 = 100;

const ANIME_FIELDS: &str = "id,title,main_picture,alternative_titles,start_date,end_date,\
synopsis,mean,rank,popularity,num_list_users,num_scoring_users,nsfw,created_at,updated_at,\
media_type,status,genres,my_list_status,num_episodes,start_season,broadcast,source,\
average_episode_duration,rating,pictures,background,related_anime,related_manga,\
recommendations,studios,statistics";

const MANGA_FIELDS: &str = "id,title,main_picture,alternative_titles,start_date,end_date,\
synopsis,mean,rank,popularity,num_list_users,num_scoring_users,nsfw,created_at,updated_at,\
media_type,status,genres,my_list_status,num_volumes,num_chapters,\
authors{first_name,last_name},pictures,background,related_anime,related_manga,\
recommendations,serialization{name}";

const USER_FIELDS: &str =
    "id,name,picture,gender,birthday,location,joined_at,anime_statistics,time_zone,is_supporter";

/// The kind of resource a field list applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Anime,
    Manga,
    User,
}

impl Resource {
    /// The default comma-separated field list for this resource.
    pub fn default_fields(self) -> &'static str {
        match self {
            Resource::Anime => ANIME_FIELDS,
            Resource::Manga => MANGA_FIELDS,
            Resource::User => USER_FIELDS,
        }
    }
}

/// Which fields to request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Fields {
    /// The full default list for the resource.
    #[default]
    Default,
    /// An explicit set of field names.
    Custom(Vec<String>),
    /// Do not send a `fields` parameter at all.
    Omit,
}

impl Fields {
    /// Request exactly the given fields.
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Fields::Custom(names.into_iter().map(Into::into).collect())
    }

    /// Resolve to the `fields` parameter value, or `None` to omit it.
    pub fn resolve(&self, resource: Resource) -> Option<String> {
        match self {
            Fields::Default => Some(resource.default_fields().to_string()),
            Fields::Custom(names) if names.is_empty() => None,
            Fields::Custom(names) => Some(names.join(",")),
            Fields::Omit => None,
        }
    }
}
