//! Anime actions.
//!
//! # Example
//!
//! ```no_run
//! use malkit::MalClient;
//! use malkit::types::{AnimeListUpdate, AnimeStatus, Season, SeasonalSort};
//!
//! # async fn example() -> malkit::Result<()> {
//! let client = MalClient::builder()
//!     .client_id("my-client-id")
//!     .access_token("user-access-token")
//!     .build()?;
//!
//! // Search the catalog
//! let results = client.anime().search("naruto", 10, 0).await?;
//! for entry in &results.data {
//!     println!("{} {}", entry.node.id, entry.node.title);
//! }
//!
//! // Browse a season
//! let season = client
//!     .anime()
//!     .seasonal(2024, Season::Spring, SeasonalSort::AnimeScore, 25, 0)
//!     .await?;
//!
//! // Track progress on the user's list
//! let update = AnimeListUpdate::new().status(AnimeStatus::Watching).num_watched_episodes(1);
//! client.anime().update_list_status(20, &update).await?;
//! # Ok(())
//! # }
//! ```

use reqwest::Method;

use crate::client::MalClient;
use crate::error::{Error, Result};
use crate::fields::{
    Fields, RANKING_LIMIT, Resource, SEARCH_LIMIT, SEASONAL_LIMIT, SUGGESTION_LIMIT,
};
use crate::route::Route;
use crate::types::{
    Anime, AnimeListStatus, AnimeListUpdate, AnimeRankingType, Node, Page, Ranked, Season,
    Seasonal, SeasonalSort,
};

/// Provides access to anime operations.
///
/// Obtained via [`MalClient::anime()`].
#[derive(Debug)]
pub struct AnimeActions<'a> {
    pub(crate) client: &'a MalClient,
}

impl<'a> AnimeActions<'a> {
    /// Search anime by title.
    ///
    /// `limit` is capped at 100.
    pub async fn search(&self, query: &str, limit: u32, offset: u32) -> Result<Page<Node<Anime>>> {
        let route = Route::get("/anime")
            .param("q", query)
            .limit(limit, SEARCH_LIMIT)
            .param("offset", offset)
            .fields(&Fields::Default, Resource::Anime);
        self.client.send_as(route).await
    }

    /// Get full details for one anime.
    pub async fn details(&self, anime_id: u64) -> Result<Anime> {
        self.details_with_fields(anime_id, &Fields::Default).await
    }

    /// Get one anime with a custom field selection.
    pub async fn details_with_fields(&self, anime_id: u64, fields: &Fields) -> Result<Anime> {
        let route = Route::get("/anime")
            .segment(anime_id)
            .fields(fields, Resource::Anime);
        self.client.send_as(route).await
    }

    /// Get an anime ranking.
    ///
    /// `limit` is capped at 500.
    pub async fn ranking(
        &self,
        ranking_type: AnimeRankingType,
        limit: u32,
        offset: u32,
    ) -> Result<Page<Ranked<Anime>>> {
        let route = Route::get("/anime/ranking")
            .param("ranking_type", ranking_type)
            .limit(limit, RANKING_LIMIT)
            .param("offset", offset)
            .fields(&Fields::Default, Resource::Anime);
        self.client.send_as(route).await
    }

    /// Get the anime of one broadcast season.
    ///
    /// `limit` is capped at 500.
    pub async fn seasonal(
        &self,
        year: u32,
        season: Season,
        sort: SeasonalSort,
        limit: u32,
        offset: u32,
    ) -> Result<Seasonal<Anime>> {
        let route = Route::get("/anime/season")
            .segment(year)
            .segment(season)
            .param("sort", sort)
            .limit(limit, SEASONAL_LIMIT)
            .param("offset", offset)
            .fields(&Fields::Default, Resource::Anime);
        self.client.send_as(route).await
    }

    /// Get anime suggested for the authorized user.
    ///
    /// `limit` is capped at 100. Requires an access token.
    pub async fn suggestions(&self, limit: u32, offset: u32) -> Result<Page<Node<Anime>>> {
        let route = Route::get("/anime/suggestions")
            .limit(limit, SUGGESTION_LIMIT)
            .param("offset", offset)
            .fields(&Fields::Default, Resource::Anime);
        self.client.send_as(route).await
    }

    /// Add an anime to the user's list or change its entry.
    ///
    /// Requires an access token. Returns the entry as stored.
    pub async fn update_list_status(
        &self,
        anime_id: u64,
        update: &AnimeListUpdate,
    ) -> Result<AnimeListStatus> {
        let route = update.bind(list_status_route(Method::PATCH, anime_id).form());
        self.client.send_as(route).await
    }

    /// Remove an anime from the user's list.
    ///
    /// Returns `false` if the anime was not on the list.
    pub async fn delete_list_item(&self, anime_id: u64) -> Result<bool> {
        let route = list_status_route(Method::DELETE, anime_id);
        match self.client.send(route).await {
            Ok(_) => Ok(true),
            Err(Error::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

fn list_status_route(method: Method, anime_id: u64) -> Route {
    Route::new(method, "/anime").segment(anime_id).segment("my_list_status")
}
