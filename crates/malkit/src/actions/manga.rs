//! Manga actions.

use reqwest::Method;

use crate::client::MalClient;
use crate::error::{Error, Result};
use crate::fields::{Fields, RANKING_LIMIT, Resource, SEARCH_LIMIT};
use crate::route::Route;
use crate::types::{Manga, MangaListStatus, MangaListUpdate, MangaRankingType, Node, Page, Ranked};

/// Provides access to manga operations.
///
/// Obtained via [`MalClient::manga()`].
#[derive(Debug)]
pub struct MangaActions<'a> {
    pub(crate) client: &'a MalClient,
}

impl<'a> MangaActions<'a> {
    /// Search manga by title. `limit` is capped at 100.
    pub async fn search(&self, query: &str, limit: u32, offset: u32) -> Result<Page<Node<Manga>>> {
        let route = Route::get("/manga")
            .param("q", query)
            .limit(limit, SEARCH_LIMIT)
            .param("offset", offset)
            .fields(&Fields::Default, Resource::Manga);
        self.client.send_as(route).await
    }

    /// Get full details for one manga.
    pub async fn details(&self, manga_id: u64) -> Result<Manga> {
        self.details_with_fields(manga_id, &Fields::Default).await
    }

    /// Get one manga with a custom field selection.
    pub async fn details_with_fields(&self, manga_id: u64, fields: &Fields) -> Result<Manga> {
        let route = Route::get("/manga")
            .segment(manga_id)
            .fields(fields, Resource::Manga);
        self.client.send_as(route).await
    }

    /// Get a manga ranking. `limit` is capped at 500.
    pub async fn ranking(
        &self,
        ranking_type: MangaRankingType,
        limit: u32,
        offset: u32,
    ) -> Result<Page<Ranked<Manga>>> {
        let route = Route::get("/manga/ranking")
            .param("ranking_type", ranking_type)
            .limit(limit, RANKING_LIMIT)
            .param("offset", offset)
            .fields(&Fields::Default, Resource::Manga);
        self.client.send_as(route).await
    }

    /// Add a manga to the user's list or change its entry.
    pub async fn update_list_status(
        &self,
        manga_id: u64,
        update: &MangaListUpdate,
    ) -> Result<MangaListStatus> {
        let route = update.bind(list_status_route(Method::PATCH, manga_id).form());
        self.client.send_as(route).await
    }

    /// Remove a manga from the user's list.
    ///
    /// Returns `false` if the manga was not on the list.
    pub async fn delete_list_item(&self, manga_id: u64) -> Result<bool> {
        let route = list_status_route(Method::DELETE, manga_id);
        match self.client.send(route).await {
            Ok(_) => Ok(true),
            Err(Error::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

fn list_status_route(method: Method, manga_id: u64) -> Route {
    Route::new(method, "/manga").segment(manga_id).segment("my_list_status")
}
