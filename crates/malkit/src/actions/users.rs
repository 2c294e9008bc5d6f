//! User profile and user list actions.

use crate::client::MalClient;
use crate::error::Result;
use crate::fields::{Fields, Resource, USER_LIST_LIMIT};
use crate::route::Route;
use crate::types::{
    AnimeListEntry, AnimeStatus, MangaListEntry, MangaStatus, Page, User, UserListSort,
};

/// Provides access to user operations.
///
/// Obtained via [`MalClient::users()`]. Pass `"@me"` as the user name to
/// address the authorized user.
#[derive(Debug)]
pub struct UserActions<'a> {
    pub(crate) client: &'a MalClient,
}

impl<'a> UserActions<'a> {
    /// Get the authorized user's profile.
    pub async fn me(&self) -> Result<User> {
        let route = Route::get("/users/@me").fields(&Fields::Default, Resource::User);
        self.client.send_as(route).await
    }

    /// Get a user's anime list, optionally filtered by status.
    ///
    /// `limit` is capped at 1000.
    pub async fn anime_list(
        &self,
        user_name: &str,
        status: Option<AnimeStatus>,
        sort: Option<UserListSort>,
        limit: u32,
        offset: u32,
    ) -> Result<Page<AnimeListEntry>> {
        let route = Route::get("/users")
            .segment(user_name)
            .segment("animelist")
            .param_opt("status", status)
            .param_opt("sort", sort)
            .limit(limit, USER_LIST_LIMIT)
            .param("offset", offset)
            .fields(&Fields::only(["list_status"]), Resource::Anime);
        self.client.send_as(route).await
    }

    /// Get a user's manga list, optionally filtered by status.
    ///
    /// `limit` is capped at 1000.
    pub async fn manga_list(
        &self,
        user_name: &str,
        status: Option<MangaStatus>,
        sort: Option<UserListSort>,
        limit: u32,
        offset: u32,
    ) -> Result<Page<MangaListEntry>> {
        let route = Route::get("/users")
            .segment(user_name)
            .segment("mangalist")
            .param_opt("status", status)
            .param_opt("sort", sort)
            .limit(limit, USER_LIST_LIMIT)
            .param("offset", offset)
            .fields(&Fields::only(["list_status"]), Resource::Manga);
        self.client.send_as(route).await
    }
}
