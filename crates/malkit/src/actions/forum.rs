//! Forum actions.

use serde::Deserialize;

use crate::client::MalClient;
use crate::error::Result;
use crate::fields::FORUM_LIMIT;
use crate::route::Route;
use crate::types::{ForumCategory, ForumTopic, ForumTopicPage, Page, TopicQuery};

/// Provides access to forum operations.
///
/// Obtained via [`MalClient::forum()`].
#[derive(Debug)]
pub struct ForumActions<'a> {
    pub(crate) client: &'a MalClient,
}

#[derive(Deserialize)]
struct BoardsResponse {
    #[serde(default)]
    categories: Vec<ForumCategory>,
}

impl<'a> ForumActions<'a> {
    /// List forum categories and their boards.
    pub async fn boards(&self) -> Result<Vec<ForumCategory>> {
        let response: BoardsResponse = self.client.send_as(Route::get("/forum/boards")).await?;
        Ok(response.categories)
    }

    /// Get the posts of a topic. `limit` is capped at 100.
    pub async fn topic(&self, topic_id: u64, limit: u32, offset: u32) -> Result<ForumTopicPage> {
        let route = Route::get("/forum/topic")
            .segment(topic_id)
            .limit(limit, FORUM_LIMIT)
            .param("offset", offset);
        self.client.send_as(route).await
    }

    /// List topics matching the query. `limit` is capped at 100.
    pub async fn topics(&self, query: &TopicQuery) -> Result<Page<ForumTopic>> {
        let route = Route::get("/forum/topics")
            .param_opt("board_id", query.board_id)
            .param_opt("subboard_id", query.subboard_id)
            .param_opt("limit", query.limit.map(|l| l.min(FORUM_LIMIT)))
            .param_opt("offset", query.offset)
            .param("sort", query.sort)
            .param_opt("q", query.query.as_deref())
            .param_opt("topic_user_name", query.topic_user_name.as_deref())
            .param_opt("user_name", query.user_name.as_deref());
        self.client.send_as(route).await
    }
}
