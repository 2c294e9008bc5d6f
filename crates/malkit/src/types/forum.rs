//! Forum types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Paging, TopicSort};

/// A top-level forum category and its boards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumCategory {
    pub title: String,
    #[serde(default)]
    pub boards: Vec<ForumBoard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumBoard {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub subboards: Vec<ForumSubboard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumSubboard {
    pub id: u64,
    pub title: String,
}

/// The posts (and poll, if any) of one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumTopicDetail {
    pub title: String,
    #[serde(default)]
    pub posts: Vec<ForumPost>,
    #[serde(default)]
    pub poll: Option<ForumPoll>,
}

/// A page of a topic's posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumTopicPage {
    pub data: ForumTopicDetail,
    #[serde(default)]
    pub paging: Paging,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: u64,
    /// Position of the post within the topic, starting at 1.
    pub number: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: ForumPostAuthor,
    /// BBCode body.
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumPostAuthor {
    pub id: u64,
    pub name: String,
    // the API spells it "forum_avator"
    #[serde(default, rename = "forum_avator", alias = "forum_avatar")]
    pub forum_avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumPoll {
    pub id: u64,
    pub question: String,
    #[serde(default, alias = "close")]
    pub closed: bool,
    #[serde(default)]
    pub options: Vec<ForumPollOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumPollOption {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub votes: u32,
}

/// A topic in a board listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumTopic {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: ForumTopicAuthor,
    #[serde(default)]
    pub number_of_posts: u32,
    #[serde(default)]
    pub last_post_created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_post_created_by: Option<ForumTopicAuthor>,
    #[serde(default)]
    pub is_locked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumTopicAuthor {
    pub id: u64,
    pub name: String,
}

/// Filters for [`ForumActions::topics`](crate::actions::ForumActions::topics).
///
/// At least one of the filters should be set; the API rejects a bare listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct TopicQuery {
    pub(crate) board_id: Option<u64>,
    pub(crate) subboard_id: Option<u64>,
    pub(crate) query: Option<String>,
    pub(crate) topic_user_name: Option<String>,
    pub(crate) user_name: Option<String>,
    pub(crate) sort: TopicSort,
    pub(crate) limit: Option<u32>,
    pub(crate) offset: Option<u32>,
}

impl TopicQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(mut self, id: u64) -> Self {
        self.board_id = Some(id);
        self
    }

    pub fn subboard(mut self, id: u64) -> Self {
        self.subboard_id = Some(id);
        self
    }

    /// Full-text search over topic titles.
    pub fn query(mut self, q: impl Into<String>) -> Self {
        self.query = Some(q.into());
        self
    }

    /// Topics started by this user.
    pub fn topic_user_name(mut self, name: impl Into<String>) -> Self {
        self.topic_user_name = Some(name.into());
        self
    }

    /// Topics this user has posted in.
    pub fn user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }

    pub fn sort(mut self, sort: TopicSort) -> Self {
        self.sort = sort;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}
