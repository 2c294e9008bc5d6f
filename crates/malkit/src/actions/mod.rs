//! Action groups for MyAnimeList endpoints.
//!
//! Each group builds the routes for one resource family and hands them to
//! the client. Default field selections and per-endpoint `limit` maxima are
//! applied here.

mod anime;
mod forum;
mod manga;
mod users;

pub use anime::AnimeActions;
pub use forum::ForumActions;
pub use manga::MangaActions;
pub use users::UserActions;
