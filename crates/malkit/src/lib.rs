//! An async Rust client for the MyAnimeList v2 API.
//!
//! The crate covers the OAuth2 PKCE authorization flow, the anime, manga,
//! user-list and forum endpoints, and typed views of their responses.
//!
//! # Quick Start
//!
//! ```no_run
//! use malkit::MalClient;
//!
//! # async fn example() -> malkit::Result<()> {
//! let client = MalClient::builder()
//!     .client_id("my-client-id")
//!     .client_secret("my-client-secret")
//!     .build()?;
//!
//! // 1. Send the user to the authorization page
//! let request = client.auth().generate_auth_url()?;
//! println!("Visit: {}", request.url);
//!
//! // 2. Exchange the code from the redirect for tokens
//! # let code = String::new();
//! let tokens = client.auth().exchange(&code, &request.code_verifier).await?;
//!
//! // 3. Call the API on the user's behalf
//! let user = client.with_access_token(tokens.access_token);
//! let results = user.anime().search("frieren", 5, 0).await?;
//! for entry in results.data {
//!     println!("{}", entry.node.title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Action Groups
//!
//! - [`MalClient::anime()`] - Search, details, rankings, seasons, suggestions, list updates
//! - [`MalClient::manga()`] - Search, details, rankings, list updates
//! - [`MalClient::users()`] - Profile and anime/manga lists
//! - [`MalClient::forum()`] - Boards, topics, and posts
//! - [`MalClient::auth()`] - Authorization URL, code exchange, token refresh
//!
//! # Raw Routes
//!
//! Anything not covered by an action group can be sent as a [`Route`]:
//!
//! ```no_run
//! use malkit::{MalClient, Route};
//!
//! # async fn example(client: MalClient) -> malkit::Result<()> {
//! let doc = client
//!     .send(Route::get("/anime/5114").param("fields", "id,title,mean"))
//!     .await?;
//! println!("{}", doc["mean"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Errors and Retries
//!
//! Non-2xx responses are classified into [`Error`] variants by status code.
//! Connection resets are retried up to five attempts with a linear backoff;
//! see [`RetryPolicy`].

pub mod actions;
pub mod auth;
pub mod client;
pub mod error;
pub mod fields;
pub mod http;
pub mod route;
pub mod types;

pub use auth::{AuthorizationRequest, Pkce, PkceMethod, TokenPair};
pub use client::{ClientBuilder, MalClient};
pub use error::{ApiError, Error, Result};
pub use fields::{Fields, Resource};
pub use http::RetryPolicy;
pub use route::{ApiVersion, BaseUrls, ContentType, Route};
