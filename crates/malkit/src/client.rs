//! The MyAnimeList client and builder.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::actions::{AnimeActions, ForumActions, MangaActions, UserActions};
use crate::auth::{AuthActions, PkceMethod};
use crate::error::{Error, Result};
use crate::http::{Executor, RetryPolicy};
use crate::route::{BaseUrls, Route};

/// Default timeout for a single request attempt.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const ENV_CLIENT_ID: &str = "MAL_CLIENT_ID";
const ENV_CLIENT_SECRET: &str = "MAL_CLIENT_SECRET";
const ENV_ACCESS_TOKEN: &str = "MAL_ACCESS_TOKEN";
const ENV_REDIRECT_URI: &str = "MAL_REDIRECT_URI";

/// The main client for the MyAnimeList API.
///
/// Cloning is cheap: clones share one connection pool, which is released
/// when the last clone is dropped.
///
/// # Example
///
/// ```no_run
/// use malkit::MalClient;
/// use malkit::types::AnimeRankingType;
///
/// # async fn example() -> malkit::Result<()> {
/// let client = MalClient::builder()
///     .client_id("my-client-id")
///     .access_token("user-access-token")
///     .build()?;
///
/// let top = client.anime().ranking(AnimeRankingType::All, 10, 0).await?;
/// for entry in top.data {
///     println!("#{} {:?}", entry.ranking.rank, entry.node.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MalClient {
    inner: Arc<Inner>,
    access_token: Option<String>,
}

struct Inner {
    executor: Executor,
    client_id: String,
    client_secret: Option<String>,
    redirect_uri: Option<String>,
    pkce_method: PkceMethod,
}

impl MalClient {
    /// Create a builder for client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// A handle bound to a user's access token, sharing this client's
    /// connection pool and credentials.
    pub fn with_access_token(&self, token: impl Into<String>) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            access_token: Some(token.into()),
        }
    }

    /// Access anime operations.
    pub fn anime(&self) -> AnimeActions<'_> {
        AnimeActions { client: self }
    }

    /// Access manga operations.
    pub fn manga(&self) -> MangaActions<'_> {
        MangaActions { client: self }
    }

    /// Access user and user-list operations.
    pub fn users(&self) -> UserActions<'_> {
        UserActions { client: self }
    }

    /// Access forum operations.
    pub fn forum(&self) -> ForumActions<'_> {
        ForumActions { client: self }
    }

    /// Access the OAuth2 PKCE flow.
    pub fn auth(&self) -> AuthActions<'_> {
        AuthActions { client: self }
    }

    pub fn client_id(&self) -> &str {
        &self.inner.client_id
    }

    /// The access token this handle is bound to, if any.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Check that the bound access token is accepted.
    ///
    /// Issues a small suggestions request; an expired token fails with
    /// [`Error::Unauthorized`].
    pub async fn validate_token(&self) -> Result<()> {
        self.send(Route::get("/anime/suggestions").param("limit", 4))
            .await
            .map(|_| ())
    }

    /// Send an arbitrary route and return the raw JSON document.
    ///
    /// The handle's access token is attached unless the route already
    /// carries its own bearer.
    pub async fn send(&self, route: Route) -> Result<Value> {
        let route = self.authorize(route);
        self.inner.executor.execute(&route).await
    }

    /// Send an arbitrary route and deserialize the response.
    pub async fn send_as<T: DeserializeOwned>(&self, route: Route) -> Result<T> {
        let route = self.authorize(route);
        self.inner.executor.execute_as(&route).await
    }

    fn authorize(&self, route: Route) -> Route {
        if route.has_bearer() {
            route
        } else {
            route.bearer_opt(self.access_token.as_deref())
        }
    }

    pub(crate) fn executor(&self) -> &Executor {
        &self.inner.executor
    }

    pub(crate) fn bases(&self) -> &BaseUrls {
        self.inner.executor.bases()
    }

    pub(crate) fn client_secret(&self) -> Option<&str> {
        self.inner.client_secret.as_deref()
    }

    pub(crate) fn redirect_uri(&self) -> Option<&str> {
        self.inner.redirect_uri.as_deref()
    }

    pub(crate) fn pkce_method(&self) -> PkceMethod {
        self.inner.pkce_method
    }
}

impl fmt::Debug for MalClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MalClient")
            .field("client_id", &self.inner.client_id)
            .field("bases", self.bases())
            .field("authorized", &self.access_token.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for creating a [`MalClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use malkit::{MalClient, RetryPolicy};
///
/// let client = MalClient::builder()
///     .client_id("my-client-id")
///     .client_secret("my-client-secret")
///     .timeout(Duration::from_secs(60))
///     .retry_policy(RetryPolicy::none())
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ClientBuilder {
    client_id: Option<String>,
    client_secret: Option<String>,
    access_token: Option<String>,
    redirect_uri: Option<String>,
    pkce_method: PkceMethod,
    bases: BaseUrls,
    timeout: Duration,
    retry: RetryPolicy,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            access_token: None,
            redirect_uri: None,
            pkce_method: PkceMethod::default(),
            bases: BaseUrls::default(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }

    /// Create a builder pre-populated from `MAL_CLIENT_ID`, `MAL_CLIENT_SECRET`,
    /// `MAL_ACCESS_TOKEN` and `MAL_REDIRECT_URI`.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            client_id: var(ENV_CLIENT_ID),
            client_secret: var(ENV_CLIENT_SECRET),
            access_token: var(ENV_ACCESS_TOKEN),
            redirect_uri: var(ENV_REDIRECT_URI),
            ..Self::new()
        }
    }

    /// Set the application's client id. Required.
    pub fn client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = Some(id.into());
        self
    }

    /// Set the application's client secret.
    ///
    /// Only needed for token exchange and refresh.
    pub fn client_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = Some(secret.into());
        self
    }

    /// Bind the client to a user's access token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the redirect URI registered for the application.
    ///
    /// Only required when more than one URI is registered.
    pub fn redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(uri.into());
        self
    }

    /// Set the PKCE challenge method. Defaults to [`PkceMethod::Plain`].
    pub fn pkce_method(mut self, method: PkceMethod) -> Self {
        self.pkce_method = method;
        self
    }

    /// Override the v1 (OAuth) base URL.
    pub fn v1_url(mut self, url: impl Into<String>) -> Self {
        self.bases.v1 = url.into();
        self
    }

    /// Override the v2 (resource) base URL.
    pub fn v2_url(mut self, url: impl Into<String>) -> Self {
        self.bases.v2 = url.into();
        self
    }

    /// Set the per-attempt request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Set the connection-reset retry policy.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<MalClient> {
        let client_id = self
            .client_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::Config("a client id is required".to_string()))?;

        if self.retry.max_attempts == 0 {
            return Err(Error::Config(
                "retry policy must allow at least one attempt".to_string(),
            ));
        }

        let http_client = Client::builder().timeout(self.timeout).build()?;
        let executor = Executor::new(http_client, self.bases, &client_id, self.retry)?;

        Ok(MalClient {
            inner: Arc::new(Inner {
                executor,
                client_id,
                client_secret: self.client_secret,
                redirect_uri: self.redirect_uri,
                pkce_method: self.pkce_method,
            }),
            access_token: self.access_token,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("client_id", &self.client_id)
            .field("bases", &self.bases)
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_client_id() {
        assert!(matches!(MalClient::builder().build(), Err(Error::Config(_))));
        assert!(matches!(
            MalClient::builder().client_id("").build(),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_build_rejects_zero_attempts() {
        let policy = RetryPolicy {
            max_attempts: 0,
            ..RetryPolicy::default()
        };
        let result = MalClient::builder().client_id("id").retry_policy(policy).build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_with_access_token_shares_pool() {
        let client = MalClient::builder().client_id("id").build().unwrap();
        assert!(client.access_token().is_none());

        let user = client.with_access_token("tok");
        assert_eq!(user.access_token(), Some("tok"));
        assert!(Arc::ptr_eq(&client.inner, &user.inner));
    }

    #[test]
    fn test_authorize_keeps_explicit_bearer() {
        let client = MalClient::builder()
            .client_id("id")
            .access_token("bound")
            .build()
            .unwrap();

        let route = client.authorize(Route::get("/anime").bearer("explicit"));
        assert_eq!(route, Route::get("/anime").bearer("explicit"));

        let route = client.authorize(Route::get("/anime"));
        assert_eq!(route, Route::get("/anime").bearer("bound"));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let client = MalClient::builder()
            .client_id("id")
            .client_secret("hunter2")
            .access_token("tok-secret")
            .build()
            .unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("tok-secret"));
    }
}
