//! OAuth2 authorization-code flow with PKCE.
//!
//! 1. [`AuthActions::generate_auth_url`] creates a fresh code verifier and the
//!    URL to send the user to.
//! 2. The user approves access and MyAnimeList redirects back with a `code`.
//! 3. [`AuthActions::exchange`] trades the code and verifier for a [`TokenPair`].
//!
//! Tokens are returned to the caller and never stored by the client.
//!
//! # Example
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
//! let request = client.auth().generate_auth_url()?;
//! println!("Open {} in a browser", request.url);
//!
//! // ... collect `code` from the redirect ...
//! # let code = String::new();
//! let tokens = client.auth().exchange(&code, &request.code_verifier).await?;
//! let user_client = client.with_access_token(tokens.access_token);
//! # Ok(())
//! # }
//! ```

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;

use crate::client::MalClient;
use crate::error::{Error, Result};
use crate::route::{ApiVersion, Route};

/// Length of generated code verifiers (the RFC 7636 maximum).
const VERIFIER_LENGTH: usize = 128;

/// Length of the random `state` value, when one is requested.
const STATE_LENGTH: usize = 16;

/// How the code challenge is derived from the verifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PkceMethod {
    /// The challenge is the verifier itself. MyAnimeList only supports this.
    #[default]
    Plain,
    /// The challenge is `BASE64URL(SHA256(verifier))`.
    S256,
}

impl PkceMethod {
    /// The `code_challenge_method` parameter value.
    pub fn as_str(self) -> &'static str {
        match self {
            PkceMethod::Plain => "plain",
            PkceMethod::S256 => "S256",
        }
    }
}

/// A code verifier and its matching challenge.
#[derive(Clone, PartialEq, Eq)]
pub struct Pkce {
    pub verifier: String,
    pub challenge: String,
    pub method: PkceMethod,
}

impl Pkce {
    /// Generate a fresh random verifier.
    pub fn generate(method: PkceMethod) -> Self {
        Self::from_verifier(random_string(VERIFIER_LENGTH), method)
    }

    /// Derive the challenge for an existing verifier.
    pub fn from_verifier(verifier: impl Into<String>, method: PkceMethod) -> Self {
        let verifier = verifier.into();
        let challenge = match method {
            PkceMethod::Plain => verifier.clone(),
            PkceMethod::S256 => URL_SAFE_NO_PAD.encode(Sha256::digest(verifier.as_bytes())),
        };
        Self {
            verifier,
            challenge,
            method,
        }
    }
}

impl fmt::Debug for Pkce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pkce")
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

fn random_string(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Everything needed to send a user to the authorization page and later
/// complete the exchange.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    /// Keep this until the redirect comes back; it is required by [`AuthActions::exchange`].
    pub code_verifier: String,
    /// The authorization page URL.
    pub url: String,
    /// The `state` value embedded in the URL, if any.
    pub state: Option<String>,
}

/// Tokens returned by the token endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime of the access token in seconds.
    #[serde(default)]
    pub expires_in: Option<u64>,
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish_non_exhaustive()
    }
}

/// Provides the OAuth2 PKCE flow.
///
/// Obtained via [`MalClient::auth()`].
#[derive(Debug)]
pub struct AuthActions<'a> {
    pub(crate) client: &'a MalClient,
}

impl<'a> AuthActions<'a> {
    /// Build an authorization URL with a fresh code verifier.
    pub fn generate_auth_url(&self) -> Result<AuthorizationRequest> {
        self.auth_url_with(Pkce::generate(self.client.pkce_method()), None)
    }

    /// Like [`generate_auth_url`](Self::generate_auth_url), but also embed a
    /// random `state` value for CSRF protection.
    pub fn generate_auth_url_with_state(&self) -> Result<AuthorizationRequest> {
        self.auth_url_with(
            Pkce::generate(self.client.pkce_method()),
            Some(random_string(STATE_LENGTH)),
        )
    }

    /// Build an authorization URL for a caller-supplied verifier and state.
    pub fn auth_url_with(&self, pkce: Pkce, state: Option<String>) -> Result<AuthorizationRequest> {
        let route = Route::get("/oauth2/authorize")
            .version(ApiVersion::V1)
            .param("response_type", "code")
            .param("client_id", self.client.client_id())
            .param("code_challenge", &pkce.challenge)
            .param("code_challenge_method", pkce.method.as_str())
            .param_opt("state", state.as_deref())
            .param_opt("redirect_uri", self.client.redirect_uri());

        let url = route.url(self.client.bases())?;

        Ok(AuthorizationRequest {
            code_verifier: pkce.verifier,
            url: url.to_string(),
            state,
        })
    }

    /// Exchange an authorization code for an access/refresh token pair.
    ///
    /// Rejections from the token endpoint surface as [`Error::TokenExchange`].
    pub async fn exchange(&self, auth_code: &str, code_verifier: &str) -> Result<TokenPair> {
        let route = self
            .token_route("authorization_code")?
            .param("code", auth_code)
            .param("code_verifier", code_verifier)
            .param_opt("redirect_uri", self.client.redirect_uri());

        let tokens = self.request_tokens(&route).await?;
        info!("Exchanged authorization code for tokens");
        Ok(tokens)
    }

    /// Obtain a new token pair using a refresh token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair> {
        let route = self
            .token_route("refresh_token")?
            .param("refresh_token", refresh_token);

        let tokens = self.request_tokens(&route).await?;
        info!("Refreshed access token");
        Ok(tokens)
    }

    fn token_route(&self, grant_type: &str) -> Result<Route> {
        let secret = self.client.client_secret().ok_or_else(|| {
            Error::Config("a client secret is required for token requests".to_string())
        })?;

        Ok(Route::post("/oauth2/token")
            .version(ApiVersion::V1)
            .form()
            .param("client_id", self.client.client_id())
            .param("client_secret", secret)
            .param("grant_type", grant_type))
    }

    async fn request_tokens(&self, route: &Route) -> Result<TokenPair> {
        self.client
            .executor()
            .execute_as(route)
            .await
            .map_err(Error::into_token_exchange)
    }
}
