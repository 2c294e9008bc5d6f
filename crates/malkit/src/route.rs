//! Route: an immutable description of one API call.
//!
//! A [`Route`] carries the method, path, API version, content type and
//! parameters of a request. The path is kept as a list of segments; values
//! added with [`Route::segment`] are percent-encoded, so a user name can never
//! spill into the query string or climb to another endpoint. It computes the final URL, body, and header set
//! on demand without doing any I/O, so the same route can be inspected,
//! logged, or sent more than once.
//!
//! # Example
//!
//! ```
//! use malkit::route::{BaseUrls, Route};
//!
//! let route = Route::get("/anime")
//!     .param("q", "naruto")
//!     .param_opt("offset", None::<u32>)
//!     .limit(250, 100)
//!     .bearer("secret-token");
//!
//! let url = route.url(&BaseUrls::default()).unwrap();
//! assert_eq!(url.as_str(), "https://api.myanimelist.net/v2/anime?q=naruto&limit=100");
//! ```

use std::fmt;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use url::{Url, form_urlencoded};

use crate::error::{Error, Result};
use crate::fields::{Fields, Resource};

/// Base URL for v1 (OAuth) endpoints.
pub const V1_BASE_URL: &str = "https://myanimelist.net/v1";

/// Base URL for v2 (resource) endpoints.
pub const V2_BASE_URL: &str = "https://api.myanimelist.net/v2";

/// The User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 11.0) \
AppleWebKit/602.1.50 (KHTML, like Gecko) Version/11.0 Safari/602.1.50";

/// Which API host a route targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiVersion {
    /// OAuth endpoints on `myanimelist.net/v1`.
    V1,
    /// Resource endpoints on `api.myanimelist.net/v2`.
    #[default]
    V2,
}

/// The pair of base URLs routes are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrls {
    pub v1: String,
    pub v2: String,
}

impl BaseUrls {
    /// The base URL for the given version, without a trailing slash.
    pub fn for_version(&self, version: ApiVersion) -> &str {
        let base = match version {
            ApiVersion::V1 => &self.v1,
            ApiVersion::V2 => &self.v2,
        };
        base.trim_end_matches('/')
    }
}

impl Default for BaseUrls {
    fn default() -> Self {
        Self {
            v1: V1_BASE_URL.to_string(),
            v2: V2_BASE_URL.to_string(),
        }
    }
}

/// How the route's parameters are transmitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentType {
    /// Parameters go in the query string; responses are JSON.
    #[default]
    Json,
    /// Parameters go in a urlencoded request body.
    Form,
}

impl ContentType {
    /// The `Content-Type` header value.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::Form => "application/x-www-form-urlencoded",
        }
    }
}

/// An immutable description of one HTTP call.
///
/// Builder methods consume and return the route; once it is handed to the
/// client nothing mutates it. Parameters bound to `None` are kept in the route
/// but never encoded. The bearer token is its own field and is only ever
/// emitted as an `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
#[must_use = "a Route does nothing until it is sent"]
pub struct Route {
    method: Method,
    segments: Vec<String>,
    version: ApiVersion,
    content_type: ContentType,
    params: Vec<(String, Option<String>)>,
    bearer: Option<String>,
}

impl Route {
    /// Create a route for the given method and path (relative to the base URL).
    ///
    /// `path` is a fixed template such as `/anime/ranking`; it is split on
    /// `/`. Anything caller-supplied belongs in [`Route::segment`].
    pub fn new(method: Method, path: impl AsRef<str>) -> Self {
        Self {
            method,
            segments: path
                .as_ref()
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            version: ApiVersion::default(),
            content_type: ContentType::default(),
            params: Vec::new(),
            bearer: None,
        }
    }

    pub fn get(path: impl AsRef<str>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl AsRef<str>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl AsRef<str>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl AsRef<str>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append one path segment. The value is percent-encoded when the URL is
    /// built, so `/`, `?` and `#` stay inside the segment.
    pub fn segment(mut self, value: impl ToString) -> Self {
        self.segments.push(value.to_string());
        self
    }

    /// Target a different API version.
    pub fn version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    /// Send parameters as a urlencoded form body instead of a query string.
    pub fn form(mut self) -> Self {
        self.content_type = ContentType::Form;
        self
    }

    /// Bind a parameter. Binding the same name again replaces the value.
    pub fn param(self, name: impl Into<String>, value: impl ToString) -> Self {
        self.param_opt(name, Some(value))
    }

    /// Bind an optional parameter; `None` is dropped before encoding.
    pub fn param_opt<V: ToString>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        let name = name.into();
        let value = value.map(|v| v.to_string());
        match self.params.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.params.push((name, value)),
        }
        self
    }

    /// Bind `limit`, clamped to the endpoint's maximum.
    pub fn limit(self, limit: u32, max: u32) -> Self {
        self.param("limit", limit.min(max))
    }

    /// Bind the `fields` selection for a resource type.
    pub fn fields(self, fields: &Fields, resource: Resource) -> Self {
        let value = fields.resolve(resource);
        self.param_opt("fields", value)
    }

    /// Attach a bearer token.
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Replace the bearer token; `None` clears it.
    pub fn bearer_opt(mut self, token: Option<impl Into<String>>) -> Self {
        self.bearer = token.map(Into::into);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The path relative to the base URL, segments joined unencoded.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    pub fn api_version(&self) -> ApiVersion {
        self.version
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Whether the route will send an `Authorization` header.
    pub fn has_bearer(&self) -> bool {
        self.bearer.is_some()
    }

    /// The non-null parameters, in the order they were first bound.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .filter_map(|(name, value)| value.as_deref().map(|v| (name.as_str(), v)))
    }

    /// Look up a non-null parameter by name.
    pub fn param_value(&self, name: &str) -> Option<&str> {
        self.params().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// The full request URL.
    ///
    /// JSON routes carry their parameters in the query string; form routes
    /// carry them in [`Route::form_body`] and have no query.
    pub fn url(&self, bases: &BaseUrls) -> Result<Url> {
        let mut url = Url::parse(bases.for_version(self.version))?;
        url.path_segments_mut()
            .map_err(|_| Error::Config("base URL cannot take a path".to_string()))?
            .pop_if_empty()
            .extend(&self.segments);

        if self.content_type == ContentType::Json && self.params().next().is_some() {
            url.query_pairs_mut().extend_pairs(self.params());
        }

        Ok(url)
    }

    /// The urlencoded request body, for form routes.
    pub fn form_body(&self) -> Option<String> {
        match self.content_type {
            ContentType::Form => Some(
                form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(self.params())
                    .finish(),
            ),
            ContentType::Json => None,
        }
    }

    /// The request headers: content type, user agent, and the bearer token.
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(self.content_type.as_str()),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));

        if let Some(token) = &self.bearer {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| Error::InvalidHeader("bearer token".to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("segments", &self.segments)
            .field("version", &self.version)
            .field("content_type", &self.content_type)
            .field("params", &self.params)
            .field("bearer", &self.bearer.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
