use std::time::Duration;

/// Default endpoint for submissions with embedded screenshot images.
pub const DEFAULT_API_URL: &str =
    "https://uzzikuinsxattkvphthm.supabase.co/functions/v1/submit-test-results-with-images";

/// Default endpoint for submissions that reference already-hosted images by
/// URL instead of embedding them.
pub const DEFAULT_URL_API_URL: &str =
    "https://uzzikuinsxattkvphthm.supabase.co/functions/v1/submit-test-results";

/// Default User-Agent header sent with every submission.
pub const DEFAULT_USER_AGENT: &str = concat!("pixel-buddy-client/", env!("CARGO_PKG_VERSION"));

/// Configuration for the submission client.
///
/// Endpoints default to the production service; override `api_url` to point
/// the client at a staging deployment or a local mock.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint receiving submissions with base64-embedded images
    pub api_url: String,

    /// Endpoint receiving submissions that reference images by URL
    pub url_api_url: String,

    /// User-Agent header value for outgoing requests
    pub user_agent: String,

    /// Total request timeout; `None` keeps the HTTP client's default
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the endpoint for submissions with embedded images
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Sets the endpoint for submissions that reference images by URL
    pub fn with_url_api_url(mut self, url_api_url: impl Into<String>) -> Self {
        self.url_api_url = url_api_url.into();
        self
    }

    /// Sets the User-Agent header value
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the total request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            url_api_url: DEFAULT_URL_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: None,
        }
    }
}
