//! Client for submitting visual regression test results

use std::fs;
use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, error, info, instrument, trace};

use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::models::{
    EncodedScreenshot, ScreenshotResult, ScreenshotUrlResult, SubmissionPayload, SubmissionResult,
};

/// Client for submitting visual regression test results to Pixel Buddy.
///
/// Wraps a reusable HTTP connection pool; create one client and share it
/// across submissions. Cloning is cheap and clones share the pool.
#[derive(Debug, Clone)]
pub struct PixelBuddyClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl PixelBuddyClient {
    /// Creates a client targeting the default endpoints
    pub fn new() -> Result<Self, ClientError> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with the given configuration
    ///
    /// # Arguments
    /// * `config` - Endpoints, User-Agent and timeout settings
    ///
    /// # Returns
    /// * `Result<Self, ClientError>` - A ready client, or an error if the
    ///   underlying HTTP client could not be built
    pub fn with_config(config: ClientConfig) -> Result<Self, ClientError> {
        debug!("Initializing HTTP client with user agent: {}", config.user_agent);
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let http = match builder.build() {
            Ok(client) => client,
            Err(e) => {
                error!("Failed to build HTTP client: {}", e);
                return Err(ClientError::Network(e));
            }
        };

        Ok(Self { config, http })
    }

    /// Returns the active configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Reads an image file and encodes its bytes as standard base64
    ///
    /// # Arguments
    /// * `path` - Path to the image file
    ///
    /// # Returns
    /// * `Result<String, ClientError>` - Encoded image data, or a file access
    ///   error naming the path that failed
    pub fn encode_image(path: impl AsRef<Path>) -> Result<String, ClientError> {
        let path = path.as_ref();
        trace!("Encoding image file: {}", path.display());

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Failed to read image file {}: {}", path.display(), e);
                return Err(ClientError::FileAccess {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        Ok(BASE64.encode(bytes))
    }

    /// Submits test results, embedding each referenced image file as base64.
    ///
    /// Every descriptor is validated and every image file is read and encoded
    /// before the request is sent, so a bad descriptor or an unreadable file
    /// never produces a partial submission. The whole batch travels in a
    /// single POST.
    ///
    /// # Arguments
    /// * `application_name` - Application the results belong to
    /// * `screenshots` - Per-screen comparison results with local image paths
    /// * `application_description` - Optional description, dropped when empty
    /// * `metadata` - Optional run metadata, dropped when empty
    ///
    /// # Returns
    /// * `Result<SubmissionResult, ClientError>` - Parsed response JSON, or
    ///   the first error encountered
    #[instrument(level = "debug", skip_all, fields(application = %application_name, count = screenshots.len()))]
    pub async fn submit_test_results(
        &self,
        application_name: &str,
        screenshots: &[ScreenshotResult],
        application_description: Option<&str>,
        metadata: Option<Map<String, Value>>,
    ) -> Result<SubmissionResult, ClientError> {
        validate_screenshots(screenshots)?;
        let encoded = encode_screenshots(screenshots)?;

        let payload =
            SubmissionPayload::new(application_name, encoded, application_description, metadata);
        self.post_payload(&self.config.api_url, &payload).await
    }

    /// Submits test results that reference already-hosted images by URL.
    ///
    /// No local files are read; descriptors are validated and sent as-is in a
    /// single POST to the by-URL intake endpoint.
    ///
    /// # Arguments
    /// * `application_name` - Application the results belong to
    /// * `screenshots` - Per-screen comparison results with image URLs
    /// * `application_description` - Optional description, dropped when empty
    /// * `metadata` - Optional run metadata, dropped when empty
    ///
    /// # Returns
    /// * `Result<SubmissionResult, ClientError>` - Parsed response JSON, or
    ///   the first error encountered
    #[instrument(level = "debug", skip_all, fields(application = %application_name, count = screenshots.len()))]
    pub async fn submit_test_results_by_url(
        &self,
        application_name: &str,
        screenshots: &[ScreenshotUrlResult],
        application_description: Option<&str>,
        metadata: Option<Map<String, Value>>,
    ) -> Result<SubmissionResult, ClientError> {
        validate_url_screenshots(screenshots)?;

        let payload = SubmissionPayload::new(
            application_name,
            screenshots.to_vec(),
            application_description,
            metadata,
        );
        self.post_payload(&self.config.url_api_url, &payload).await
    }

    /// Sends an assembled payload and parses the JSON response
    async fn post_payload<S: Serialize>(
        &self,
        api_url: &str,
        payload: &SubmissionPayload<S>,
    ) -> Result<SubmissionResult, ClientError> {
        info!("Submitting {} screenshot(s) to {}", payload.screenshots.len(), api_url);

        let response = match self.http.post(api_url).json(payload).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Failed to send submission to {}: {}", api_url, e);
                return Err(ClientError::Network(e));
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to read response body from {}: {}", api_url, e);
                return Err(ClientError::Network(e));
            }
        };

        if !status.is_success() {
            error!("Server rejected submission with HTTP {}: {}", status, body);
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        match serde_json::from_str::<Value>(&body) {
            Ok(value) => {
                info!("Submission accepted with HTTP {}", status);
                Ok(SubmissionResult::from(value))
            }
            Err(e) => {
                error!("Response body is not valid JSON: {}", e);
                Err(ClientError::ResponseParse { source: e, body })
            }
        }
    }
}

/// Checks that every descriptor carries a screen name and an actual image
/// path. Runs before any file is opened.
fn validate_screenshots(screenshots: &[ScreenshotResult]) -> Result<(), ClientError> {
    for (index, screenshot) in screenshots.iter().enumerate() {
        if screenshot.screen_name.is_empty() {
            return Err(ClientError::MissingField {
                index,
                field: "screenName",
            });
        }
        if screenshot.actual_image_path.as_os_str().is_empty() {
            return Err(ClientError::MissingField {
                index,
                field: "actualImagePath",
            });
        }
    }
    Ok(())
}

/// Checks that every descriptor carries a screen name and an actual image URL
fn validate_url_screenshots(screenshots: &[ScreenshotUrlResult]) -> Result<(), ClientError> {
    for (index, screenshot) in screenshots.iter().enumerate() {
        if screenshot.screen_name.is_empty() {
            return Err(ClientError::MissingField {
                index,
                field: "screenName",
            });
        }
        if screenshot.actual_image_url.is_empty() {
            return Err(ClientError::MissingField {
                index,
                field: "actualImageUrl",
            });
        }
    }
    Ok(())
}

/// Encodes the image files of every descriptor into wire form. Fails on the
/// first unreadable file, before anything is sent.
fn encode_screenshots(
    screenshots: &[ScreenshotResult],
) -> Result<Vec<EncodedScreenshot>, ClientError> {
    let mut encoded = Vec::with_capacity(screenshots.len());

    for screenshot in screenshots {
        trace!("Encoding images for screen '{}'", screenshot.screen_name);
        let actual_image = PixelBuddyClient::encode_image(&screenshot.actual_image_path)?;

        let baseline_image = match &screenshot.baseline_image_path {
            Some(path) => Some(PixelBuddyClient::encode_image(path)?),
            None => None,
        };
        let diff_image = match &screenshot.diff_image_path {
            Some(path) => Some(PixelBuddyClient::encode_image(path)?),
            None => None,
        };

        encoded.push(EncodedScreenshot {
            screen_name: screenshot.screen_name.clone(),
            actual_image,
            status: screenshot.status,
            baseline_image,
            diff_image,
            difference_percentage: screenshot.difference_percentage,
        });
    }

    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_image(contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("pixel-buddy-{}.png", uuid::Uuid::new_v4()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_encode_image_matches_standard_base64() {
        let path = temp_image(b"hello");
        let encoded = PixelBuddyClient::encode_image(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(encoded, "aGVsbG8=");
    }

    #[test]
    fn test_encode_image_round_trips_binary_data() {
        // PNG magic followed by bytes that are not valid UTF-8
        let mut contents = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        contents.extend((0..=255u8).cycle().take(1024));

        let path = temp_image(&contents);
        let encoded = PixelBuddyClient::encode_image(&path).unwrap();
        fs::remove_file(&path).unwrap();

        // Standard engine emits one unwrapped line
        assert!(!encoded.contains('\n'));
        assert_eq!(BASE64.decode(encoded.as_bytes()).unwrap(), contents);
    }

    #[test]
    fn test_encode_image_missing_file() {
        let path =
            std::env::temp_dir().join(format!("pixel-buddy-missing-{}.png", uuid::Uuid::new_v4()));

        let err = PixelBuddyClient::encode_image(&path).unwrap_err();
        match err {
            ClientError::FileAccess { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_rejects_empty_screen_name() {
        let client = PixelBuddyClient::new().unwrap();
        let screenshots = vec![ScreenshotResult::new("", "shots/login.png")];

        let err = client
            .submit_test_results("App", &screenshots, None, None)
            .await
            .unwrap_err();
        match err {
            ClientError::MissingField { index, field } => {
                assert_eq!(index, 0);
                assert_eq!(field, "screenName");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_rejects_empty_actual_image_path() {
        let client = PixelBuddyClient::new().unwrap();
        let screenshots = vec![
            ScreenshotResult::new("login", "shots/login.png"),
            ScreenshotResult::new("dashboard", ""),
        ];

        let err = client
            .submit_test_results("App", &screenshots, None, None)
            .await
            .unwrap_err();
        match err {
            ClientError::MissingField { index, field } => {
                assert_eq!(index, 1);
                assert_eq!(field, "actualImagePath");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_by_url_rejects_empty_url() {
        let client = PixelBuddyClient::new().unwrap();
        let screenshots = vec![ScreenshotUrlResult::new("login", "")];

        let err = client
            .submit_test_results_by_url("App", &screenshots, None, None)
            .await
            .unwrap_err();
        match err {
            ClientError::MissingField { index, field } => {
                assert_eq!(index, 0);
                assert_eq!(field, "actualImageUrl");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
