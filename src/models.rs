//! Data model for test result submissions

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Comparison outcome of a single screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Actual image matched the baseline
    Passed,
    /// Actual image differed from the baseline
    Failed,
    /// No verdict yet, e.g. the first run of a new screen
    Pending,
}

impl Status {
    /// Convert from the wire string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "passed" => Some(Self::Passed),
            "failed" => Some(Self::Failed),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }

    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Pending => "pending",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Pending
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single screen comparison result referencing image files on the local
/// filesystem. The files are read and embedded when the result is submitted.
#[derive(Debug, Clone)]
pub struct ScreenshotResult {
    /// Name of the screen under test
    pub screen_name: String,

    /// Path to the freshly captured image
    pub actual_image_path: PathBuf,

    /// Path to the baseline image this run was compared against
    pub baseline_image_path: Option<PathBuf>,

    /// Path to the rendered difference image
    pub diff_image_path: Option<PathBuf>,

    /// Pixel difference between actual and baseline, in percent
    pub difference_percentage: Option<f64>,

    /// Comparison outcome, `pending` when not set
    pub status: Status,
}

impl ScreenshotResult {
    /// Creates a result with only the required fields set
    pub fn new(screen_name: impl Into<String>, actual_image_path: impl Into<PathBuf>) -> Self {
        Self {
            screen_name: screen_name.into(),
            actual_image_path: actual_image_path.into(),
            baseline_image_path: None,
            diff_image_path: None,
            difference_percentage: None,
            status: Status::default(),
        }
    }

    /// Sets the baseline image path
    pub fn with_baseline_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.baseline_image_path = Some(path.into());
        self
    }

    /// Sets the diff image path
    pub fn with_diff_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.diff_image_path = Some(path.into());
        self
    }

    /// Sets the pixel difference percentage
    pub fn with_difference_percentage(mut self, percentage: f64) -> Self {
        self.difference_percentage = Some(percentage);
        self
    }

    /// Sets the comparison outcome
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

/// A single screen comparison result referencing images already hosted
/// elsewhere. Sent to the service as-is; no local files are read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotUrlResult {
    /// Name of the screen under test
    pub screen_name: String,

    /// URL of the freshly captured image
    pub actual_image_url: String,

    /// URL of the baseline image this run was compared against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_image_url: Option<String>,

    /// URL of the rendered difference image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_image_url: Option<String>,

    /// Pixel difference between actual and baseline, in percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difference_percentage: Option<f64>,

    /// Comparison outcome, `pending` when not set
    #[serde(default)]
    pub status: Status,
}

impl ScreenshotUrlResult {
    /// Creates a result with only the required fields set
    pub fn new(screen_name: impl Into<String>, actual_image_url: impl Into<String>) -> Self {
        Self {
            screen_name: screen_name.into(),
            actual_image_url: actual_image_url.into(),
            baseline_image_url: None,
            diff_image_url: None,
            difference_percentage: None,
            status: Status::default(),
        }
    }

    /// Sets the baseline image URL
    pub fn with_baseline_image(mut self, url: impl Into<String>) -> Self {
        self.baseline_image_url = Some(url.into());
        self
    }

    /// Sets the diff image URL
    pub fn with_diff_image(mut self, url: impl Into<String>) -> Self {
        self.diff_image_url = Some(url.into());
        self
    }

    /// Sets the pixel difference percentage
    pub fn with_difference_percentage(mut self, percentage: f64) -> Self {
        self.difference_percentage = Some(percentage);
        self
    }

    /// Sets the comparison outcome
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

/// Wire form of a screenshot result with image bytes embedded as base64
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedScreenshot {
    /// Name of the screen under test
    pub screen_name: String,

    /// Base64-encoded bytes of the actual image
    pub actual_image: String,

    /// Comparison outcome
    pub status: Status,

    /// Base64-encoded bytes of the baseline image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_image: Option<String>,

    /// Base64-encoded bytes of the diff image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_image: Option<String>,

    /// Pixel difference between actual and baseline, in percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difference_percentage: Option<f64>,
}

/// Top-level submission body shared by both intake endpoints
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload<S> {
    /// Application or project the results belong to
    pub application_name: String,

    /// Per-screen results, embedded or by URL
    pub screenshots: Vec<S>,

    /// Description of the application, omitted when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_description: Option<String>,

    /// Run metadata such as branch or commit, omitted when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl<S> SubmissionPayload<S> {
    /// Assembles a submission body. An empty description or an empty metadata
    /// map is dropped so the keys never appear on the wire.
    pub fn new(
        application_name: impl Into<String>,
        screenshots: Vec<S>,
        application_description: Option<&str>,
        metadata: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            application_name: application_name.into(),
            screenshots,
            application_description: application_description
                .filter(|d| !d.is_empty())
                .map(str::to_owned),
            metadata: metadata.filter(|m| !m.is_empty()),
        }
    }
}

/// JSON document returned by the service after a successful submission.
///
/// The service currently answers with `testRunId` and `applicationId` plus a
/// human-readable `message`; accessors cover the stable fields and the raw
/// document stays reachable for anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionResult(Value);

impl SubmissionResult {
    /// Identifier of the test run created by this submission
    pub fn test_run_id(&self) -> Option<&str> {
        self.0.get("testRunId").and_then(Value::as_str)
    }

    /// Identifier of the application the run was filed under
    pub fn application_id(&self) -> Option<&str> {
        self.0.get("applicationId").and_then(Value::as_str)
    }

    /// Borrows the raw response document
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the result, returning the raw response document
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for SubmissionResult {
    fn from(value: Value) -> Self {
        SubmissionResult(value)
    }
}
