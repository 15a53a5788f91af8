//! Client library for submitting visual regression test results to the
//! Pixel Buddy service.
//!
//! Test tooling hands the client a batch of per-screen comparison results.
//! The client reads the referenced image files, embeds them as base64 in a
//! JSON payload, and delivers the whole batch in a single HTTP POST. For
//! images that are already hosted somewhere, a by-URL variant submits
//! references instead of bytes.
//!
//! Descriptors are validated and all files are encoded before anything is
//! sent, so a failure never leaves a half-submitted run on the server. Errors
//! are returned to the caller as-is; there are no retries.
//!
//! The crate emits [`tracing`] events but never installs a subscriber; the
//! embedding application decides whether and how to log.
//!
//! # Example
//!
//! ```no_run
//! use pixel_buddy_client::{PixelBuddyClient, ScreenshotResult, Status};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PixelBuddyClient::new()?;
//!
//!     let screenshots = vec![
//!         ScreenshotResult::new("login", "screenshots/login_actual.png")
//!             .with_baseline_image("screenshots/login_baseline.png")
//!             .with_difference_percentage(1.2)
//!             .with_status(Status::Passed),
//!     ];
//!
//!     let result = client
//!         .submit_test_results("My App", &screenshots, None, None)
//!         .await?;
//!
//!     println!("created test run {:?}", result.test_run_id());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod models;

pub use client::PixelBuddyClient;
pub use config::{ClientConfig, DEFAULT_API_URL, DEFAULT_URL_API_URL};
pub use errors::ClientError;
pub use models::{
    EncodedScreenshot, ScreenshotResult, ScreenshotUrlResult, Status, SubmissionPayload,
    SubmissionResult,
};
