use anyhow::Result;
use pixel_buddy_client::{PixelBuddyClient, ScreenshotResult, Status};
use serde_json::{json, Map};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (optional)
    tracing_subscriber::fmt::init();

    let client = PixelBuddyClient::new()?;

    // Single screenshot without a baseline, e.g. the first run of a new screen
    let screenshots = vec![
        ScreenshotResult::new("login", "screenshots/login_actual.png").with_status(Status::Passed),
    ];

    let mut metadata = Map::new();
    metadata.insert("branch".to_string(), json!("main"));
    metadata.insert("commit".to_string(), json!("abc123"));

    let result = client
        .submit_test_results("Test App", &screenshots, None, Some(metadata))
        .await?;
    println!("Submitted: {}", result.as_value());

    // Full batch with baselines, diffs and difference percentages
    let screenshots = vec![
        ScreenshotResult::new("login", "screenshots/login_actual.png")
            .with_baseline_image("screenshots/login_baseline.png")
            .with_diff_image("screenshots/login_diff.png")
            .with_difference_percentage(1.2)
            .with_status(Status::Passed),
        ScreenshotResult::new("dashboard", "screenshots/dashboard_actual.png")
            .with_baseline_image("screenshots/dashboard_baseline.png")
            .with_diff_image("screenshots/dashboard_diff.png")
            .with_difference_percentage(5.8)
            .with_status(Status::Failed),
    ];

    let mut metadata = Map::new();
    metadata.insert("branch".to_string(), json!("feature/new-ui"));
    metadata.insert("commit".to_string(), json!("def456"));
    metadata.insert("environment".to_string(), json!("staging"));

    let result = client
        .submit_test_results(
            "Production App",
            &screenshots,
            Some("E-commerce application"),
            Some(metadata),
        )
        .await?;

    println!("Submitted: {}", result.as_value());
    if let Some(run_id) = result.test_run_id() {
        println!("Test run created: {}", run_id);
    }

    Ok(())
}
