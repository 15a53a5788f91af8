use anyhow::Result;
use pixel_buddy_client::{PixelBuddyClient, ScreenshotUrlResult, Status};
use serde_json::{json, Map};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (optional)
    tracing_subscriber::fmt::init();

    let client = PixelBuddyClient::new()?;

    // Images already live on a CDN, so submit references instead of bytes
    let screenshots = vec![
        ScreenshotUrlResult::new("login", "https://cdn.example.com/runs/42/login.png")
            .with_baseline_image("https://cdn.example.com/baselines/login.png")
            .with_difference_percentage(0.4)
            .with_status(Status::Passed),
        ScreenshotUrlResult::new("checkout", "https://cdn.example.com/runs/42/checkout.png")
            .with_baseline_image("https://cdn.example.com/baselines/checkout.png")
            .with_diff_image("https://cdn.example.com/runs/42/checkout_diff.png")
            .with_difference_percentage(7.3)
            .with_status(Status::Failed),
    ];

    let mut metadata = Map::new();
    metadata.insert("branch".to_string(), json!("release/2.4"));
    metadata.insert("ci_run".to_string(), json!(42));

    let result = client
        .submit_test_results_by_url("Storefront", &screenshots, None, Some(metadata))
        .await?;

    println!("Submitted: {}", result.as_value());
    if let Some(run_id) = result.test_run_id() {
        println!("Test run created: {}", run_id);
    }

    Ok(())
}
