use tracing::info;

use crate::error::LineupError;

/// Single GET; non-2xx statuses are errors. No retries.
pub async fn fetch_page(url: &str) -> Result<Vec<u8>, LineupError> {
    let client = reqwest::Client::new();

    info!("Fetching lineup page: {}", url);
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    info!("Fetched {} bytes", body.len());
    Ok(body.to_vec())
}
