use std::time::Duration;
use tracing::{debug, info};

use crate::error::BaselineError;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Checks that something is answering at the base address before any
/// browser work starts.
///
/// Any HTTP response counts as available, whatever the status code; only
/// a connection-level error is treated as `ServerUnavailable`.
pub async fn check_server(base_url: &str) -> Result<(), BaselineError> {
    debug!("Probing server at {}", base_url);

    let client = reqwest::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()
        .map_err(|source| BaselineError::ServerUnavailable {
            url: base_url.to_string(),
            source,
        })?;

    match client.get(base_url).send().await {
        Ok(response) => {
            info!("Server detected at {} (status {})", base_url, response.status());
            Ok(())
        }
        Err(source) => Err(BaselineError::ServerUnavailable {
            url: base_url.to_string(),
            source,
        }),
    }
}
