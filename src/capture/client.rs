use anyhow::{Context, Result};
use fantoccini::{Client, ClientBuilder};
use tracing::{debug, error, trace};

use crate::capture::config;

/// Creates the WebDriver session used for the capture run.
///
/// Sets up a Chrome instance suitable for headless, sandboxless execution
/// in restricted/container environments. The viewport is not fixed here;
/// the runner resizes it per breakpoint.
pub async fn create_client(webdriver_url: &str, headless: bool) -> Result<Client> {
    trace!("Creating new WebDriver client connecting to {}", webdriver_url);
    let mut caps = serde_json::map::Map::new();
    let mut chrome_opts = serde_json::map::Map::new();

    debug!("Configuring Chrome options with headless={}", headless);
    let args = config::chrome_arguments(headless);

    trace!("Setting Chrome arguments: {:?}", args);
    chrome_opts.insert(
        "args".to_string(),
        serde_json::Value::Array(args.into_iter().map(serde_json::Value::String).collect()),
    );

    caps.insert(
        "goog:chromeOptions".to_string(),
        serde_json::Value::Object(chrome_opts),
    );

    debug!("Connecting to WebDriver at {}", webdriver_url);
    let client = match ClientBuilder::native()
        .capabilities(caps)
        .connect(webdriver_url)
        .await
    {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
            return Err(e).context(format!("Failed to connect to WebDriver at {}", webdriver_url));
        }
    };

    trace!("Successfully created WebDriver client");
    Ok(client)
}
