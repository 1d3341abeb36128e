use anyhow::Result;
use tracing::{error, info};

use baseline_capture::capture::{CaptureConfig, CaptureRunner};
use baseline_capture::probe;
use baseline_capture::utils::logger::init_logger;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger()?;

    // Fixed configuration: no command-line flags.
    let config = CaptureConfig::default();
    let output_dir = config.output_dir.clone();

    info!("Visual regression screenshot tool");
    info!(
        "Capturing {} pages at {} breakpoints",
        config.pages.len(),
        config.breakpoints.len()
    );

    if let Err(e) = probe::check_server(&config.base_url).await {
        error!("{}", e);
        error!("Start the site server first, e.g.: python3 -m http.server 8000");
        std::process::exit(1);
    }

    let runner = CaptureRunner::new(config);
    let files = runner.run().await?;

    info!("{} screenshots saved to {}", files.len(), output_dir.display());

    Ok(())
}
