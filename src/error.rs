use thiserror::Error;

/// Failure kinds surfaced to the caller.
#[derive(Debug, Error)]
pub enum BaselineError {
    /// The precondition probe could not reach the base address. Detected
    /// before any browser or filesystem work.
    #[error("no server found at {url}: {source}")]
    ServerUnavailable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A navigation, resize, or image-save step failed during the main
    /// loop. Aborts the remaining iterations.
    #[error("capture run failed: {0:#}")]
    CaptureFailure(#[source] anyhow::Error),
}
