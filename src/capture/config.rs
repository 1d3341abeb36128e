use std::path::PathBuf;
use std::time::Duration;

// Defaults for the fixed production setup
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";
pub const DEFAULT_OUTPUT_DIR: &str = "screenshots/baseline";

// Settle intervals. These are fixed waits, not readiness checks; slow
// environments can raise them through CaptureConfig.
pub const PAGE_SETTLE: Duration = Duration::from_secs(2);
pub const RESIZE_SETTLE: Duration = Duration::from_millis(500);

/// A named viewport size used to exercise responsive layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoint {
    pub width: u32,
    pub height: u32,
    pub label: String,
}

impl Breakpoint {
    pub fn new(width: u32, height: u32, label: &str) -> Self {
        Self {
            width,
            height,
            label: label.to_string(),
        }
    }
}

/// A page to capture, addressed relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub path: String,
    pub label: String,
}

impl Page {
    pub fn new(path: &str, label: &str) -> Self {
        Self {
            path: path.to_string(),
            label: label.to_string(),
        }
    }
}

/// Everything one capture run needs, passed explicitly into the runner
/// rather than read from process-wide state.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Directory the baseline PNGs are written to
    pub output_dir: PathBuf,

    /// Base address of the local server hosting the pages
    pub base_url: String,

    /// Optional WebDriver URL (uses default if None)
    pub webdriver_url: Option<String>,

    /// Whether to run the browser in headless mode
    pub headless: bool,

    /// Pages to capture, in capture order
    pub pages: Vec<Page>,

    /// Viewport sizes to capture each page at, in capture order
    pub breakpoints: Vec<Breakpoint>,

    /// Wait after navigating, for page load and client-side rendering
    pub page_settle: Duration,

    /// Wait after a viewport resize, for responsive layout to re-flow
    pub resize_settle: Duration,
}

impl CaptureConfig {
    /// Number of image files a complete run produces.
    pub fn expected_captures(&self) -> usize {
        self.pages.len() * self.breakpoints.len()
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            base_url: DEFAULT_BASE_URL.to_string(),
            webdriver_url: None,
            headless: true,
            pages: vec![
                Page::new("index.html", "leaderboard"),
                Page::new("winners.html", "winners"),
            ],
            breakpoints: vec![
                Breakpoint::new(360, 800, "360px"),
                Breakpoint::new(375, 812, "375px"),
                Breakpoint::new(480, 854, "480px"),
                Breakpoint::new(768, 1024, "768px"),
                Breakpoint::new(1024, 768, "1024px"),
                Breakpoint::new(1200, 800, "1200px"),
                Breakpoint::new(1440, 900, "1440px"),
            ],
            page_settle: PAGE_SETTLE,
            resize_settle: RESIZE_SETTLE,
        }
    }
}

// Chrome browser arguments for restricted/container environments
pub fn chrome_arguments(headless: bool) -> Vec<String> {
    vec![
        "--no-sandbox",
        "--disable-gpu",
        "--disable-dev-shm-usage",
        "--mute-audio",
        if headless { "--headless=new" } else { "" },
    ]
    .into_iter()
    .filter(|s| !s.is_empty())
    .map(String::from)
    .collect()
}
