pub mod client;
pub mod config;
pub mod runner;

pub use config::{Breakpoint, CaptureConfig, Page};
pub use runner::CaptureRunner;
