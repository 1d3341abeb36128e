pub mod capture;
pub mod error;
pub mod probe;
pub mod utils;
