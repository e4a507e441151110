pub mod config;
pub mod constants;

pub use config::{COEFFICIENTS_DIR_ENV, RuntimeConfig};
