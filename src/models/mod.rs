pub mod config;

pub use config::{AppConfig, ErrorPolicy, OutputFormat};
