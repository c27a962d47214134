//! Configuration domain

mod app_config;
mod backend;

pub use app_config::AppConfig;
pub use backend::ClipboardBackend;
