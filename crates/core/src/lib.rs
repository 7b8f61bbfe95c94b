//! faqbot core library
//!
//! Foundational utilities shared by the faqbot crates:
//! - Error handling (`AppError`, `AppResult`)
//! - Configuration management
//! - Logging infrastructure

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult};
