//! Conventional commit message builder library
//!
//! This library normalizes, validates and renders commit messages following
//! the Conventional Commits v1.0.0 format, and splits free-form footer text
//! into individual footers.
pub mod config;
pub mod error;
pub mod footer;
pub mod normalization;
pub mod style;
pub mod templates;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use config::CommitConfig;
pub use error::{GitwokError, Result, ValidationError};
pub use footer::{Footer, Separator, parse_footer, parse_footer_block};
pub use style::{Reporter, TerminalReporter};
pub use types::CommitMessage;
