use thiserror::Error;

/// Reasons a commit message fails Conventional Commits validation.
///
/// Messages are the user-facing reason strings printed by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
   #[error("commit type is required")]
   RequiredType,

   #[error("commit type is invalid")]
   InvalidType,

   #[error("commit scope is invalid")]
   InvalidScope,

   #[error("commit description is required")]
   RequiredDesc,

   #[error("commit description is invalid")]
   InvalidDesc,

   #[error("commit footer is invalid")]
   InvalidFooter,

   #[error("commit footer token is invalid")]
   InvalidFooterToken,

   #[error("breaking change footer separator is invalid")]
   InvalidBrkChnFTSep,

   #[error("breaking change footer description is required")]
   RequiredBrkChnFTDesc,
}

#[derive(Debug, Error)]
pub enum GitwokError {
   #[error(transparent)]
   Validation(#[from] ValidationError),

   #[error("Commit type '{commit_type}' is not allowed. Must be one of: {allowed}")]
   TypeNotAllowed { commit_type: String, allowed: String },

   #[error("Commit scope '{scope}' is not allowed. Must be one of: {allowed}")]
   ScopeNotAllowed { scope: String, allowed: String },

   #[error("Failed to read config {path}: {reason}")]
   ConfigError { path: String, reason: String },

   #[error("Template error: {0}")]
   TemplateError(String),

   #[error("IO error: {0}")]
   IoError(#[from] std::io::Error),

   #[error("JSON error: {0}")]
   JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GitwokError>;
