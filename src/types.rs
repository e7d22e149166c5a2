use std::{fmt, path::PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand};
use serde::Serialize;

use crate::{
   error::ValidationError,
   footer::{Footer, parse_footer},
   normalization::trim_footer,
   templates::format_commit_message,
   validation,
};

/// Conventional commit types suggested by the Conventional Commits spec,
/// with a one-line hint each. Order is the order they are listed in.
pub const PRESET_COMMIT_TYPES: &[(&str, &str)] = &[
   ("fix", "A bug fix"),
   ("feat", "A new feature"),
   ("build", "Changes to the build system or dependencies"),
   ("chore", "Maintenance that touches neither source nor tests"),
   ("ci", "Changes to CI configuration and scripts"),
   ("docs", "Documentation only changes"),
   ("perf", "A change that improves performance"),
   ("refactor", "A change that neither fixes a bug nor adds a feature"),
   ("style", "Formatting, whitespace, missing semicolons"),
   ("test", "Adding or correcting tests"),
];

// === Commit message ===

/// A conventional commit message, normalized on construction.
///
/// Build with [`CommitMessage::new`], then [`validate`](Self::validate) before
/// [`render`](Self::render). Rendering an invalid message produces text that
/// is not a conventional commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitMessage {
   #[serde(rename = "type")]
   pub commit_type: String,
   pub scope:       String,
   pub breaking:    bool,
   pub description: String,
   pub body:        String,
   pub footers:     Vec<String>,
}

impl CommitMessage {
   /// Creates a message from raw input, trimming every part.
   ///
   /// Footers go through [`trim_footer`] so an empty footer value keeps its
   /// separator.
   pub fn new(
      commit_type: &str,
      scope: &str,
      breaking: bool,
      description: &str,
      body: &str,
      footers: impl IntoIterator<Item = impl AsRef<str>>,
   ) -> Self {
      Self {
         commit_type: commit_type.trim().to_string(),
         scope: scope.trim().to_string(),
         breaking,
         description: description.trim().to_string(),
         body: body.trim().to_string(),
         footers: footers
            .into_iter()
            .map(|footer| trim_footer(footer.as_ref()))
            .collect(),
      }
   }

   /// Check the message against the Conventional Commits grammar, stopping at
   /// the first violation
   pub fn validate(&self) -> Result<(), ValidationError> {
      validation::validate_commit_message(self)
   }

   /// Every independent violation, first one being what `validate` reports
   pub fn violations(&self) -> Vec<ValidationError> {
      validation::collect_violations(self)
   }

   /// Footers split into token, separator and value; `None` for malformed ones
   pub fn parsed_footers(&self) -> impl Iterator<Item = Option<Footer<'_>>> {
      self.footers.iter().map(|footer| parse_footer(footer))
   }

   /// Returns the header line without its newline
   pub fn header(&self) -> String {
      let mut header = self.commit_type.clone();
      if !self.scope.is_empty() {
         header.push('(');
         header.push_str(&self.scope);
         header.push(')');
      }
      if self.breaking {
         header.push('!');
      }
      header.push_str(": ");
      header.push_str(&self.description);
      header
   }

   /// Render as Conventional Commits v1.0.0 text
   pub fn render(&self) -> String {
      format_commit_message(self)
   }
}

impl fmt::Display for CommitMessage {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(&self.render())
   }
}

// === CLI Args ===

#[derive(Parser, Debug)]
#[command(
   name = "gitwok",
   author,
   version,
   about = "Build and validate Conventional Commits messages",
   long_about = None
)]
pub struct Args {
   /// Path to a TOML config file
   #[arg(long, global = true)]
   pub config: Option<PathBuf>,

   /// Show verbose diagnostics
   #[arg(long, global = true)]
   pub verbose: bool,

   #[command(subcommand)]
   pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
   /// Build, validate and print a conventional commit message
   Commit(CommitArgs),
   /// List the configured commit types
   Types,
   /// Print version information
   Version,
}

#[derive(ClapArgs, Debug, Default)]
pub struct CommitArgs {
   /// Commit type (required), e.g. fix or feat
   #[arg(long = "type", short = 't', default_value = "")]
   pub commit_type: String,

   /// Commit scope
   #[arg(long, short = 's', default_value = "")]
   pub scope: String,

   /// Mark the commit as containing breaking changes
   #[arg(long, short = 'k')]
   pub breaking: bool,

   /// Commit description (required, single line)
   #[arg(long, short = 'd', default_value = "")]
   pub description: String,

   /// Commit body
   #[arg(long, short = 'b', default_value = "")]
   pub body: String,

   /// A single footer, e.g. "Reviewed-by: Z" (repeatable)
   #[arg(long = "footer", short = 'f')]
   pub footers: Vec<String>,

   /// Multi-line block of footers, split at each footer token
   #[arg(long)]
   pub footer_text: Option<String>,

   /// Tera template used to render the message
   #[arg(long)]
   pub template: Option<PathBuf>,

   /// Print the structured message as JSON instead of the rendered text
   #[arg(long)]
   pub json: bool,

   /// Write the rendered message to this file (for `git commit -F`)
   #[arg(long, short = 'o')]
   pub output: Option<PathBuf>,
}
