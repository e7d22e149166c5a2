//! Terminal styling and diagnostic reporting.
//!
//! Respects `NO_COLOR` environment variable and terminal capabilities. All
//! styled output goes to stderr so the rendered commit message on stdout stays
//! plain.

use std::sync::OnceLock;

use owo_colors::OwoColorize;

/// Whether color output is enabled (cached on first call).
static COLOR_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if colors should be used.
pub fn colors_enabled() -> bool {
   *COLOR_ENABLED.get_or_init(|| {
      // NO_COLOR takes precedence (https://no-color.org/)
      if std::env::var("NO_COLOR").is_ok() {
         return false;
      }
      supports_color::on(supports_color::Stream::Stderr).is_some_and(|level| level.has_basic)
   })
}

// === Color Palette ===

/// Success: checkmarks, completed actions (green + bold).
pub fn success(s: &str) -> String {
   if colors_enabled() {
      s.green().bold().to_string()
   } else {
      s.to_string()
   }
}

/// Warning: non-fatal issues (yellow).
pub fn warning(s: &str) -> String {
   if colors_enabled() {
      s.yellow().to_string()
   } else {
      s.to_string()
   }
}

/// Error: failures, hard errors (red + bold).
pub fn error(s: &str) -> String {
   if colors_enabled() {
      s.red().bold().to_string()
   } else {
      s.to_string()
   }
}

/// Dim: less important details.
pub fn dim(s: &str) -> String {
   if colors_enabled() {
      s.dimmed().to_string()
   } else {
      s.to_string()
   }
}

/// Commit type styling (blue + bold).
pub fn commit_type(s: &str) -> String {
   if colors_enabled() {
      s.blue().bold().to_string()
   } else {
      s.to_string()
   }
}

// === Status Icons ===

pub mod icons {
   pub const SUCCESS: &str = "\u{2713}";
   pub const WARNING: &str = "\u{26A0}";
   pub const ERROR: &str = "\u{2717}";
}

/// Print warning message to stderr.
pub fn warn(msg: &str) {
   eprintln!("{} {}", warning(icons::WARNING), warning(msg));
}

/// Print error message to stderr.
pub fn fail(msg: &str) {
   eprintln!("{} {}", error(icons::ERROR), error(msg));
}

// === Reporting ===

/// Sink for diagnostics raised while building a commit message.
///
/// Passed explicitly to the parts of the library that can warn, so callers
/// choose where diagnostics go.
pub trait Reporter {
   /// Non-fatal issue the user should see
   fn warn(&self, msg: &str);

   /// Detail only shown when verbose output was requested
   fn verbose(&self, msg: &str);
}

/// Reporter writing styled lines to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalReporter {
   pub verbose: bool,
}

impl TerminalReporter {
   pub const fn new(verbose: bool) -> Self {
      Self { verbose }
   }
}

impl Reporter for TerminalReporter {
   fn warn(&self, msg: &str) {
      warn(msg);
   }

   fn verbose(&self, msg: &str) {
      if self.verbose {
         eprintln!("{}", dim(&format!("[verbose] {msg}")));
      }
   }
}

#[cfg(test)]
pub(crate) mod tests {
   use std::cell::RefCell;

   use super::*;

   /// Reporter that keeps every message for later assertions
   #[derive(Debug, Default)]
   pub(crate) struct RecordingReporter {
      warnings: RefCell<Vec<String>>,
      verbose:  RefCell<Vec<String>>,
   }

   impl RecordingReporter {
      pub(crate) fn warnings(&self) -> Vec<String> {
         self.warnings.borrow().clone()
      }

      pub(crate) fn verbose_lines(&self) -> Vec<String> {
         self.verbose.borrow().clone()
      }
   }

   impl Reporter for RecordingReporter {
      fn warn(&self, msg: &str) {
         self.warnings.borrow_mut().push(msg.to_string());
      }

      fn verbose(&self, msg: &str) {
         self.verbose.borrow_mut().push(msg.to_string());
      }
   }

   #[test]
   fn test_recording_reporter_collects() {
      let reporter = RecordingReporter::default();
      reporter.warn("first");
      reporter.verbose("detail");
      reporter.warn("second");
      assert_eq!(reporter.warnings(), vec!["first", "second"]);
      assert_eq!(reporter.verbose_lines(), vec!["detail"]);
   }

   #[test]
   fn test_terminal_reporter_default_is_quiet() {
      assert!(!TerminalReporter::default().verbose);
      assert!(TerminalReporter::new(true).verbose);
   }
}
