//! String predicates and the footer-aware trim used when building a commit
//! message.

use crate::footer::{SEP_COLON_SPACE, SEP_SPACE_HASH};

/// Check if string contains a line break (`\n`, which also covers `\r\n`)
pub fn contains_newline(s: &str) -> bool {
   s.contains('\n')
}

/// Check if string contains any Unicode whitespace
pub fn contains_whitespace(s: &str) -> bool {
   s.chars().any(char::is_whitespace)
}

/// Trim a footer without destroying its separator.
///
/// A footer whose value is empty still carries meaning through its separator,
/// so `"Acked-by: "` keeps its trailing space and `" #1"` keeps its leading
/// one. After trimming, a leading `#` or trailing `:` is read as an intended
/// separator and the separator space is put back.
pub fn trim_footer(s: &str) -> String {
   let mut trimmed = s;
   if !trimmed.ends_with(SEP_COLON_SPACE) {
      trimmed = trimmed.trim_end();
   }
   if !trimmed.starts_with(SEP_SPACE_HASH) {
      trimmed = trimmed.trim_start();
   }

   let mut footer = String::with_capacity(trimmed.len() + 2);
   if trimmed.starts_with('#') {
      footer.push(' ');
   }
   footer.push_str(trimmed);
   if footer.ends_with(':') {
      footer.push(' ');
   }
   footer
}

#[cfg(test)]
mod tests {
   use proptest::prelude::*;

   use super::*;

   #[test]
   fn test_contains_newline() {
      assert!(contains_newline("line one\nline two"));
      assert!(contains_newline("windows\r\nline"));
      assert!(contains_newline("\n"));
      assert!(!contains_newline("single line"));
      assert!(!contains_newline(""));
   }

   #[test]
   fn test_contains_whitespace() {
      assert!(contains_whitespace("two words"));
      assert!(contains_whitespace("tab\there"));
      assert!(contains_whitespace("trailing\n"));
      assert!(contains_whitespace("ideographic\u{3000}space"));
      assert!(!contains_whitespace("feat"));
      assert!(!contains_whitespace("BREAKING-CHANGE"));
      assert!(!contains_whitespace(""));
   }

   #[test]
   fn test_trim_footer_keeps_colon_space() {
      assert_eq!(trim_footer("Acked-by: "), "Acked-by: ");
      assert_eq!(trim_footer("  Acked-by: "), "Acked-by: ");
   }

   #[test]
   fn test_trim_footer_keeps_space_hash() {
      assert_eq!(trim_footer("  #1 "), " #1");
      assert_eq!(trim_footer(" #1"), " #1");
      assert_eq!(trim_footer("#1"), " #1");
   }

   #[test]
   fn test_trim_footer_restores_colon_separator() {
      assert_eq!(trim_footer("Acked-by:"), "Acked-by: ");
      assert_eq!(trim_footer("Acked-by:   \n"), "Acked-by: ");
   }

   #[test]
   fn test_trim_footer_plain_values() {
      assert_eq!(trim_footer("  Reviewed-by: RT \n"), "Reviewed-by: RT");
      assert_eq!(trim_footer("fix #1\n\n"), "fix #1");
      assert_eq!(trim_footer("Refs: a\nb  "), "Refs: a\nb");
   }

   #[test]
   fn test_trim_footer_blank() {
      assert_eq!(trim_footer(""), "");
      assert_eq!(trim_footer(" \t\n "), "");
      assert_eq!(trim_footer(":"), ": ");
      assert_eq!(trim_footer("# "), " #");
   }

   proptest! {
      #[test]
      fn trim_footer_idempotent(s in "[ a#:\t\n\r-]{0,24}") {
         let once = trim_footer(&s);
         prop_assert_eq!(trim_footer(&once), once);
      }

      #[test]
      fn trim_footer_idempotent_any_text(s in "\\PC{0,40}") {
         let once = trim_footer(&s);
         prop_assert_eq!(trim_footer(&once), once);
      }
   }
}
