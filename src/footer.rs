//! Commit footers: splitting a single footer into its parts, and scanning a
//! free-form footer block into individual footers.

use std::fmt;

use crate::{normalization::trim_footer, style::Reporter};

/// Footer token announcing a breaking change
pub const TOKEN_BREAKING_CHANGE: &str = "BREAKING CHANGE";
/// Hyphenated synonym of [`TOKEN_BREAKING_CHANGE`]
pub const TOKEN_BREAKING_CHANGE_ALIAS: &str = "BREAKING-CHANGE";
pub const SEP_COLON_SPACE: &str = ": ";
pub const SEP_SPACE_HASH: &str = " #";

const BREAKING_CHANGE_HEADER: &str = "BREAKING CHANGE: ";
const BREAKING_WORD: &str = "BREAKING";

/// The two separators a footer token may be followed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
   /// `": "`, as in `Reviewed-by: Z`
   ColonSpace,
   /// `" #"`, as in `Fixes #42`
   SpaceHash,
}

impl Separator {
   pub const fn as_str(&self) -> &'static str {
      match self {
         Self::ColonSpace => SEP_COLON_SPACE,
         Self::SpaceHash => SEP_SPACE_HASH,
      }
   }
}

impl fmt::Display for Separator {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(self.as_str())
   }
}

/// A footer split into token, separator and value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer<'a> {
   pub token:     &'a str,
   pub separator: Separator,
   pub value:     &'a str,
}

impl Footer<'_> {
   pub fn is_breaking_change(&self) -> bool {
      is_breaking_change_token(self.token)
   }
}

/// Check if token is the breaking change token or its alias (case-sensitive)
pub fn is_breaking_change_token(token: &str) -> bool {
   token == TOKEN_BREAKING_CHANGE || token == TOKEN_BREAKING_CHANGE_ALIAS
}

/// Split a footer on the first `": "`, falling back to the first `" #"`.
///
/// Returns `None` when neither separator occurs. The value may span several
/// lines; the token may come back empty (e.g. `": value"`), which validation
/// rejects. Only the first separator splits, so `"Refs: a: b"` keeps `"a: b"`
/// as its value instead of being rejected for having two separators.
pub fn parse_footer(footer: &str) -> Option<Footer<'_>> {
   if let Some((token, value)) = footer.split_once(SEP_COLON_SPACE) {
      return Some(Footer { token, separator: Separator::ColonSpace, value });
   }
   footer
      .split_once(SEP_SPACE_HASH)
      .map(|(token, value)| Footer { token, separator: Separator::SpaceHash, value })
}

/// Byte range of a token plus its separator within the scanned input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
   pub start: usize,
   pub end:   usize,
}

const fn is_token_char(c: char) -> bool {
   c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Finds footer starts in a block of text.
///
/// Yields leftmost, non-overlapping spans matching either a word token
/// (`[A-Za-z0-9_-]+`) directly followed by `": "` or `" #"`, or the literal
/// `"BREAKING CHANGE: "`. `"BREAKING CHANGE #"` is not special: it matches as
/// the plain token `CHANGE`.
#[derive(Debug, Clone)]
pub struct FooterScanner<'a> {
   input: &'a str,
   pos:   usize,
}

impl<'a> FooterScanner<'a> {
   pub const fn new(input: &'a str) -> Self {
      Self { input, pos: 0 }
   }

   /// End of the run of token chars starting at `at`
   fn token_run_end(&self, at: usize) -> usize {
      let rest = &self.input[at..];
      at + rest
         .char_indices()
         .find(|&(_, c)| !is_token_char(c))
         .map_or(rest.len(), |(i, _)| i)
   }
}

impl Iterator for FooterScanner<'_> {
   type Item = Span;

   fn next(&mut self) -> Option<Span> {
      while let Some(c) = self.input[self.pos..].chars().next() {
         let start = self.pos;
         if !is_token_char(c) {
            self.pos += c.len_utf8();
            continue;
         }

         // A shorter token would be followed by a token char, never by a
         // separator, so only the longest run needs checking.
         let run_end = self.token_run_end(start);
         let after = &self.input[run_end..];
         if after.starts_with(SEP_COLON_SPACE) || after.starts_with(SEP_SPACE_HASH) {
            self.pos = run_end + 2;
            return Some(Span { start, end: self.pos });
         }

         // "BREAKING CHANGE: " can only start where its first word ends this run
         if let Some(header_start) = run_end.checked_sub(BREAKING_WORD.len())
            && header_start >= start
            && self
               .input
               .get(header_start..)
               .is_some_and(|rest| rest.starts_with(BREAKING_CHANGE_HEADER))
         {
            self.pos = header_start + BREAKING_CHANGE_HEADER.len();
            return Some(Span { start: header_start, end: self.pos });
         }

         self.pos = run_end;
      }
      None
   }
}

/// Split a raw, possibly multi-line footer block into trimmed footers.
///
/// Each footer runs from its token to the start of the next token (or the end
/// of the block). Blank input gives no footers; input without any token is
/// reported as a warning, not an error.
pub fn parse_footer_block(input: &str, reporter: &dyn Reporter) -> Vec<String> {
   if input.trim().is_empty() {
      return vec![];
   }

   let spans: Vec<Span> = FooterScanner::new(input).collect();
   let Some(first) = spans.first() else {
      reporter.warn("No valid footer message found");
      return vec![];
   };

   let leading = input[..first.start].trim();
   if !leading.is_empty() {
      reporter.warn(&format!("Ignoring text before first footer: {leading:?}"));
   }

   let footers: Vec<String> = spans
      .iter()
      .enumerate()
      .map(|(i, span)| {
         let end = spans.get(i + 1).map_or(input.len(), |next| next.start);
         trim_footer(&input[span.start..end])
      })
      .collect();

   reporter.verbose(&format!("Parsed {} footers: {footers:?}", footers.len()));
   footers
}
