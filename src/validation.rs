use crate::{
   config::CommitConfig,
   error::{GitwokError, Result, ValidationError},
   footer::{Separator, TOKEN_BREAKING_CHANGE, parse_footer},
   normalization::{contains_newline, contains_whitespace},
   types::CommitMessage,
};

fn check_type(commit_type: &str) -> Option<ValidationError> {
   if commit_type.is_empty() {
      Some(ValidationError::RequiredType)
   } else if contains_whitespace(commit_type) {
      Some(ValidationError::InvalidType)
   } else {
      None
   }
}

fn check_scope(scope: &str) -> Option<ValidationError> {
   (!scope.is_empty() && contains_newline(scope)).then_some(ValidationError::InvalidScope)
}

fn check_description(description: &str) -> Option<ValidationError> {
   if description.is_empty() {
      Some(ValidationError::RequiredDesc)
   } else if contains_newline(description) {
      Some(ValidationError::InvalidDesc)
   } else {
      None
   }
}

/// Check one footer string; only the first broken rule is reported
pub fn check_footer(footer: &str) -> Option<ValidationError> {
   let Some(parsed) = parse_footer(footer) else {
      return Some(ValidationError::InvalidFooter);
   };
   if parsed.token.is_empty() {
      return Some(ValidationError::InvalidFooter);
   }

   // "BREAKING CHANGE" is the only token allowed to contain a space
   if parsed.token != TOKEN_BREAKING_CHANGE && contains_whitespace(parsed.token) {
      return Some(ValidationError::InvalidFooterToken);
   }
   if parsed.is_breaking_change() {
      if parsed.separator != Separator::ColonSpace {
         return Some(ValidationError::InvalidBrkChnFTSep);
      }
      if parsed.value.is_empty() {
         return Some(ValidationError::RequiredBrkChnFTDesc);
      }
   }
   None
}

/// Validate a commit message; the first violated rule wins.
///
/// Rules run in order: type, scope, description, then each footer.
pub fn validate_commit_message(msg: &CommitMessage) -> std::result::Result<(), ValidationError> {
   let first = check_type(&msg.commit_type)
      .or_else(|| check_scope(&msg.scope))
      .or_else(|| check_description(&msg.description))
      .or_else(|| msg.footers.iter().find_map(|footer| check_footer(footer)));

   first.map_or(Ok(()), Err)
}

/// Collect the first violation of each independent part of the message.
///
/// The order matches `validate_commit_message`, so the first element is always
/// the error it reports.
pub fn collect_violations(msg: &CommitMessage) -> Vec<ValidationError> {
   [check_type(&msg.commit_type), check_scope(&msg.scope), check_description(&msg.description)]
      .into_iter()
      .chain(msg.footers.iter().map(|footer| check_footer(footer)))
      .flatten()
      .collect()
}

/// Enforce the configured type and scope allow-lists.
///
/// Not part of the grammar; only applies when `enforce_types` is set. An empty
/// scope list allows any scope.
pub fn check_allowed(msg: &CommitMessage, config: &CommitConfig) -> Result<()> {
   if !config.enforce_types {
      return Ok(());
   }

   if !config.types.contains_key(&msg.commit_type) {
      return Err(GitwokError::TypeNotAllowed {
         commit_type: msg.commit_type.clone(),
         allowed:     config
            .types
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", "),
      });
   }

   if !msg.scope.is_empty() && !config.scopes.is_empty() && !config.scopes.contains(&msg.scope) {
      return Err(GitwokError::ScopeNotAllowed {
         scope:   msg.scope.clone(),
         allowed: config.scopes.join(", "),
      });
   }

   Ok(())
}
