use std::path::Path;

use tera::{Context, Tera};

use crate::{
   error::{GitwokError, Result},
   types::CommitMessage,
};

/// Tera template producing the same text as [`format_commit_message`].
///
/// Available variables: `commit_type`, `scope`, `breaking`, `description`,
/// `body` and `footers` (a list of strings).
pub const DEFAULT_TEMPLATE: &str = "{{ commit_type }}{% if scope %}({{ scope }}){% endif %}{% if \
                                    breaking %}!{% endif %}: {{ description }}\n{% if body \
                                    %}\n{{ body }}\n{% endif %}{% if footers %}\n{% for footer \
                                    in footers %}{{ footer }}\n{% endfor %}{% endif %}";

/// Format `CommitMessage` as Conventional Commits v1.0.0 text.
///
/// Header, then body and footer block each preceded by a single blank line.
/// Footers follow each other without blank lines and the text ends with one
/// newline.
pub fn format_commit_message(msg: &CommitMessage) -> String {
   let mut result = msg.header();
   result.push('\n');

   if !msg.body.is_empty() {
      result.push('\n');
      result.push_str(&msg.body);
      result.push('\n');
   }

   if !msg.footers.is_empty() {
      result.push('\n');
      for footer in &msg.footers {
         result.push_str(footer);
         result.push('\n');
      }
   }

   result
}

fn template_context(msg: &CommitMessage) -> Context {
   let mut context = Context::new();
   context.insert("commit_type", &msg.commit_type);
   context.insert("scope", &msg.scope);
   context.insert("breaking", &msg.breaking);
   context.insert("description", &msg.description);
   context.insert("body", &msg.body);
   context.insert("footers", &msg.footers);
   context
}

/// Render a commit message through a Tera template
pub fn render_with_template(msg: &CommitMessage, template: &str) -> Result<String> {
   let mut tera = Tera::default();
   // Commit messages are plain text
   tera.autoescape_on(vec![]);

   tera.render_str(template, &template_context(msg))
      .map_err(|e| GitwokError::TemplateError(format!("Failed to render commit message: {e}")))
}

/// Render a commit message through a template file
pub fn render_template_file(msg: &CommitMessage, path: &Path) -> Result<String> {
   let template = std::fs::read_to_string(path).map_err(|e| {
      GitwokError::TemplateError(format!("Failed to read template {}: {e}", path.display()))
   })?;
   render_with_template(msg, &template)
}
