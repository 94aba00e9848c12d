use super::*;

/// Anything starting with `/` is a comment, the css variable import form
/// completes a path like an import statement.
pub(crate) struct CommentBranch;

impl Branch for CommentBranch {
  fn classify(&self, context: &BranchContext<'_>) -> Option<CompletionContext> {
    let word = context.word();

    if !word.starts_with('/') {
      return None;
    }

    if predicates::is_css_variable_import(word) {
      return Some(CompletionContext::Import {
        typed_path: Imports::typed_path(word),
      });
    }

    Some(if context.config().disable_comment_completion {
      CompletionContext::Suppressed
    } else {
      CompletionContext::Comment
    })
  }

  fn name(&self) -> &'static str {
    "comment"
  }
}
