use super::*;

/// Typing a file path inside a value, `url('./img/`, gets no suggestions.
pub(crate) struct PathBranch;

impl Branch for PathBranch {
  fn classify(&self, context: &BranchContext<'_>) -> Option<CompletionContext> {
    predicates::is_path(context.word()).then_some(CompletionContext::Suppressed)
  }

  fn name(&self) -> &'static str {
    "path"
  }
}
