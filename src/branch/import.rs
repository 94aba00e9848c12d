use super::*;

/// `@use '` and `@import ` lines complete file paths.
pub(crate) struct ImportBranch;

impl Branch for ImportBranch {
  fn classify(&self, context: &BranchContext<'_>) -> Option<CompletionContext> {
    predicates::is_import_statement(context.word()).then(|| {
      CompletionContext::Import {
        typed_path: Imports::typed_path(context.word()),
      }
    })
  }

  fn name(&self) -> &'static str {
    "import"
  }
}
