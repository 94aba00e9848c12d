use super::*;

pub(crate) struct ParentSelectorBranch;

impl Branch for ParentSelectorBranch {
  fn classify(&self, context: &BranchContext<'_>) -> Option<CompletionContext> {
    context
      .word()
      .starts_with('&')
      .then_some(CompletionContext::ParentSelector)
  }

  fn name(&self) -> &'static str {
    "parent-selector"
  }
}
