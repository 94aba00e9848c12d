use super::*;

pub(crate) struct AbbreviationBranch;

impl Branch for AbbreviationBranch {
  fn classify(&self, context: &BranchContext<'_>) -> Option<CompletionContext> {
    context
      .word()
      .starts_with('?')
      .then(|| CompletionContext::Abbreviation {
        prefix: context.word().to_string(),
      })
  }

  fn name(&self) -> &'static str {
    "abbreviation"
  }
}
