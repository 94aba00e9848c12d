use super::*;

/// Vue and Svelte documents only get completions inside a Sass style block.
pub(crate) struct StyleBlockBranch;

impl Branch for StyleBlockBranch {
  fn classify(&self, context: &BranchContext<'_>) -> Option<CompletionContext> {
    if !context.document().is_embedded() {
      return None;
    }

    let cursor = context.position().line as usize;

    for (row, line) in context.lines_above() {
      if predicates::is_style_block_open(&line) {
        return (row == cursor).then_some(CompletionContext::Suppressed);
      }

      if predicates::is_style_block_close(&line) {
        return Some(CompletionContext::Suppressed);
      }
    }

    Some(CompletionContext::Suppressed)
  }

  fn name(&self) -> &'static str {
    "style-block"
  }
}
