use super::*;

pub(crate) use {
  abbreviation::AbbreviationBranch, comment::CommentBranch,
  import::ImportBranch, parent_selector::ParentSelectorBranch,
  path::PathBranch, style_block::StyleBlockBranch,
};

mod abbreviation;
mod comment;
mod import;
mod parent_selector;
mod path;
mod style_block;

/// Classification order. The first branch that claims the cursor decides
/// the result, when none does the general completions are assembled.
pub(crate) static BRANCHES: &[&dyn Branch] = &[
  &StyleBlockBranch,
  &AbbreviationBranch,
  &ImportBranch,
  &ParentSelectorBranch,
  &CommentBranch,
  &PathBranch,
];

/// What a claiming branch decided the cursor is on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum CompletionContext {
  /// `?` prefix, handed over to the editor's abbreviation expansion.
  Abbreviation { prefix: String },
  /// Comment snippets.
  Comment,
  /// Path after an import keyword or the css variable import comment.
  Import { typed_path: String },
  /// Pseudo selectors after `&`.
  ParentSelector,
  /// Nothing to offer: a file path being typed, or the cursor is outside
  /// a Sass style block.
  Suppressed,
}

pub(crate) trait Branch: Sync {
  /// Claims the cursor, or returns `None` to let the next branch look.
  fn classify(&self, context: &BranchContext<'_>) -> Option<CompletionContext>;

  /// Name used in logs.
  fn name(&self) -> &'static str;
}
