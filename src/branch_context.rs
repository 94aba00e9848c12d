use super::*;

/// What a branch gets to look at: the document, the settings and the text
/// between the start of the cursor line and the cursor.
pub(crate) struct BranchContext<'a> {
  config: &'a Config,
  document: &'a Document,
  position: lsp::Position,
  prefix: String,
}

impl<'a> BranchContext<'a> {
  pub(crate) fn config(&self) -> &Config {
    self.config
  }

  pub(crate) fn document(&self) -> &Document {
    self.document
  }

  /// Lines from the cursor line up to the first line of the document,
  /// nearest first.
  pub(crate) fn lines_above(&self) -> impl Iterator<Item = (usize, String)> {
    let content = &self.document.content;

    (0..=self.position.line as usize)
      .rev()
      .filter_map(|row| content.line_text(row).map(|line| (row, line)))
  }

  pub(crate) fn new(
    document: &'a Document,
    config: &'a Config,
    position: lsp::Position,
  ) -> Self {
    Self {
      config,
      document,
      position,
      prefix: document.content.line_prefix(position),
    }
  }

  pub(crate) fn position(&self) -> lsp::Position {
    self.position
  }

  /// The line up to the cursor, indentation included.
  pub(crate) fn prefix(&self) -> &str {
    &self.prefix
  }

  /// The line up to the cursor without surrounding whitespace.
  pub(crate) fn word(&self) -> &str {
    self.prefix.trim()
  }
}
