use super::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CandidateKind {
  Class,
  Folder,
  Function,
  Property,
  Reference,
  Snippet,
  Unit,
  Value,
  Variable,
}

impl From<CandidateKind> for lsp::CompletionItemKind {
  fn from(value: CandidateKind) -> Self {
    match value {
      CandidateKind::Class => Self::CLASS,
      CandidateKind::Folder => Self::FOLDER,
      CandidateKind::Function => Self::FUNCTION,
      CandidateKind::Property => Self::PROPERTY,
      CandidateKind::Reference => Self::REFERENCE,
      CandidateKind::Snippet => Self::SNIPPET,
      CandidateKind::Unit => Self::UNIT,
      CandidateKind::Value => Self::VALUE,
      CandidateKind::Variable => Self::VARIABLE,
    }
  }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum InsertText {
  Plain(String),
  Snippet(String),
}

/// A single completion suggestion.
///
/// Candidates are assembled in one expression through the consuming `with_*`
/// methods and are never modified once they are handed to a group.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Candidate {
  pub(crate) deprecated: bool,
  pub(crate) detail: Option<String>,
  pub(crate) documentation: Option<String>,
  pub(crate) insert_text: InsertText,
  pub(crate) kind: CandidateKind,
  pub(crate) label: String,
  pub(crate) sort_rank: Option<u8>,
}

impl From<Candidate> for lsp::CompletionItem {
  fn from(candidate: Candidate) -> Self {
    let Candidate {
      deprecated,
      detail,
      documentation,
      insert_text,
      kind,
      label,
      sort_rank,
    } = candidate;

    let (insert_text, insert_text_format) = match insert_text {
      InsertText::Plain(text) => (text, lsp::InsertTextFormat::PLAIN_TEXT),
      InsertText::Snippet(text) => (text, lsp::InsertTextFormat::SNIPPET),
    };

    lsp::CompletionItem {
      detail,
      documentation: documentation.map(|value| {
        lsp::Documentation::MarkupContent(lsp::MarkupContent {
          kind: lsp::MarkupKind::Markdown,
          value,
        })
      }),
      insert_text: Some(insert_text),
      insert_text_format: Some(insert_text_format),
      kind: Some(kind.into()),
      label,
      sort_text: sort_rank.map(|rank| rank.to_string()),
      tags: deprecated.then(|| vec![lsp::CompletionItemTag::DEPRECATED]),
      ..Default::default()
    }
  }
}

impl Candidate {
  pub(crate) fn new(label: impl Into<String>, kind: CandidateKind) -> Self {
    let label = label.into();

    Self {
      deprecated: false,
      detail: None,
      documentation: None,
      insert_text: InsertText::Plain(label.clone()),
      kind,
      label,
      sort_rank: None,
    }
  }

  pub(crate) fn with_deprecated(self, deprecated: bool) -> Self {
    Self { deprecated, ..self }
  }

  pub(crate) fn with_detail(self, detail: impl Into<String>) -> Self {
    Self {
      detail: Some(detail.into()),
      ..self
    }
  }

  pub(crate) fn with_documentation(
    self,
    documentation: impl Into<String>,
  ) -> Self {
    Self {
      documentation: Some(documentation.into()),
      ..self
    }
  }

  pub(crate) fn with_insert(self, text: impl Into<String>) -> Self {
    Self {
      insert_text: InsertText::Plain(text.into()),
      ..self
    }
  }

  pub(crate) fn with_optional_detail(self, detail: Option<&str>) -> Self {
    Self {
      detail: detail.map(str::to_string),
      ..self
    }
  }

  pub(crate) fn with_rank(self, rank: u8) -> Self {
    Self {
      sort_rank: Some(rank),
      ..self
    }
  }

  pub(crate) fn with_snippet(self, text: impl Into<String>) -> Self {
    Self {
      insert_text: InsertText::Snippet(text.into()),
      ..self
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn plain_candidate_inserts_its_label() {
    let candidate = Candidate::new("color", CandidateKind::Property);

    assert_eq!(candidate.insert_text, InsertText::Plain("color".into()));
    assert_eq!(candidate.sort_rank, None);
    assert!(!candidate.deprecated);
  }

  #[test]
  fn converts_snippet_candidate_to_completion_item() {
    let item = lsp::CompletionItem::from(
      Candidate::new(":hover", CandidateKind::Class)
        .with_snippet(":hover\n\t$0")
        .with_detail("hover state")
        .with_documentation("**docs**")
        .with_rank(3)
        .with_deprecated(true),
    );

    assert_eq!(
      item,
      lsp::CompletionItem {
        label: ":hover".into(),
        kind: Some(lsp::CompletionItemKind::CLASS),
        detail: Some("hover state".into()),
        documentation: Some(lsp::Documentation::MarkupContent(
          lsp::MarkupContent {
            kind: lsp::MarkupKind::Markdown,
            value: "**docs**".into(),
          }
        )),
        insert_text: Some(":hover\n\t$0".into()),
        insert_text_format: Some(lsp::InsertTextFormat::SNIPPET),
        sort_text: Some("3".into()),
        tags: Some(vec![lsp::CompletionItemTag::DEPRECATED]),
        ..Default::default()
      }
    );
  }

  #[test]
  fn omits_tags_for_current_entities() {
    let item =
      lsp::CompletionItem::from(Candidate::new("px", CandidateKind::Unit));

    assert_eq!(item.tags, None);
    assert_eq!(item.sort_text, None);
    assert_eq!(
      item.insert_text_format,
      Some(lsp::InsertTextFormat::PLAIN_TEXT)
    );
  }
}
