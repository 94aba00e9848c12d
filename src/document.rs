use super::*;

#[derive(Debug)]
pub(crate) struct Document {
  pub(crate) content: Rope,
  pub(crate) language_id: String,
  pub(crate) uri: lsp::Url,
  pub(crate) version: i32,
}

#[cfg(test)]
impl From<&str> for Document {
  fn from(value: &str) -> Self {
    Self {
      content: value.into(),
      language_id: "sass".into(),
      uri: lsp::Url::from_file_path(std::env::temp_dir().join("main.sass"))
        .unwrap(),
      version: 1,
    }
  }
}

impl From<lsp::DidOpenTextDocumentParams> for Document {
  fn from(params: lsp::DidOpenTextDocumentParams) -> Self {
    let lsp::TextDocumentItem {
      language_id,
      text,
      uri,
      version,
    } = params.text_document;

    Self {
      content: Rope::from_str(&text),
      language_id,
      uri,
      version,
    }
  }
}

impl Document {
  pub(crate) fn apply_change(
    &mut self,
    params: lsp::DidChangeTextDocumentParams,
  ) {
    let lsp::DidChangeTextDocumentParams {
      content_changes,
      text_document: lsp::VersionedTextDocumentIdentifier { version, .. },
      ..
    } = params;

    self.version = version;

    for change in content_changes {
      self.content.apply_edit(&self.content.build_edit(&change));
    }
  }

  /// Reads a document from disk, guessing the language from the extension.
  pub(crate) fn from_path(path: &Path) -> Result<Self> {
    let text = fs::read_to_string(path)
      .with_context(|| format!("failed to read `{}`", path.display()))?;

    let path = std::path::absolute(path).with_context(|| {
      format!("failed to make `{}` absolute", path.display())
    })?;

    let uri = lsp::Url::from_file_path(&path)
      .map_err(|()| anyhow!("invalid document path `{}`", path.display()))?;

    let language_id = match path.extension().and_then(|ext| ext.to_str()) {
      Some(extension @ ("svelte" | "vue")) => extension,
      _ => "sass",
    };

    Ok(Self {
      content: Rope::from_str(&text),
      language_id: language_id.into(),
      uri,
      version: 0,
    })
  }

  /// Vue and Svelte files only contain Sass inside style blocks.
  pub(crate) fn is_embedded(&self) -> bool {
    matches!(self.language_id.as_str(), "svelte" | "vue")
  }

  pub(crate) fn path(&self) -> Option<PathBuf> {
    self.uri.to_file_path().ok().map(|path| path.normalize())
  }

  pub(crate) fn text(&self) -> String {
    self.content.to_string()
  }

  #[cfg(test)]
  pub(crate) fn with_uri(self, uri: lsp::Url, language_id: &str) -> Self {
    Self {
      language_id: language_id.into(),
      uri,
      ..self
    }
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    pretty_assertions::{assert_eq, assert_ne},
  };

  #[test]
  fn create_document() {
    let content = indoc! {"
      .button
        color: red
    "};

    let document = Document::from(content);

    assert_eq!(document.text(), content);
    assert!(!document.is_embedded());
  }

  #[test]
  fn apply_change() {
    let mut document = Document::from(indoc! {"
      .button
        color: red
    "});

    let original_content = document.text();

    let change = lsp::DidChangeTextDocumentParams {
      text_document: lsp::VersionedTextDocumentIdentifier {
        uri: lsp::Url::parse("file:///main.sass").unwrap(),
        version: 2,
      },
      content_changes: vec![lsp::TextDocumentContentChangeEvent {
        range: Some(lsp::Range::new(
          lsp::Position::new(1, 9),
          lsp::Position::new(1, 12),
        )),
        range_length: None,
        text: "blue".to_string(),
      }],
    };

    document.apply_change(change);

    assert_ne!(document.text(), original_content);

    assert_eq!(document.text(), ".button\n  color: blue\n");
    assert_eq!(document.version, 2);
  }

  #[test]
  fn embedded_languages() {
    let document = Document::from("").with_uri(
      lsp::Url::parse("file:///app/App.vue").unwrap(),
      "vue",
    );

    assert!(document.is_embedded());
  }

  #[test]
  #[cfg(unix)]
  fn path_is_normalized() {
    let document = Document::from("").with_uri(
      lsp::Url::parse("file:///app/styles/../main.sass").unwrap(),
      "sass",
    );

    assert_eq!(document.path(), Some(PathBuf::from("/app/main.sass")));
  }

  #[test]
  fn from_path_reads_file() {
    let dir = tempfile::TempDir::new().unwrap();

    let path = dir.path().join("App.svelte");

    fs::write(&path, "<style lang=\"sass\">\n</style>\n").unwrap();

    let document = Document::from_path(&path).unwrap();

    assert_eq!(document.language_id, "svelte");
    assert!(document.text().starts_with("<style"));
  }

  #[test]
  fn from_path_missing_file() {
    let dir = tempfile::TempDir::new().unwrap();

    assert!(
      Document::from_path(&dir.path().join("missing.sass"))
        .unwrap_err()
        .to_string()
        .starts_with("failed to read")
    );
  }
}
