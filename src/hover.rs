use super::*;

/// Documentation for the token under the cursor: a visible Sass symbol, or
/// a CSS property, at-directive or pseudo selector from the dictionary.
pub(crate) struct Hover<'a> {
  config: &'a Config,
  document: &'a Document,
  position: lsp::Position,
  store: &'a dyn SymbolStore,
  workspace_root: Option<&'a Path>,
}

impl<'a> Hover<'a> {
  fn css_documentation(token: &str) -> Option<String> {
    let data = CssData::get();

    let name = token.trim_end_matches(':');

    data
      .lookup_property(name)
      .or_else(|| data.at_directives().iter().find(|at| at.name == token))
      .or_else(|| data.pseudos().find(|pseudo| pseudo.name == token))
      .map(RawCssEntity::documentation)
  }

  pub(crate) fn hover(&self) -> Option<String> {
    let token = self.token()?;

    if let Some(markdown) = self.symbol_documentation(&token) {
      return Some(markdown);
    }

    Self::css_documentation(&token)
  }

  pub(crate) fn new(
    document: &'a Document,
    position: lsp::Position,
    config: &'a Config,
    store: &'a dyn SymbolStore,
    workspace_root: Option<&'a Path>,
  ) -> Self {
    Self {
      config,
      document,
      position,
      store,
      workspace_root,
    }
  }

  fn symbol_documentation(&self, token: &str) -> Option<String> {
    let path = self.document.path()?;

    let mut imports = Imports::parse(&self.document.text()).imports;

    imports.push(ImportEntry::current(&path));

    let import_base = self.config.import_base(self.workspace_root);

    let lookup = SymbolLookup::new(&path, import_base.as_deref(), self.store);

    let (entry, namespace) = lookup.find(&imports, token)?;

    let mut markdown = format!("```sass\n{}\n```", entry.item.detail);

    if let Some(namespace) = namespace {
      markdown.push_str(&format!("\n\nfrom `{namespace}`"));
    }

    Some(markdown)
  }

  /// The run of identifier characters around the cursor, including the
  /// `$`, `--`, `@`, `:` and namespace dot prefixes.
  fn token(&self) -> Option<String> {
    let line = self
      .document
      .content
      .line_text(self.position.line as usize)?;

    let cursor = self.document.content.line_prefix(self.position).len();

    let is_token = |c: char| c.is_alphanumeric() || "-_$@.:".contains(c);

    let start = line[..cursor]
      .char_indices()
      .rev()
      .take_while(|(_, c)| is_token(*c))
      .last()
      .map_or(cursor, |(index, _)| index);

    let end = line[cursor..]
      .char_indices()
      .find(|(_, c)| !is_token(*c))
      .map_or(line.len(), |(index, _)| cursor + index);

    let token = line[start..end].trim_end_matches(['.', ':']);

    let token = token
      .split_once('(')
      .map_or(token, |(name, _)| name);

    (!token.is_empty()).then(|| token.to_string())
  }
}
