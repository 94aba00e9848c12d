use super::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SymbolKind {
  CssVariable,
  Function,
  Mixin,
  Variable,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct SymbolItem {
  pub(crate) detail: String,
  pub(crate) insert: String,
  pub(crate) kind: CandidateKind,
  pub(crate) title: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct SymbolEntry {
  pub(crate) item: SymbolItem,
  pub(crate) kind: SymbolKind,
}

/// Symbols declared in one file, in declaration order.
pub(crate) type SymbolCollection = IndexMap<String, SymbolEntry>;

/// Read access to the symbols of every indexed file, keyed by normalized
/// absolute path.
pub(crate) trait SymbolStore {
  fn get(&self, path: &Path) -> Option<&SymbolCollection>;
}

impl SymbolStore for HashMap<PathBuf, SymbolCollection> {
  fn get(&self, path: &Path) -> Option<&SymbolCollection> {
    HashMap::get(self, path)
  }
}

/// Walks the symbols visible from a document through its imports.
pub(crate) struct SymbolLookup<'a> {
  document_path: &'a Path,
  import_base: Option<&'a Path>,
  store: &'a dyn SymbolStore,
}

impl<'a> SymbolLookup<'a> {
  /// Finds the first visible symbol whose qualified title is `title`.
  pub(crate) fn find(
    &self,
    imports: &[ImportEntry],
    title: &str,
  ) -> Option<(SymbolEntry, Option<String>)> {
    let mut found = None;

    self.for_each_symbol(imports, |entry, namespace| {
      if Self::merge_namespace(&entry.item.title, namespace) == title {
        found = Some((entry.clone(), namespace.map(str::to_string)));
        return ControlFlow::Break(());
      }

      ControlFlow::Continue(())
    });

    found
  }

  /// Visits every symbol reachable through `imports`, in import order and
  /// then declaration order. Imports marked `css_vars_only` only expose css
  /// variables. Breaking out of `visit` ends the whole walk.
  pub(crate) fn for_each_symbol(
    &self,
    imports: &[ImportEntry],
    mut visit: impl FnMut(&SymbolEntry, Option<&str>) -> ControlFlow<()>,
  ) {
    for import in imports {
      let path = self.resolve(&import.path);

      let Some(collection) = self.lookup(&path) else {
        debug!("no symbols indexed for `{}`", path.display());
        continue;
      };

      for entry in collection.values() {
        if import.css_vars_only && entry.kind != SymbolKind::CssVariable {
          continue;
        }

        if visit(entry, import.namespace.as_deref()).is_break() {
          return;
        }
      }
    }
  }

  /// Falls back to the `_`-prefixed partial when the plain file is unknown.
  fn lookup(&self, path: &Path) -> Option<&'a SymbolCollection> {
    if let Some(collection) = self.store.get(path) {
      return Some(collection);
    }

    let file_name = path.file_name()?.to_string_lossy();

    self.store.get(&path.with_file_name(format!("_{file_name}")))
  }

  pub(crate) fn merge_namespace(text: &str, namespace: Option<&str>) -> String {
    match namespace {
      Some(namespace) => format!("{namespace}.{text}"),
      None => text.to_string(),
    }
  }

  pub(crate) fn new(
    document_path: &'a Path,
    import_base: Option<&'a Path>,
    store: &'a dyn SymbolStore,
  ) -> Self {
    Self {
      document_path,
      import_base,
      store,
    }
  }

  /// Resolves an import path against the configured import root, or the
  /// directory of the document when there is none.
  pub(crate) fn resolve(&self, path: &str) -> PathBuf {
    let path = Path::new(path);

    if path.is_absolute() {
      return path.normalize();
    }

    let base = match self.import_base {
      Some(base) => base.to_path_buf(),
      None => self
        .document_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default(),
    };

    base.join(path).normalize()
  }
}
