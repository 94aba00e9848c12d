use super::*;

/// Symbols of every known file, keyed by normalized absolute path.
#[derive(Debug, Default)]
pub(crate) struct Workspace {
  files: HashMap<PathBuf, SymbolCollection>,
}

impl SymbolStore for Workspace {
  fn get(&self, path: &Path) -> Option<&SymbolCollection> {
    self.files.get(path)
  }
}

impl Workspace {
  pub(crate) fn index_document(&mut self, path: &Path, text: &str) {
    let symbols = Indexer::index(text);

    debug!("indexed {} symbols in `{}`", symbols.len(), path.display());

    self.files.insert(path.normalize(), symbols);
  }

  /// Indexes every `.sass` file below `root`, skipping `node_modules`.
  /// Returns the number of files indexed.
  pub(crate) fn index_root(&mut self, root: &Path) -> Result<usize> {
    let walker = GlobWalkerBuilder::from_patterns(
      root,
      &["**/*.sass", "!**/node_modules/**"],
    )
    .follow_links(false)
    .build()
    .map_err(|error| {
      anyhow!("failed to walk workspace `{}`: {error}", root.display())
    })?;

    let mut count = 0;

    for entry in walker {
      let entry = match entry {
        Ok(entry) => entry,
        Err(error) => {
          warn!("failed to read workspace entry: {error}");
          continue;
        }
      };

      if !entry.file_type().is_file() {
        continue;
      }

      let path = entry.into_path();

      match fs::read_to_string(&path) {
        Ok(text) => {
          self.index_document(&path, &text);
          count += 1;
        }
        Err(error) => warn!("failed to read `{}`: {error}", path.display()),
      }
    }

    Ok(count)
  }

  pub(crate) fn remove(&mut self, path: &Path) {
    self.files.remove(&path.normalize());
  }
}
