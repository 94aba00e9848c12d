use super::*;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DirEntry {
  pub(crate) is_directory: bool,
  pub(crate) name: String,
}

/// The file system operations completion needs, injected so requests can be
/// served against a fake in tests.
pub(crate) trait FileSystem: Send + Sync {
  fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

  fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Disk;

impl FileSystem for Disk {
  fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(path)? {
      let entry = entry?;

      entries.push(DirEntry {
        is_directory: entry.file_type()?.is_dir(),
        name: entry.file_name().to_string_lossy().into_owned(),
      });
    }

    Ok(entries)
  }

  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
  }
}
