use super::*;

pub(crate) trait PathExt {
  /// Lexically resolves `.` and `..` components without touching the file
  /// system, so paths to files that do not exist yet still compare equal.
  fn normalize(&self) -> PathBuf;
}

impl PathExt for Path {
  fn normalize(&self) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in self.components() {
      match component {
        Component::CurDir => {}
        Component::ParentDir => match normalized.components().next_back() {
          Some(Component::Normal(_)) => {
            normalized.pop();
          }
          Some(Component::Prefix(_) | Component::RootDir) => {}
          _ => normalized.push(component),
        },
        Component::Normal(_) | Component::Prefix(_) | Component::RootDir => {
          normalized.push(component);
        }
      }
    }

    normalized
  }
}
