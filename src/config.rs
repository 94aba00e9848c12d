use super::*;

/// Editor settings that shape completion, read from the `sass` section of
/// the client configuration.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct Config {
  pub(crate) disable_comment_completion: bool,
  pub(crate) disable_unit_completion: bool,
  /// Directory, relative to the workspace root, that import paths resolve
  /// against instead of the document's own directory.
  pub(crate) import_root: Option<String>,
  /// Bare pseudo selector names that are listed with a leading `*`.
  #[serde(alias = "andStared")]
  pub(crate) starred_pseudo_names: Vec<String>,
}

impl Config {
  /// Accepts either `{ "sass": { .. } }` or the section itself. Settings
  /// that fail to parse are reported and replaced by the defaults.
  pub(crate) fn from_settings(settings: Value) -> Self {
    let section = match settings {
      Value::Null => return Self::default(),
      Value::Object(mut object) if object.contains_key("sass") => {
        object.remove("sass").unwrap_or_default()
      }
      other => other,
    };

    match serde_json::from_value(section) {
      Ok(config) => config,
      Err(error) => {
        warn!("failed to parse `sass` configuration: {error}");
        Self::default()
      }
    }
  }

  /// The directory import paths resolve against, when an import root is
  /// configured and the workspace root is known.
  pub(crate) fn import_base(
    &self,
    workspace_root: Option<&Path>,
  ) -> Option<PathBuf> {
    let import_root = self.import_root.as_deref()?.trim();

    if import_root.is_empty() {
      return None;
    }

    Some(workspace_root?.join(import_root).normalize())
  }
}
