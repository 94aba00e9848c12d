use super::*;

pattern!(as_clause, r"[\t ]+as[\t ]+(\S*)");
pattern!(
  import_path,
  r#"^[\t ]*(?:@import|@use)[\t ]*['"]?(.*?)['"]?[\t ]*(?:[\t ]+as.*)?$"#
);
pattern!(statement, r"^[\t ]*(@import|@use)");
pattern!(
  typed_path,
  r#"(?:@import|@use|//[\t ]*import[\t ]*css-variables[\t ]*from)[\t ]*['"]?([\w-]*)['"]?"#
);

/// A file made visible to the current document.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ImportEntry {
  /// Only css variables of the file are visible.
  pub(crate) css_vars_only: bool,
  /// Prefix qualifying the file's symbols, `None` for `@import` and `as *`.
  pub(crate) namespace: Option<String>,
  pub(crate) path: String,
}

impl ImportEntry {
  /// The document itself, visible without a namespace.
  pub(crate) fn current(path: &Path) -> Self {
    Self {
      css_vars_only: false,
      namespace: None,
      path: path.to_string_lossy().into_owned(),
    }
  }
}

/// Everything a document pulls in through import statements.
#[derive(Debug, Default)]
pub(crate) struct Imports {
  /// Members of modules that are useful anywhere, `sass:selector`.
  pub(crate) global_scope_modules: Vec<Candidate>,
  pub(crate) imports: Vec<ImportEntry>,
  /// Members of modules that only make sense inside a declaration value.
  pub(crate) property_scoped_modules: Vec<Candidate>,
}

impl Imports {
  fn add_extension(path: &str) -> String {
    if path.ends_with(".sass") {
      path.to_string()
    } else {
      format!("{path}.sass")
    }
  }

  /// `foo/_bar.sass` and `sass:bar` are both loaded under `bar`.
  fn default_namespace(path: &str) -> Option<String> {
    let name = path.rsplit(['/', ':']).next()?;

    let name = name.strip_suffix(".sass").unwrap_or(name);

    let name = name.strip_prefix('_').unwrap_or(name);

    (!name.is_empty()).then(|| name.to_string())
  }

  pub(crate) fn parse(text: &str) -> Self {
    let mut result = Self::default();

    for line in text.lines() {
      if predicates::is_css_variable_import(line) {
        result.push_css_variable_import(line);
        continue;
      }

      if line.trim_start().starts_with("//") {
        continue;
      }

      let Some(captures) = statement().captures(line) else {
        continue;
      };

      result.push_statement(line, &captures[1] == "@import");
    }

    result
  }

  fn push_css_variable_import(&mut self, line: &str) {
    let path = predicates::strip_css_variable_import(line)
      .trim()
      .trim_matches(['\'', '"'])
      .trim();

    self.imports.push(ImportEntry {
      css_vars_only: true,
      namespace: None,
      path: Self::add_extension(path),
    });
  }

  fn push_statement(&mut self, line: &str, is_import: bool) {
    let path = import_path()
      .captures(line)
      .and_then(|captures| captures.get(1))
      .map_or("", |path| path.as_str());

    let namespace = if is_import {
      None
    } else {
      match as_clause().captures(line) {
        Some(captures) => Some(captures[1].to_string()),
        None => Self::default_namespace(path),
      }
      .filter(|namespace| !namespace.is_empty() && namespace != "*")
    };

    if path.starts_with("sass:") {
      let Some(module) = BuiltinModule::from_path(path) else {
        debug!("ignoring unknown built-in module `{path}`");
        return;
      };

      let candidates = module.candidates(namespace.as_deref());

      if module.is_global_scope() {
        self.global_scope_modules.extend(candidates);
      } else {
        self.property_scoped_modules.extend(candidates);
      }

      return;
    }

    self.imports.push(ImportEntry {
      css_vars_only: false,
      namespace,
      path: Self::add_extension(path),
    });
  }

  /// The partial path typed after an import keyword, `@use 'foo/ba` gives
  /// `foo/ba`.
  pub(crate) fn typed_path(word: &str) -> String {
    typed_path().replace(word, "$1").trim().to_string()
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  fn entry(path: &str, namespace: Option<&str>) -> ImportEntry {
    ImportEntry {
      css_vars_only: false,
      namespace: namespace.map(str::to_string),
      path: path.into(),
    }
  }

  #[test]
  fn use_without_namespace_defaults_to_basename() {
    assert_eq!(
      Imports::parse("@use 'foo'").imports,
      vec![entry("foo.sass", Some("foo"))]
    );
  }

  #[test]
  fn use_with_namespace() {
    assert_eq!(
      Imports::parse("@use 'foo' as f").imports,
      vec![entry("foo.sass", Some("f"))]
    );
  }

  #[test]
  fn use_with_wildcard_namespace() {
    assert_eq!(
      Imports::parse("@use \"lib/colors\" as *").imports,
      vec![entry("lib/colors.sass", None)]
    );
  }

  #[test]
  fn import_never_has_a_namespace() {
    assert_eq!(
      Imports::parse("@import 'bar'\n@import 'baz' as b").imports,
      vec![entry("bar.sass", None), entry("baz.sass", None)]
    );
  }

  #[test]
  fn keeps_existing_extension() {
    assert_eq!(
      Imports::parse("@import bar.sass").imports,
      vec![entry("bar.sass", None)]
    );
  }

  #[test]
  fn partial_default_namespace_drops_underscore() {
    assert_eq!(
      Imports::parse("@use 'shared/_buttons'").imports,
      vec![entry("shared/_buttons.sass", Some("buttons"))]
    );
  }

  #[test]
  fn builtin_modules_are_not_imports() {
    let imports = Imports::parse("@use 'sass:math'");

    assert!(imports.imports.is_empty());
    assert!(imports.global_scope_modules.is_empty());
    assert!(
      imports
        .property_scoped_modules
        .iter()
        .any(|candidate| candidate.label == "math.div")
    );
  }

  #[test]
  fn selector_module_is_global() {
    let imports = Imports::parse("@use 'sass:selector' as sel");

    assert!(imports.property_scoped_modules.is_empty());
    assert!(
      imports
        .global_scope_modules
        .iter()
        .all(|candidate| candidate.label.starts_with("sel."))
    );
  }

  #[test]
  fn builtin_module_without_namespace_is_unqualified() {
    let imports = Imports::parse("@use 'sass:color' as *");

    assert!(
      imports
        .property_scoped_modules
        .iter()
        .any(|candidate| candidate.label == "adjust")
    );
  }

  #[test]
  fn skips_commented_statements() {
    let imports = Imports::parse(indoc! {"
      // @use 'ignored'
        // @import 'also-ignored'
      @use 'kept'
    "});

    assert_eq!(imports.imports, vec![entry("kept.sass", Some("kept"))]);
  }

  #[test]
  fn css_variable_import_comment() {
    let imports =
      Imports::parse("// import css-variables from 'theme/vars'\n");

    assert_eq!(
      imports.imports,
      vec![ImportEntry {
        css_vars_only: true,
        namespace: None,
        path: "theme/vars.sass".into(),
      }]
    );
  }

  #[test]
  fn indented_statements_are_found() {
    assert_eq!(
      Imports::parse("  @use 'nested' as n").imports,
      vec![entry("nested.sass", Some("n"))]
    );
  }

  #[test]
  fn malformed_statement_degrades_to_extension_only() {
    assert_eq!(
      Imports::parse("@import").imports,
      vec![entry(".sass", None)]
    );
  }

  #[test]
  fn preserves_statement_order() {
    let imports = Imports::parse(indoc! {"
      @use 'b'
      @import 'a'
      @use 'c' as see
    "});

    assert_eq!(
      imports.imports,
      vec![
        entry("b.sass", Some("b")),
        entry("a.sass", None),
        entry("c.sass", Some("see")),
      ]
    );
  }

  #[test]
  fn typed_path_after_keyword() {
    assert_eq!(Imports::typed_path("@use '"), "");
    assert_eq!(Imports::typed_path("@use 'foo/ba"), "foo/ba");
    assert_eq!(Imports::typed_path("@import partials"), "partials");
    assert_eq!(
      Imports::typed_path("// import css-variables from 'theme/"),
      "theme/"
    );
  }
}
