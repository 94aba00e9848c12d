//! Lexical predicates over the text between the start of a line and the
//! cursor. They encode the informal grammar of the indented syntax, so the
//! anchors matter: most operate on the trimmed word, `is_number` on the raw
//! prefix.

use super::*;

pattern!(at_rule, r"^[\t ]*@");
pattern!(class_or_id, r"^[\t ]*[#.%]");
pattern!(
  css_variable_import,
  r"^[\t ]*//[\t ]*import[\t ]*css-variables[\t ]*from"
);
pattern!(css_variable_accessor, r"var\([\w$-]*$");
pattern!(import_statement, r"^@import|^@use");
pattern!(mixin_header, r"^ *@mixin");
pattern!(number, r"^[\t ]*-?(?:\d+\.?\d*|\.\d+)$");
pattern!(path, r#"['"(][\w\-.]*/[\w\-./]*$"#);
pattern!(property, r"^[\t ]*[\w-]+[\t ]*:(?:[^:]|$)");
pattern!(style_block_close, r"</ *style *>");
pattern!(
  style_block_open,
  r#"^ *<[\w'"= ]*(?:lang|type)=['"](?:text/)?sass['"][\w'"= ]*>"#
);
pattern!(unindented, r"^\S");
pattern!(variable, r"^[\t ]*\$");

pub(crate) fn is_at_rule(text: &str) -> bool {
  at_rule().is_match(text)
}

pub(crate) fn is_class_or_id(text: &str) -> bool {
  class_or_id().is_match(text)
}

/// `var($` or `var(--name` without the closing parenthesis.
pub(crate) fn is_css_variable_accessor(text: &str) -> bool {
  css_variable_accessor().is_match(text)
}

/// `// import css-variables from`
pub(crate) fn is_css_variable_import(text: &str) -> bool {
  css_variable_import().is_match(text)
}

pub(crate) fn is_import_statement(text: &str) -> bool {
  import_statement().is_match(text)
}

pub(crate) fn is_mixin_header(line: &str) -> bool {
  mixin_header().is_match(line)
}

/// A bare number, optionally indented.
pub(crate) fn is_number(text: &str) -> bool {
  number().is_match(text)
}

/// Ends in something that looks like a file path, `'./`, `url(images/`.
pub(crate) fn is_path(text: &str) -> bool {
  path().is_match(text)
}

/// `name:` followed by anything but a second colon.
pub(crate) fn is_property(text: &str) -> bool {
  property().is_match(text)
}

pub(crate) fn is_style_block_close(line: &str) -> bool {
  style_block_close().is_match(line)
}

/// `<style lang="sass">` or `<style type="text/sass">`
pub(crate) fn is_style_block_open(line: &str) -> bool {
  style_block_open().is_match(line)
}

pub(crate) fn is_unindented(line: &str) -> bool {
  unindented().is_match(line)
}

pub(crate) fn is_variable(text: &str) -> bool {
  variable().is_match(text)
}

/// The path part of a css variable import comment.
pub(crate) fn strip_css_variable_import(text: &str) -> &str {
  css_variable_import()
    .find(text)
    .map_or(text, |found| &text[found.end()..])
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn properties() {
    assert!(is_property("color: "));
    assert!(is_property("  margin-top:"));
    assert!(is_property("color: var($"));
    assert!(!is_property("a::before"));
    assert!(!is_property("$size: 10px"));
    assert!(!is_property("color"));
  }

  #[test]
  fn variables() {
    assert!(is_variable("$"));
    assert!(is_variable("  $size"));
    assert!(!is_variable("color: $"));
  }

  #[test]
  fn numbers() {
    assert!(is_number("10"));
    assert!(is_number("  1.5"));
    assert!(is_number(".5"));
    assert!(is_number("-2"));
    assert!(!is_number("10px"));
    assert!(!is_number("width: 10"));
    assert!(!is_number(""));
  }

  #[test]
  fn paths() {
    assert!(is_path("background: url('./img/"));
    assert!(is_path("background: url(images/"));
    assert!(is_path("src: '../fonts"));
    assert!(is_path("background: url(/img"));
    assert!(!is_path("font: 12px/1.5"));
    assert!(!is_path("width: 100% /"));
    assert!(!is_path("font: 12px /"));
    assert!(!is_path("color: red"));
  }

  #[test]
  fn selectors_and_at_rules() {
    assert!(is_class_or_id(".button"));
    assert!(is_class_or_id("  #header"));
    assert!(is_class_or_id("%placeholder"));
    assert!(!is_class_or_id("div"));
    assert!(is_at_rule("@inc"));
    assert!(!is_at_rule("color"));
  }

  #[test]
  fn import_statements() {
    assert!(is_import_statement("@use 'foo"));
    assert!(is_import_statement("@import "));
    assert!(!is_import_statement("@include"));
    assert!(is_css_variable_import("// import css-variables from '"));
    assert!(is_css_variable_import("  //import css-variables from"));
    assert!(!is_css_variable_import("// import something"));
    assert_eq!(
      strip_css_variable_import("// import css-variables from 'vars'"),
      " 'vars'"
    );
  }

  #[test]
  fn css_variable_accessors() {
    assert!(is_css_variable_accessor("color: var($"));
    assert!(is_css_variable_accessor("color: var(--pri"));
    assert!(is_css_variable_accessor("color: var("));
    assert!(!is_css_variable_accessor("color: var(--a)"));
  }

  #[test]
  fn style_blocks() {
    assert!(is_style_block_open("<style lang=\"sass\">"));
    assert!(is_style_block_open("<style scoped lang='sass'>"));
    assert!(is_style_block_open("<style type=\"text/sass\">"));
    assert!(!is_style_block_open("<style lang=\"scss\">"));
    assert!(is_style_block_close("</style>"));
    assert!(is_style_block_close("  </ style >"));
  }

  #[test]
  fn mixin_headers() {
    assert!(is_mixin_header("@mixin button($size)"));
    assert!(is_mixin_header("  @mixin nested"));
    assert!(!is_mixin_header("\t@mixin tabbed"));
    assert!(is_unindented("@mixin button"));
    assert!(!is_unindented("  color: red"));
    assert!(!is_unindented(""));
  }
}
