use super::*;

pattern!(css_variable, r"^[\t ]*(--[\w-]+)[\t ]*:[\t ]*(.*)$");
pattern!(function, r"^[\t ]*@function[\t ]+([\w-]+)[\t ]*(?:\((.*)\))?");
pattern!(mixin, r"^[\t ]*(?:@mixin[\t ]+|=)([\w-]+)[\t ]*(?:\((.*)\))?");
pattern!(variable, r"^\$([\w-]+)[\t ]*:[\t ]*(.*)$");

/// Collects the declarations of one file without parsing it.
///
/// Only top level variables are recorded, mixins, functions and custom
/// properties are recorded wherever they appear. A later declaration of the
/// same name replaces an earlier one but keeps its position.
pub(crate) struct Indexer;

impl Indexer {
  fn callable(
    name: &str,
    parameters: Option<&str>,
    keyword: &str,
    kind: SymbolKind,
  ) -> (String, SymbolEntry) {
    let parameters = parameters
      .map(|parameters| {
        parameters
          .split(',')
          .filter_map(|parameter| {
            let name = parameter.split(':').next()?.trim();
            let name = name.trim_start_matches('$');
            (!name.is_empty()).then_some(name)
          })
          .collect::<Vec<_>>()
      })
      .unwrap_or_default();

    let insert = if parameters.is_empty() {
      name.to_string()
    } else {
      let placeholders = parameters
        .iter()
        .enumerate()
        .map(|(i, parameter)| format!("${{{}:\\${parameter}}}", i + 1))
        .collect::<Vec<_>>()
        .join(", ");

      format!("{name}({placeholders})")
    };

    let detail = if parameters.is_empty() {
      format!("@{keyword} {name}")
    } else {
      format!(
        "@{keyword} {name}({})",
        parameters
          .iter()
          .map(|parameter| format!("${parameter}"))
          .collect::<Vec<_>>()
          .join(", ")
      )
    };

    (
      format!("@{keyword} {name}"),
      SymbolEntry {
        item: SymbolItem {
          detail,
          insert,
          kind: CandidateKind::Function,
          title: name.to_string(),
        },
        kind,
      },
    )
  }

  pub(crate) fn index(text: &str) -> SymbolCollection {
    let mut collection = SymbolCollection::new();

    for line in text.lines() {
      let (key, entry) = if let Some(captures) = variable().captures(line) {
        Self::value("$", &captures[1], &captures[2], SymbolKind::Variable)
      } else if let Some(captures) = css_variable().captures(line) {
        Self::value("", &captures[1], &captures[2], SymbolKind::CssVariable)
      } else if let Some(captures) = mixin().captures(line) {
        Self::callable(
          &captures[1],
          captures.get(2).map(|parameters| parameters.as_str()),
          "mixin",
          SymbolKind::Mixin,
        )
      } else if let Some(captures) = function().captures(line) {
        Self::callable(
          &captures[1],
          captures.get(2).map(|parameters| parameters.as_str()),
          "function",
          SymbolKind::Function,
        )
      } else {
        continue;
      };

      collection.insert(key, entry);
    }

    collection
  }

  fn value(
    sigil: &str,
    name: &str,
    value: &str,
    kind: SymbolKind,
  ) -> (String, SymbolEntry) {
    let title = format!("{sigil}{name}");

    (
      title.clone(),
      SymbolEntry {
        item: SymbolItem {
          detail: format!("{title}: {}", value.trim()),
          insert: title.clone(),
          kind: CandidateKind::Variable,
          title,
        },
        kind,
      },
    )
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  fn titles(collection: &SymbolCollection) -> Vec<(SymbolKind, &str)> {
    collection
      .values()
      .map(|entry| (entry.kind, entry.item.title.as_str()))
      .collect()
  }

  #[test]
  fn indexes_declarations_in_order() {
    let collection = Indexer::index(indoc! {"
      $size: 10px
      @mixin button($size, $color: red)
        padding: $size
      :root
        --primary: #333
      @function double($n)
        @return $n * 2
      =shorthand
    "});

    assert_eq!(
      titles(&collection),
      vec![
        (SymbolKind::Variable, "$size"),
        (SymbolKind::Mixin, "button"),
        (SymbolKind::CssVariable, "--primary"),
        (SymbolKind::Function, "double"),
        (SymbolKind::Mixin, "shorthand"),
      ]
    );
  }

  #[test]
  fn nested_variables_are_local() {
    let collection = Indexer::index(indoc! {"
      .a
        $local: 1px
    "});

    assert!(collection.is_empty());
  }

  #[test]
  fn variable_item() {
    let collection = Indexer::index("$gap :  4px  \n");

    assert_eq!(
      collection["$gap"].item,
      SymbolItem {
        detail: "$gap: 4px".into(),
        insert: "$gap".into(),
        kind: CandidateKind::Variable,
        title: "$gap".into(),
      }
    );
  }

  #[test]
  fn mixin_insert_is_a_snippet_over_parameters() {
    let collection = Indexer::index("@mixin button($size, $color: red)\n");

    let item = &collection["@mixin button"].item;

    assert_eq!(item.insert, "button(${1:\\$size}, ${2:\\$color})");
    assert_eq!(item.detail, "@mixin button($size, $color)");
  }

  #[test]
  fn mixin_without_parameters() {
    let collection = Indexer::index("@mixin reset\n");

    let item = &collection["@mixin reset"].item;

    assert_eq!(item.insert, "reset");
    assert_eq!(item.detail, "@mixin reset");
  }

  #[test]
  fn redeclaration_replaces_value() {
    let collection = Indexer::index("$a: 1\n$b: 2\n$a: 3\n");

    assert_eq!(
      titles(&collection),
      vec![(SymbolKind::Variable, "$a"), (SymbolKind::Variable, "$b")]
    );

    assert_eq!(collection["$a"].item.detail, "$a: 3");
  }
}
