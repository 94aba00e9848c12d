use super::*;

/// Candidate groups of the general branch.
#[derive(Debug, Default)]
pub(crate) struct Groups {
  pub(crate) at_rules: Vec<Candidate>,
  pub(crate) classes_and_ids: Vec<Candidate>,
  pub(crate) functions: Vec<Candidate>,
  pub(crate) global_scope_modules: Vec<Candidate>,
  pub(crate) html_elements: Vec<Candidate>,
  pub(crate) properties: Vec<Candidate>,
  pub(crate) property_scoped_modules: Vec<Candidate>,
  pub(crate) units: Vec<Candidate>,
  pub(crate) values: Vec<Candidate>,
  pub(crate) variables: Vec<Candidate>,
}

impl Groups {
  /// Concatenates the groups in presentation order. Each group keeps its
  /// own order, nothing is re-sorted or deduplicated.
  pub(crate) fn into_candidates(self) -> Vec<Candidate> {
    let Self {
      at_rules,
      classes_and_ids,
      functions,
      global_scope_modules,
      html_elements,
      properties,
      property_scoped_modules,
      units,
      values,
      variables,
    } = self;

    [
      properties,
      values,
      functions,
      units,
      variables,
      at_rules,
      classes_and_ids,
      property_scoped_modules,
      global_scope_modules,
      html_elements,
    ]
    .into_iter()
    .flatten()
    .collect()
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  fn group(label: &str) -> Vec<Candidate> {
    vec![
      Candidate::new(format!("{label}-1"), CandidateKind::Value),
      Candidate::new(format!("{label}-2"), CandidateKind::Value),
    ]
  }

  #[test]
  fn concatenates_in_presentation_order() {
    let groups = Groups {
      at_rules: group("at-rule"),
      classes_and_ids: group("class"),
      functions: group("function"),
      global_scope_modules: group("global"),
      html_elements: group("tag"),
      properties: group("property"),
      property_scoped_modules: group("scoped"),
      units: group("unit"),
      values: group("value"),
      variables: group("variable"),
    };

    assert_eq!(
      groups
        .into_candidates()
        .into_iter()
        .map(|candidate| candidate.label)
        .collect::<Vec<_>>(),
      vec![
        "property-1",
        "property-2",
        "value-1",
        "value-2",
        "function-1",
        "function-2",
        "unit-1",
        "unit-2",
        "variable-1",
        "variable-2",
        "at-rule-1",
        "at-rule-2",
        "class-1",
        "class-2",
        "scoped-1",
        "scoped-2",
        "global-1",
        "global-2",
        "tag-1",
        "tag-2",
      ]
    );
  }

  #[test]
  fn empty_groups() {
    assert!(Groups::default().into_candidates().is_empty());
  }
}
