use super::*;

const LINE_STYLE_VALUES: &[(&str, Option<&str>)] = &[
  ("dashed", Some("A series of square-ended dashes.")),
  ("dotted", Some("A series of round dots.")),
  (
    "double",
    Some("Two parallel solid lines with some space between them."),
  ),
  ("groove", Some("Looks as if it were carved in the canvas.")),
  (
    "hidden",
    Some(
      "Same as ‘none’, but has different behavior in the border conflict resolution rules for border-collapsed tables.",
    ),
  ),
  (
    "inset",
    Some(
      "Looks as if the content on the inside of the border is sunken into the canvas.",
    ),
  ),
  ("none", Some("No border. Color and width are ignored.")),
  (
    "outset",
    Some(
      "Looks as if the content on the inside of the border is coming out of the canvas.",
    ),
  ),
  ("ridge", Some("Looks as if it were coming out of the canvas.")),
  ("solid", Some("A single line segment.")),
];

const LINE_WIDTH_VALUES: &[(&str, Option<&str>)] =
  &[("medium", None), ("thick", None), ("thin", None)];

const POSITION_VALUES: &[(&str, Option<&str>)] = &[
  (
    "bottom",
    Some(
      "Computes to ‘100%’ for the vertical position if one or two values are given, otherwise specifies the bottom edge as the origin for the next offset.",
    ),
  ),
  (
    "center",
    Some(
      "Computes to ‘50%’ (‘left 50%’) for the horizontal position if the horizontal position is not otherwise specified, or ‘50%’ (‘top 50%’) for the vertical position if it is.",
    ),
  ),
  (
    "left",
    Some(
      "Computes to ‘0%’ for the horizontal position if one or two values are given, otherwise specifies the left edge as the origin for the next offset.",
    ),
  ),
  (
    "right",
    Some(
      "Computes to ‘100%’ for the horizontal position if one or two values are given, otherwise specifies the right edge as the origin for the next offset.",
    ),
  ),
  (
    "top",
    Some(
      "Computes to ‘0%’ for the vertical position if one or two values are given, otherwise specifies the top edge as the origin for the next offset.",
    ),
  ),
];

const REPEAT_VALUES: &[(&str, Option<&str>)] = &[
  (
    "no-repeat",
    Some("Placed once and not repeated in this direction."),
  ),
  (
    "repeat",
    Some(
      "Repeated in this direction as often as needed to cover the background painting area.",
    ),
  ),
  ("repeat-x", Some("Computes to ‘repeat no-repeat’.")),
  ("repeat-y", Some("Computes to ‘no-repeat repeat’.")),
  (
    "round",
    Some(
      "Repeated as often as will fit within the background positioning area. If it doesn’t fit a whole number of times, it is rescaled so that it does.",
    ),
  ),
  (
    "space",
    Some(
      "Repeated as often as will fit within the background positioning area without being clipped and then the images are spaced out to fill the area.",
    ),
  ),
];

/// Restrictions that expand into a fixed set of keyword values, in the order
/// they are appended after a property's own values.
const RESTRICTION_GROUPS: &[(&str, &[(&str, Option<&str>)])] = &[
  ("position", POSITION_VALUES),
  ("repeat", REPEAT_VALUES),
  ("line-style", LINE_STYLE_VALUES),
  ("line-width", LINE_WIDTH_VALUES),
];

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum EntityStatus {
  Experimental,
  Nonstandard,
  Obsolete,
  Standard,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(untagged)]
enum Description {
  Markup { value: String },
  Plain(String),
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub(crate) struct Reference {
  pub(crate) name: String,
  pub(crate) url: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub(crate) struct ValueData {
  #[serde(default)]
  description: Option<Description>,
  pub(crate) name: String,
}

impl ValueData {
  pub(crate) fn description(&self) -> Option<&str> {
    self.description.as_ref().map(Description::as_str)
  }
}

impl Description {
  fn as_str(&self) -> &str {
    match self {
      Self::Markup { value } | Self::Plain(value) => value,
    }
  }
}

/// A property, pseudo selector, at-directive or value from the bundled CSS
/// dictionary. Only properties carry `values` and `restrictions`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub(crate) struct RawCssEntity {
  #[serde(default)]
  description: Option<Description>,
  pub(crate) name: String,
  #[serde(default)]
  pub(crate) references: Vec<Reference>,
  #[serde(default)]
  pub(crate) restrictions: Vec<String>,
  #[serde(default)]
  pub(crate) status: Option<EntityStatus>,
  #[serde(default)]
  pub(crate) values: Option<Vec<ValueData>>,
}

impl RawCssEntity {
  pub(crate) fn description(&self) -> Option<&str> {
    self.description.as_ref().map(Description::as_str)
  }

  pub(crate) fn is_obsolete(&self) -> bool {
    self.status == Some(EntityStatus::Obsolete)
  }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CssData {
  #[serde(default)]
  at_directives: Vec<RawCssEntity>,
  #[serde(default)]
  properties: Vec<RawCssEntity>,
  #[serde(default)]
  pseudo_classes: Vec<RawCssEntity>,
  #[serde(default)]
  pseudo_elements: Vec<RawCssEntity>,
}

impl CssData {
  pub(crate) fn at_directives(&self) -> &[RawCssEntity] {
    &self.at_directives
  }

  pub(crate) fn get() -> &'static CssData {
    static DATA: OnceLock<CssData> = OnceLock::new();

    DATA.get_or_init(|| {
      serde_json::from_str(include_str!("../data/css-data.json"))
        .unwrap_or_else(|error| {
          panic!("failed to parse bundled css data: {error}")
        })
    })
  }

  pub(crate) fn lookup_property(&self, name: &str) -> Option<&RawCssEntity> {
    self.properties.iter().find(|property| property.name == name)
  }

  pub(crate) fn properties(&self) -> &[RawCssEntity] {
    &self.properties
  }

  /// Pseudo-classes followed by pseudo-elements.
  pub(crate) fn pseudos(&self) -> impl Iterator<Item = &RawCssEntity> {
    self.pseudo_classes.iter().chain(&self.pseudo_elements)
  }

  /// Every value a property accepts: its enumerated values first, then the
  /// keyword groups implied by its restrictions.
  pub(crate) fn property_values(
    property: &RawCssEntity,
  ) -> Vec<(&str, Option<&str>)> {
    let mut values = property
      .values
      .iter()
      .flatten()
      .map(|value| (value.name.as_str(), value.description()))
      .collect::<Vec<_>>();

    for (restriction, group) in RESTRICTION_GROUPS {
      if property.restrictions.iter().any(|r| r == restriction) {
        values.extend(group.iter().copied());
      }
    }

    values
  }
}
