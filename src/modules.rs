use super::*;

const COLOR: &[(&str, &str, &str)] = &[
  (
    "adjust",
    "adjust(${1:color}, ${2:\\$red: 0})",
    "Increases or decreases one or more properties of a color",
  ),
  (
    "change",
    "change(${1:color}, ${2:\\$alpha: 1})",
    "Sets one or more properties of a color to new values",
  ),
  (
    "scale",
    "scale(${1:color}, ${2:\\$lightness: 0%})",
    "Fluidly scales one or more properties of a color",
  ),
  ("mix", "mix(${1:color1}, ${2:color2})", "Mixes two colors together"),
  ("alpha", "alpha(${1:color})", "Returns the alpha channel of a color"),
  (
    "complement",
    "complement(${1:color})",
    "Returns the RGB complement of a color",
  ),
  (
    "grayscale",
    "grayscale(${1:color})",
    "Returns a gray color with the same lightness",
  ),
  ("invert", "invert(${1:color})", "Returns the inverse of a color"),
];

const LIST: &[(&str, &str, &str)] = &[
  (
    "append",
    "append(${1:list}, ${2:value})",
    "Returns a copy of the list with the value added to the end",
  ),
  (
    "index",
    "index(${1:list}, ${2:value})",
    "Returns the index of the value in the list",
  ),
  (
    "join",
    "join(${1:list1}, ${2:list2})",
    "Returns a list containing the elements of both lists",
  ),
  ("length", "length(${1:list})", "Returns the length of a list"),
  ("nth", "nth(${1:list}, ${2:n})", "Returns the element at index n"),
  (
    "set-nth",
    "set-nth(${1:list}, ${2:n}, ${3:value})",
    "Returns a copy of the list with the element at index n replaced",
  ),
  (
    "separator",
    "separator(${1:list})",
    "Returns the name of the list separator",
  ),
];

const MAP: &[(&str, &str, &str)] = &[
  ("get", "get(${1:map}, ${2:key})", "Returns the value for the key"),
  (
    "has-key",
    "has-key(${1:map}, ${2:key})",
    "Returns whether the map contains the key",
  ),
  ("keys", "keys(${1:map})", "Returns a list of all keys in the map"),
  (
    "merge",
    "merge(${1:map1}, ${2:map2})",
    "Returns a map with the keys of both maps",
  ),
  (
    "remove",
    "remove(${1:map}, ${2:keys})",
    "Returns a copy of the map without the keys",
  ),
  ("values", "values(${1:map})", "Returns a list of all values in the map"),
];

const MATH: &[(&str, &str, &str)] = &[
  ("abs", "abs(${1:number})", "Returns the absolute value"),
  ("ceil", "ceil(${1:number})", "Rounds up to the next whole number"),
  (
    "clamp",
    "clamp(${1:min}, ${2:number}, ${3:max})",
    "Restricts a number to the range between min and max",
  ),
  ("div", "div(${1:number1}, ${2:number2})", "Divides two numbers"),
  ("floor", "floor(${1:number})", "Rounds down to the previous whole number"),
  ("max", "max(${1:numbers})", "Returns the highest of the numbers"),
  ("min", "min(${1:numbers})", "Returns the lowest of the numbers"),
  (
    "percentage",
    "percentage(${1:number})",
    "Converts a unitless number to a percentage",
  ),
  ("pow", "pow(${1:base}, ${2:exponent})", "Raises base to a power"),
  ("random", "random(${1:limit})", "Returns a random number"),
  ("round", "round(${1:number})", "Rounds to the nearest whole number"),
  ("sqrt", "sqrt(${1:number})", "Returns the square root"),
  ("\\$pi", "\\$pi", "The closest double approximation of π"),
];

const META: &[(&str, &str, &str)] = &[
  (
    "call",
    "call(${1:function}, ${2:args})",
    "Invokes a function with the given arguments",
  ),
  (
    "get-function",
    "get-function(${1:name})",
    "Returns the function value named name",
  ),
  (
    "inspect",
    "inspect(${1:value})",
    "Returns a string representation of the value",
  ),
  (
    "load-css",
    "load-css(${1:url})",
    "Loads the module at url and includes its CSS",
  ),
  ("type-of", "type-of(${1:value})", "Returns the type of the value"),
  (
    "variable-exists",
    "variable-exists(${1:name})",
    "Returns whether a variable exists in the current scope",
  ),
];

const SELECTOR: &[(&str, &str, &str)] = &[
  (
    "append",
    "append(${1:selectors})",
    "Combines selectors without descendant combinators",
  ),
  (
    "extend",
    "extend(${1:selector}, ${2:extendee}, ${3:extender})",
    "Extends a selector like @extend",
  ),
  (
    "is-superselector",
    "is-superselector(${1:super}, ${2:sub})",
    "Returns whether super matches all elements sub matches",
  ),
  ("nest", "nest(${1:selectors})", "Combines selectors as nested"),
  ("parse", "parse(${1:selector})", "Returns a selector in value format"),
  (
    "replace",
    "replace(${1:selector}, ${2:original}, ${3:replacement})",
    "Replaces all instances of original with replacement",
  ),
  (
    "unify",
    "unify(${1:selector1}, ${2:selector2})",
    "Returns a selector matching only elements both match",
  ),
];

const STRING: &[(&str, &str, &str)] = &[
  (
    "index",
    "index(${1:string}, ${2:substring})",
    "Returns the first index of substring in string",
  ),
  (
    "insert",
    "insert(${1:string}, ${2:insert}, ${3:index})",
    "Returns a copy of string with insert inserted at index",
  ),
  ("length", "length(${1:string})", "Returns the number of characters"),
  ("quote", "quote(${1:string})", "Returns string as a quoted string"),
  (
    "slice",
    "slice(${1:string}, ${2:start-at}, ${3:end-at})",
    "Returns the slice of string",
  ),
  ("to-lower-case", "to-lower-case(${1:string})", "Lower-cases a string"),
  ("to-upper-case", "to-upper-case(${1:string})", "Upper-cases a string"),
  ("unique-id", "unique-id()", "Returns a random unquoted string"),
  ("unquote", "unquote(${1:string})", "Returns string as an unquoted string"),
];

/// A `sass:*` module loaded with `@use`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum BuiltinModule {
  Color,
  List,
  Map,
  Math,
  Meta,
  Selector,
  String,
}

impl BuiltinModule {
  /// Builds one candidate per module member, qualified with `namespace`
  /// when the module was loaded under one.
  pub(crate) fn candidates(self, namespace: Option<&str>) -> Vec<Candidate> {
    let module = self.name();

    self
      .members()
      .iter()
      .map(|(name, body, description)| {
        Candidate::new(
          SymbolLookup::merge_namespace(&name.replace('\\', ""), namespace),
          CandidateKind::Function,
        )
        .with_snippet(SymbolLookup::merge_namespace(body, namespace))
        .with_detail(format!("sass:{module}"))
        .with_documentation(*description)
        .with_rank(3)
      })
      .collect()
  }

  /// Resolves a `sass:<name>` import path.
  pub(crate) fn from_path(path: &str) -> Option<Self> {
    match path.strip_prefix("sass:")? {
      "color" => Some(Self::Color),
      "list" => Some(Self::List),
      "map" => Some(Self::Map),
      "math" => Some(Self::Math),
      "meta" => Some(Self::Meta),
      "selector" => Some(Self::Selector),
      "string" => Some(Self::String),
      _ => None,
    }
  }

  /// Selector functions are useful outside of declarations, every other
  /// module only in property values.
  pub(crate) fn is_global_scope(self) -> bool {
    self == Self::Selector
  }

  fn members(self) -> &'static [(&'static str, &'static str, &'static str)] {
    match self {
      Self::Color => COLOR,
      Self::List => LIST,
      Self::Map => MAP,
      Self::Math => MATH,
      Self::Meta => META,
      Self::Selector => SELECTOR,
      Self::String => STRING,
    }
  }

  fn name(self) -> &'static str {
    match self {
      Self::Color => "color",
      Self::List => "list",
      Self::Map => "map",
      Self::Math => "math",
      Self::Meta => "meta",
      Self::Selector => "selector",
      Self::String => "string",
    }
  }
}
