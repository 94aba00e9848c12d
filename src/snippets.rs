//! Fixed snippet tables: Sass at-rules, comment snippets, global Sass
//! functions and CSS units.

/// `(label, snippet body, description)`
pub(crate) const AT_RULES: &[(&str, &str, &str)] = &[
  (
    "@debug",
    "@debug ",
    "Prints the value to the standard error output stream",
  ),
  (
    "@warn",
    "@warn ",
    "Prints the value to the standard error output stream",
  ),
  ("@error", "@error ", "Throws the value as a fatal error"),
  (
    "@extend",
    "@extend ",
    "Inherit the styles of another selector",
  ),
  (
    "@at-root",
    "@at-root ",
    "Causes one or more rules to be emitted at the root of the document",
  ),
  (
    "@if",
    "@if ${1:statement}\n\t$0 ",
    "@if statement (e.g @if 1 + 1 == 2)",
  ),
  (
    "@for",
    "@for $${1:var} from ${2:1} through ${3:10}\n\t$0 ",
    "Create a new for loop",
  ),
  ("@else", "@else \n\t$0", "@else"),
  (
    "@each",
    "@each $${1:var} in ${2:list/map}\n\t$0 ",
    "Create a new for each loop",
  ),
  (
    "@import",
    "@import ${1:filePath}",
    "Includes content of another file, will be deprecated in the future, use @use if possible.",
  ),
  (
    "@use",
    "@use ${1|'filepath','sass:math','sass:color','sass:string','sass:list','sass:map','sass:selector','sass:meta'|}",
    "Includes content of another file or loads a built-in module.",
  ),
  (
    "@forward",
    "@forward '${1:filepath}'",
    "Exports a module without making it available in the current file",
  ),
  (
    "@media",
    "@media ${1:screen} ${2:and} ( ${3|max-width: ,min-width: ,max-height: ,min-height: |} )\n\t$0",
    "@media",
  ),
  (
    "@function",
    "@function ${1:name}($2)\n\t$3\n\t@return ${4:value}",
    "Creates a Sass function",
  ),
  ("@mixin", "@mixin ${1:name}($2)\n\t$0", "Create a new mixin"),
  (
    "@include",
    "@include ${1:mixin-name}",
    "Includes a mixin into the current context",
  ),
  (
    "@keyframes",
    "@keyframes ${1:name}\n\t0%\n\t\t$2\n\t100%\n\t\t$3",
    "Create a new animation",
  ),
  (
    "@while",
    "@while $${1:i} ${2:statement}\n\t$0\n\t$${1:i}: $${1:i} ${3://increment/decrement}",
    "Create a new while loop",
  ),
];

/// `(label, snippet body, description)`
pub(crate) const COMMENTS: &[(&str, &str, &str)] = &[
  (
    "// region",
    "// region ${1:name}\n$0\n// endregion",
    "Foldable region",
  ),
  ("// endregion", "// endregion", "Ends a foldable region"),
  (
    "// import css-variables from",
    "// import css-variables from '${1:filepath}'",
    "Makes the css variables declared in another file available",
  ),
];

/// Global (module-less) Sass functions offered in value position.
///
/// `(label, snippet body, description)`
pub(crate) const FUNCTIONS: &[(&str, &str, &str)] = &[
  (
    "rgb",
    "rgb(${1:red}, ${2:green}, ${3:blue})",
    "Creates a color from red, green and blue values",
  ),
  (
    "rgba",
    "rgba(${1:color}, ${2:alpha})",
    "Creates a color with the given alpha channel",
  ),
  (
    "hsl",
    "hsl(${1:hue}, ${2:saturation}, ${3:lightness})",
    "Creates a color from hue, saturation and lightness values",
  ),
  (
    "hsla",
    "hsla(${1:hue}, ${2:saturation}, ${3:lightness}, ${4:alpha})",
    "Creates a color from hue, saturation, lightness and alpha values",
  ),
  (
    "lighten",
    "lighten(${1:color}, ${2:amount})",
    "Makes a color lighter",
  ),
  (
    "darken",
    "darken(${1:color}, ${2:amount})",
    "Makes a color darker",
  ),
  (
    "saturate",
    "saturate(${1:color}, ${2:amount})",
    "Makes a color more saturated",
  ),
  (
    "desaturate",
    "desaturate(${1:color}, ${2:amount})",
    "Makes a color less saturated",
  ),
  (
    "adjust-hue",
    "adjust-hue(${1:color}, ${2:degrees})",
    "Changes the hue of a color",
  ),
  (
    "mix",
    "mix(${1:color1}, ${2:color2}, ${3:weight})",
    "Mixes two colors together",
  ),
  (
    "complement",
    "complement(${1:color})",
    "Returns the complement of a color",
  ),
  (
    "invert",
    "invert(${1:color})",
    "Returns the inverse of a color",
  ),
  (
    "grayscale",
    "grayscale(${1:color})",
    "Converts a color to grayscale",
  ),
  (
    "transparentize",
    "transparentize(${1:color}, ${2:amount})",
    "Makes a color more transparent",
  ),
  (
    "opacify",
    "opacify(${1:color}, ${2:amount})",
    "Makes a color more opaque",
  ),
  (
    "percentage",
    "percentage(${1:number})",
    "Converts a unitless number to a percentage",
  ),
  (
    "round",
    "round(${1:number})",
    "Rounds a number to the nearest whole number",
  ),
  ("ceil", "ceil(${1:number})", "Rounds a number up"),
  ("floor", "floor(${1:number})", "Rounds a number down"),
  ("abs", "abs(${1:number})", "Returns the absolute value"),
  ("min", "min(${1:numbers})", "Returns the minimum of several numbers"),
  ("max", "max(${1:numbers})", "Returns the maximum of several numbers"),
  ("random", "random(${1:limit})", "Returns a random number"),
  ("unquote", "unquote(${1:string})", "Removes quotes from a string"),
  ("quote", "quote(${1:string})", "Adds quotes to a string"),
  (
    "if",
    "if(${1:condition}, ${2:if-true}, ${3:if-false})",
    "Returns one of two values depending on a condition",
  ),
  ("nth", "nth(${1:list}, ${2:n})", "Returns the nth item of a list"),
  ("length", "length(${1:list})", "Returns the length of a list"),
  (
    "map-get",
    "map-get(${1:map}, ${2:key})",
    "Returns the value of a key in a map",
  ),
  (
    "map-merge",
    "map-merge(${1:map1}, ${2:map2})",
    "Merges two maps into a new map",
  ),
  ("type-of", "type-of(${1:value})", "Returns the type of a value"),
  ("unit", "unit(${1:number})", "Returns the unit of a number"),
];

/// `(suffix, snippet suffix, description)`
pub(crate) const UNITS: &[(&str, &str, &str)] = &[
  ("px", "px", "Pixels, 1px = 1/96th of 1in"),
  ("em", "em", "Relative to the font-size of the element"),
  ("rem", "rem", "Relative to the font-size of the root element"),
  ("%", "%", "Percentage relative to the parent value"),
  ("vh", "vh", "Relative to 1% of the height of the viewport"),
  ("vw", "vw", "Relative to 1% of the width of the viewport"),
  (
    "vmin",
    "vmin",
    "Relative to 1% of the viewport's smaller dimension",
  ),
  (
    "vmax",
    "vmax",
    "Relative to 1% of the viewport's larger dimension",
  ),
  ("ch", "ch", "Relative to the width of the \"0\" (zero)"),
  ("ex", "ex", "Relative to the x-height of the current font"),
  ("cm", "cm", "Centimeters"),
  ("mm", "mm", "Millimeters"),
  ("in", "in", "Inches, 1in = 96px = 2.54cm"),
  ("pt", "pt", "Points, 1pt = 1/72 of 1in"),
  ("pc", "pc", "Picas, 1pc = 12 pt"),
  ("deg", "deg", "Degrees"),
  ("rad", "rad", "Radians"),
  ("turn", "turn", "Turns, 1turn = 360deg"),
  ("s", "s", "Seconds"),
  ("ms", "ms", "Milliseconds"),
  ("fr", "fr", "Fraction of the free space in a grid container"),
];
