use super::*;

pattern!(attribute, r#"class=['"]([\w -]*)['"]|id=['"]([\w-]*)['"]"#);

const TAGS: &[&str] = &[
  "a",
  "abbr",
  "address",
  "area",
  "article",
  "aside",
  "audio",
  "b",
  "blockquote",
  "body",
  "br",
  "button",
  "canvas",
  "caption",
  "cite",
  "code",
  "col",
  "colgroup",
  "dd",
  "details",
  "dialog",
  "div",
  "dl",
  "dt",
  "em",
  "fieldset",
  "figcaption",
  "figure",
  "footer",
  "form",
  "h1",
  "h2",
  "h3",
  "h4",
  "h5",
  "h6",
  "header",
  "hr",
  "html",
  "i",
  "iframe",
  "img",
  "input",
  "label",
  "legend",
  "li",
  "main",
  "mark",
  "nav",
  "ol",
  "optgroup",
  "option",
  "p",
  "picture",
  "pre",
  "progress",
  "section",
  "select",
  "small",
  "span",
  "strong",
  "sub",
  "summary",
  "sup",
  "svg",
  "table",
  "tbody",
  "td",
  "textarea",
  "tfoot",
  "th",
  "thead",
  "time",
  "tr",
  "u",
  "ul",
  "video",
];

/// Selectors the document already declares on a line of their own.
fn declared_selectors(text: &str) -> HashSet<&str> {
  text
    .lines()
    .filter(|line| predicates::is_class_or_id(line))
    .map(str::trim)
    .collect()
}

/// Classes and ids used in the `<stem>.html` file next to the document that
/// the document does not style yet.
pub(crate) fn sibling_selectors(
  file_system: &dyn FileSystem,
  document_path: &Path,
  document_text: &str,
) -> Result<Vec<Candidate>> {
  let (Some(directory), Some(stem)) =
    (document_path.parent(), document_path.file_stem())
  else {
    return Ok(Vec::new());
  };

  let file_name = format!("{}.html", stem.to_string_lossy());

  let entries = file_system.list_dir(directory).with_context(|| {
    format!("failed to list directory `{}`", directory.display())
  })?;

  if !entries
    .iter()
    .any(|entry| !entry.is_directory && entry.name == file_name)
  {
    return Ok(Vec::new());
  }

  let path = directory.join(&file_name);

  let html = file_system
    .read_to_string(&path)
    .with_context(|| format!("failed to read `{}`", path.display()))?;

  let declared = declared_selectors(document_text);

  let mut seen = HashSet::new();

  let mut candidates = Vec::new();

  let mut push = |selector: String, detail: String| {
    if declared.contains(selector.as_str()) || !seen.insert(selector.clone())
    {
      return;
    }

    candidates.push(
      Candidate::new(selector.clone(), CandidateKind::Class)
        .with_snippet(format!("{selector}\n\t$0"))
        .with_detail(detail)
        .with_rank(7),
    );
  };

  for captures in attribute().captures_iter(&html) {
    if let Some(classes) = captures.get(1) {
      for class in classes.as_str().split(' ').filter(|c| !c.is_empty()) {
        push(format!(".{class}"), format!("Class From: {file_name}"));
      }
    } else if let Some(id) = captures.get(2) {
      if !id.as_str().is_empty() {
        push(format!("#{}", id.as_str()), format!("Id From: {file_name}"));
      }
    }
  }

  Ok(candidates)
}

/// Element selectors, unless the word already starts a class, id or
/// at-rule.
pub(crate) fn tags(word: &str) -> Vec<Candidate> {
  if predicates::is_class_or_id(word) || predicates::is_at_rule(word) {
    return Vec::new();
  }

  TAGS
    .iter()
    .map(|tag| Candidate::new(*tag, CandidateKind::Class).with_rank(3))
    .collect()
}
