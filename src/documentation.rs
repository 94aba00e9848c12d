use super::*;

/// Markdown hard line break.
const LINE_BREAK: &str = "  \n";

impl EntityStatus {
  fn banner(self) -> &'static str {
    match self {
      Self::Experimental => {
        "⚠️ **Attention** this Property is **`Experimental`**.\n"
      }
      Self::Nonstandard => {
        "⚠️ **Attention** this Property is **`nonStandard`**.\n"
      }
      Self::Obsolete => "⛔️ **Attention** this Property is **`Obsolete`**.\n",
      Self::Standard => "",
    }
  }
}

impl RawCssEntity {
  /// Renders the hover/completion documentation for this entity: status
  /// banner, description, references (with a trailing web search link) and,
  /// for properties, the list of accepted values.
  pub(crate) fn documentation(&self) -> String {
    let mut markdown = self
      .status
      .map(EntityStatus::banner)
      .unwrap_or_default()
      .to_string();

    if let Some(description) = self.description() {
      markdown.push('\n');
      markdown.push_str(description);
    }

    let search = Reference {
      name: "Google".into(),
      url: format!("https://www.google.com/search?q=css+{}", self.name),
    };

    markdown.push_str("\n\n");

    markdown.push_str(
      &self
        .references
        .iter()
        .chain([&search])
        .map(|reference| format!("[{}]({})", reference.name, reference.url))
        .collect::<Vec<_>>()
        .join(LINE_BREAK),
    );

    let values = self.values.as_deref().unwrap_or_default();

    if !values.is_empty() {
      markdown.push_str("\n\n**Values**");

      for value in values {
        markdown.push_str("\n- ");
        markdown.push_str(&format!("**`{}`**", value.name));

        if let Some(description) = value.description() {
          markdown.push_str(&format!(" *{description}*"));
        }
      }
    }

    markdown
  }
}
