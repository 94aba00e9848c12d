use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Edit<'a> {
  pub(crate) end_char: usize,
  pub(crate) start_char: usize,
  pub(crate) text: &'a str,
}

pub(crate) trait RopeExt {
  fn apply_edit(&mut self, edit: &Edit);

  /// Builds an edit description from an incoming LSP content change.
  fn build_edit<'a>(
    &self,
    change: &'a lsp::TextDocumentContentChangeEvent,
  ) -> Edit<'a>;

  /// Text between the start of the line and `position`. Empty when the line
  /// does not exist, and cut at the end of the line when the character is
  /// past it.
  fn line_prefix(&self, position: lsp::Position) -> String;

  /// The text of line `row` without its line ending.
  fn line_text(&self, row: usize) -> Option<String>;

  /// Converts an LSP position into an absolute char offset, clamped to the
  /// end of its line and to the end of the document.
  fn lsp_position_to_char(&self, position: lsp::Position) -> usize;
}

impl RopeExt for Rope {
  fn apply_edit(&mut self, edit: &Edit) {
    self.remove(edit.start_char..edit.end_char);

    if !edit.text.is_empty() {
      self.insert(edit.start_char, edit.text);
    }
  }

  /// A change without a range replaces the whole document.
  fn build_edit<'a>(
    &self,
    change: &'a lsp::TextDocumentContentChangeEvent,
  ) -> Edit<'a> {
    let text = change.text.as_str();

    let Some(range) = change.range else {
      return Edit {
        end_char: self.len_chars(),
        start_char: 0,
        text,
      };
    };

    let (start, end) = (
      self.lsp_position_to_char(range.start),
      self.lsp_position_to_char(range.end),
    );

    Edit {
      end_char: end.max(start),
      start_char: start,
      text,
    }
  }

  fn line_prefix(&self, position: lsp::Position) -> String {
    let Some(line) = self.line_text(position.line as usize) else {
      return String::new();
    };

    let mut units = 0;

    let mut end = 0;

    for (index, char) in line.char_indices() {
      units += char.len_utf16();

      if units > position.character as usize {
        break;
      }

      end = index + char.len_utf8();
    }

    line[..end].to_string()
  }

  fn line_text(&self, row: usize) -> Option<String> {
    let line = self.get_line(row)?.to_string();

    Some(line.trim_end_matches(['\n', '\r']).to_string())
  }

  /// Columns are counted in UTF-16 code units.
  fn lsp_position_to_char(&self, position: lsp::Position) -> usize {
    let row = position.line as usize;

    if row >= self.len_lines() {
      return self.len_chars();
    }

    let row_length = self
      .line_text(row)
      .map_or(0, |line| line.encode_utf16().count());

    self.utf16_cu_to_char(
      self.char_to_utf16_cu(self.line_to_char(row))
        + (position.character as usize).min(row_length),
    )
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  fn change(
    text: &str,
    (start_line, start_character): (u32, u32),
    (end_line, end_character): (u32, u32),
  ) -> lsp::TextDocumentContentChangeEvent {
    lsp::TextDocumentContentChangeEvent {
      range: Some(lsp::Range::new(
        lsp::Position::new(start_line, start_character),
        lsp::Position::new(end_line, end_character),
      )),
      range_length: None,
      text: text.into(),
    }
  }

  fn edited(
    text: &str,
    change: &lsp::TextDocumentContentChangeEvent,
  ) -> String {
    let mut rope = Rope::from_str(text);

    let edit = rope.build_edit(change);

    rope.apply_edit(&edit);

    rope.to_string()
  }

  #[test]
  fn insert_into_empty_document() {
    assert_eq!(edited("", &change(".a\n  b", (0, 0), (0, 0))), ".a\n  b");
  }

  #[test]
  fn replace_value_on_line() {
    let mut rope = Rope::from_str(".a\n  color: red\n");

    let change = change("blue", (1, 9), (1, 12));

    let edit = rope.build_edit(&change);

    assert_eq!(
      edit,
      Edit {
        end_char: 15,
        start_char: 12,
        text: "blue",
      }
    );

    rope.apply_edit(&edit);

    assert_eq!(rope.to_string(), ".a\n  color: blue\n");
  }

  #[test]
  fn columns_are_utf16_code_units() {
    assert_eq!(edited("a😊b", &change("", (0, 1), (0, 3))), "ab");
    assert_eq!(
      edited("foo😊bar", &change("🧪", (0, 3), (0, 5))),
      "foo🧪bar"
    );
  }

  #[test]
  fn multiline_edit() {
    assert_eq!(
      edited("foo😊\nbar", &change("XX", (0, 2), (1, 1))),
      "foXXar"
    );
  }

  #[test]
  fn positions_past_the_end_are_clamped() {
    let rope = Rope::from_str("ab\ncd");

    assert_eq!(rope.lsp_position_to_char(lsp::Position::new(0, 9)), 2);
    assert_eq!(rope.lsp_position_to_char(lsp::Position::new(5, 0)), 5);
    assert_eq!(edited("ab\ncd", &change("!", (0, 40), (0, 40))), "ab!\ncd");
  }

  #[test]
  fn change_without_range_replaces_document() {
    let change = lsp::TextDocumentContentChangeEvent {
      range: None,
      range_length: None,
      text: "$a: 1".into(),
    };

    assert_eq!(edited("foo😊bar", &change), "$a: 1");
  }

  #[test]
  fn line_prefix_stops_at_cursor() {
    let rope = Rope::from_str("a\n  color: red\n");

    assert_eq!(rope.line_prefix(lsp::Position::new(1, 8)), "  color:");
    assert_eq!(rope.line_prefix(lsp::Position::new(1, 0)), "");
  }

  #[test]
  fn line_prefix_counts_utf16_columns() {
    let rope = Rope::from_str("😊ab");

    assert_eq!(rope.line_prefix(lsp::Position::new(0, 3)), "😊a");
    assert_eq!(rope.line_prefix(lsp::Position::new(0, 1)), "");
  }

  #[test]
  fn line_prefix_out_of_range() {
    let rope = Rope::from_str("one\r\ntwo");

    assert_eq!(rope.line_prefix(lsp::Position::new(0, 99)), "one");
    assert_eq!(rope.line_prefix(lsp::Position::new(7, 0)), "");
  }

  #[test]
  fn line_text_strips_line_endings() {
    let rope = Rope::from_str("one\r\ntwo\n");

    assert_eq!(rope.line_text(0).as_deref(), Some("one"));
    assert_eq!(rope.line_text(1).as_deref(), Some("two"));
    assert_eq!(rope.line_text(2).as_deref(), Some(""));
    assert_eq!(rope.line_text(3), None);
  }
}
