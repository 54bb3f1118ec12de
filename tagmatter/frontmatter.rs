//! Frontmatter region detection.
//!
//! Decides whether the cursor sits inside a frontmatter tags field, and in
//! which shape. A tags field comes in two forms:
//!
//! ```text
//! tags: alpha, beta        inline — values on the key line itself
//!
//! tags:                    list — a bare key line followed by
//!   - alpha                hyphen-bulleted item lines
//!   - beta
//! ```
//!
//! Classification is two-staged:
//!
//! 1. If the current line itself starts with `tags:`/`tag:` (any case), the
//!    field is [`FieldForm::Inline`]. An inline declaration is self-contained
//!    on one line, so no block scan is needed.
//! 2. Otherwise the text preceding the cursor is walked line by line through
//!    a small state machine (`BeforeBlock` → `InBlock` → `AfterBlock`). The
//!    block must open with `---` on line 0; a second `---` closes it and
//!    puts the cursor out of range. While inside the block, every line that
//!    looks like a top-level key (`identifier`, optional `:`, then
//!    whitespace or end of line) updates the active key; the nearest key
//!    line above the cursor decides. Active key `tags`/`tag` with a colon
//!    means [`FieldForm::List`].
//!
//! Anything malformed (no opener, closed block, foreign active key)
//! degrades to `None`. There is no error path here.

/// Shape of the tags field under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldForm {
  Inline,
  List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
  BeforeBlock,
  InBlock,
  AfterBlock,
}

/// Classify the cursor position. `text_before_cursor` spans from the start
/// of the document up to the cursor; `current_line` is the full text of the
/// cursor's line.
pub fn classify(text_before_cursor: &str, current_line: &str) -> Option<FieldForm> {
  if line_starts_tag_key(current_line) {
    tracing::trace!("current line declares an inline tags field");
    return Some(FieldForm::Inline);
  }

  if in_list_field(text_before_cursor) {
    tracing::trace!("cursor is inside a multi-line tags field");
    return Some(FieldForm::List);
  }

  None
}

/// Does this line open an inline tags declaration (`tags: ...` / `tag: ...`)?
/// A plain prefix test: the value may follow the colon with or without a
/// space.
fn line_starts_tag_key(line: &str) -> bool {
  has_prefix_ignore_case(line, "tags:") || has_prefix_ignore_case(line, "tag:")
}

/// Case-insensitive ASCII prefix test. `prefix` must be ASCII.
fn has_prefix_ignore_case(line: &str, prefix: &str) -> bool {
  line.len() >= prefix.len()
    && line.is_char_boundary(prefix.len())
    && line[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Walk the text before the cursor and decide whether its last line falls
/// under an open frontmatter block whose active key is `tags`/`tag`.
fn in_list_field(text: &str) -> bool {
  let mut state = ScanState::BeforeBlock;
  let mut under_tags_key = false;

  for (row, line) in text.split('\n').enumerate() {
    let line = line.strip_suffix('\r').unwrap_or(line);

    state = match state {
      ScanState::BeforeBlock => {
        // Frontmatter always opens at line 0.
        if row == 0 && line == "---" {
          ScanState::InBlock
        } else {
          return false;
        }
      },
      ScanState::InBlock => {
        if line == "---" {
          ScanState::AfterBlock
        } else {
          if let Some((key, has_colon)) = key_line(line) {
            under_tags_key = has_colon && is_tag_key(key);
          }
          ScanState::InBlock
        }
      },
      // Content past the closing delimiter: the cursor left the block.
      ScanState::AfterBlock => return false,
    };
  }

  state == ScanState::InBlock && under_tags_key
}

/// Split off a top-level frontmatter key from a line, if the line looks
/// like one: a leading identifier, an optional colon, and then nothing but
/// whitespace before the value (or end of line). Returns the identifier and
/// whether the colon was present.
fn key_line(line: &str) -> Option<(&str, bool)> {
  let ident_end = line
    .char_indices()
    .find(|&(_, ch)| !(ch.is_alphanumeric() || ch == '_'))
    .map(|(i, _)| i)
    .unwrap_or(line.len());
  if ident_end == 0 {
    return None;
  }

  let (ident, rest) = line.split_at(ident_end);
  let (has_colon, rest) = match rest.strip_prefix(':') {
    Some(rest) => (true, rest),
    None => (false, rest),
  };

  if rest.is_empty() || rest.starts_with(char::is_whitespace) {
    Some((ident, has_colon))
  } else {
    None
  }
}

#[inline]
fn is_tag_key(key: &str) -> bool {
  key.eq_ignore_ascii_case("tags") || key.eq_ignore_ascii_case("tag")
}
