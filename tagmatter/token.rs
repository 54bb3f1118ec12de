//! Partial-token extraction at the cursor.
//!
//! The replace range must exactly bound the token the user typed, so that
//! accepting a suggestion surgically replaces only that token and never
//! surrounding text.

use tagmatter_core::chars::char_is_token;

/// The partial token immediately left of the cursor: its char-column range
/// on the cursor's line and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpan {
  pub start: usize,
  pub end:   usize,
  pub query: String,
}

/// Find the maximal trailing run of non-whitespace characters in
/// `line[..cursor_ch]` (char columns). A cursor sitting after whitespace
/// has no token and produces no trigger.
pub fn extract(line: &str, cursor_ch: usize) -> Option<TokenSpan> {
  let before: Vec<char> = line.chars().take(cursor_ch).collect();

  let mut start = before.len();
  while start > 0 && char_is_token(before[start - 1]) {
    start -= 1;
  }
  if start == before.len() {
    return None;
  }

  Some(TokenSpan {
    start,
    end: before.len(),
    query: before[start..].iter().collect(),
  })
}
