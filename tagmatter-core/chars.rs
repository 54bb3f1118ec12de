//! Character predicates for scanning frontmatter lines.
//!
//! Token boundaries follow a binary whitespace/non-whitespace split: a tag
//! token is any maximal run of non-whitespace characters, matching what the
//! host editor treats as a word under the cursor.

#[derive(Debug, Eq, PartialEq)]
pub enum CharCategory {
  Whitespace,
  Token,
}

pub fn categorize_char(ch: char) -> CharCategory {
  if char_is_whitespace(ch) {
    CharCategory::Whitespace
  } else {
    CharCategory::Token
  }
}

#[inline]
pub fn char_is_whitespace(ch: char) -> bool {
  ch.is_whitespace()
}

#[inline]
pub fn char_is_token(ch: char) -> bool {
  !char_is_whitespace(ch)
}
