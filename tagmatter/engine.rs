//! The per-keystroke suggestion driver.
//!
//! One suggestion cycle, run synchronously inside the host's keystroke
//! callback:
//!
//! 1. [`SuggestionEngine::on_trigger`] classifies the cursor position and
//!    extracts the partial token, rebuilding the tag index from the host's
//!    corpus snapshot when a trigger fires.
//! 2. [`SuggestionEngine::suggestions`] filters the index against the query
//!    for display.
//! 3. [`SuggestionEngine::accept_suggestion`] turns the chosen tag into an
//!    [`Edit`] the host applies atomically, cursor landing at the end of
//!    the inserted text.
//!
//! When a replacement primes a fresh entry (`auto_add_new_entry`), the very
//! next trigger is suppressed once. Without that, the suggestion list would
//! pop straight back up on the empty entry with no user input.

use ropey::{
  Rope,
  RopeSlice,
};
use tagmatter_core::position::Position;

use crate::{
  config::EngineConfig,
  format,
  frontmatter::{
    self,
    FieldForm,
  },
  index::TagIndex,
  token,
};

/// Host-supplied corpus enumeration. The engine never scans document
/// bodies for tags itself; the host hands over the raw tag strings it
/// already knows about (a single document's, or the whole vault's).
pub trait TagSource {
  fn raw_tags(&self) -> Vec<String>;
}

impl<S: AsRef<str>> TagSource for [S] {
  fn raw_tags(&self) -> Vec<String> {
    self.iter().map(|tag| tag.as_ref().to_owned()).collect()
  }
}

impl<S: AsRef<str>> TagSource for Vec<S> {
  fn raw_tags(&self) -> Vec<String> {
    self.as_slice().raw_tags()
  }
}

/// One suggestion cycle's context: field form, the exact range of the
/// partial token, and the query text. Discarded once the suggestion is
/// accepted or dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerContext {
  pub form:  FieldForm,
  pub start: Position,
  pub end:   Position,
  pub query: String,
}

/// A replacement for the host to apply: overwrite `start..end` with `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
  pub start: Position,
  pub end:   Position,
  pub text:  String,
}

impl Edit {
  /// Apply against a rope document. Convenience for hosts that keep their
  /// text in a [`Rope`]; others translate the positions themselves.
  pub fn apply(&self, doc: &mut Rope) {
    let start = doc.line_to_char(self.start.row) + self.start.col;
    let end = doc.line_to_char(self.end.row) + self.end.col;
    doc.remove(start..end);
    doc.insert(start, &self.text);
  }
}

#[derive(Debug, Default)]
pub struct SuggestionEngine {
  index: TagIndex,
  // One-shot: armed by an entry-advancing accept, cleared on next read.
  suppress_next: bool,
}

impl SuggestionEngine {
  pub fn new() -> Self {
    Self::default()
  }

  /// Decide whether the keystroke at `cursor` opens a suggestion cycle.
  /// On a hit, the index is rebuilt from `source` so the candidate list is
  /// always current.
  pub fn on_trigger<S>(
    &mut self,
    text: RopeSlice,
    cursor: Position,
    source: &S,
  ) -> Option<TriggerContext>
  where
    S: TagSource + ?Sized,
  {
    if self.suppress_next {
      self.suppress_next = false;
      tracing::trace!("trigger suppressed after auto-added entry");
      return None;
    }

    let line = line_text(text, cursor.row)?;
    let col = cursor.col.min(line.chars().count());
    let before = text_before(text, cursor.row, col);

    let form = frontmatter::classify(&before, &line)?;
    let span = token::extract(&line, col)?;

    self.index = TagIndex::build(source.raw_tags());
    tracing::trace!(
      "trigger fired: form {:?}, query {:?}, {} candidates",
      form,
      span.query,
      self.index.len(),
    );

    Some(TriggerContext {
      form,
      start: cursor.with_col(span.start),
      end: cursor.with_col(span.end),
      query: span.query,
    })
  }

  /// Candidates for the query, in index order.
  pub fn suggestions(&self, query: &str) -> Vec<&str> {
    self.index.matches(query).collect()
  }

  /// Display label for a candidate.
  pub fn render_hint(&self, tag: &str) -> String {
    format!("#{tag}")
  }

  /// Turn an accepted suggestion into the edit the host applies. Arms the
  /// one-shot suppression when the replacement advances to a new entry.
  pub fn accept_suggestion(
    &mut self,
    ctx: &TriggerContext,
    tag: &str,
    config: &EngineConfig,
  ) -> Edit {
    let replacement = format::format(tag, ctx.form, config);
    if replacement.advance_to_new_entry {
      self.suppress_next = true;
    }

    Edit {
      start: ctx.start,
      end:   ctx.end,
      text:  replacement.text,
    }
  }
}

/// The text of a line without its ending.
fn line_text(text: RopeSlice, row: usize) -> Option<String> {
  if row >= text.len_lines() {
    return None;
  }
  let mut line = text.line(row).to_string();
  while line.ends_with(['\n', '\r']) {
    line.pop();
  }
  Some(line)
}

/// Document text from the start up to (row, col), col in chars.
fn text_before(text: RopeSlice, row: usize, col: usize) -> String {
  let cursor = text.line_to_char(row) + col;
  text.slice(..cursor).to_string()
}
