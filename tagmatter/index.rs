//! The corpus-wide tag index.
//!
//! Built fresh from a corpus snapshot on every trigger activation rather
//! than cached across edits: corpora are note-collection sized and rebuilds
//! happen at keystroke cadence, so guaranteed freshness wins over the
//! redundant work.
//!
//! Raw tags collapse to their leaf name: everything after the final
//! separator (`#` or `/`) is kept, ancestors are discarded. Sibling leaves
//! with the same name but different ancestors therefore merge into one
//! entry; this mirrors the host's display behavior and is a documented
//! simplification.

use tagmatter_core::natural::natural_cmp;

use crate::Tendril;

/// Deduplicated, naturally ordered set of all known tags. Comparison is
/// case-folded; the stored casing is the first one seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
  entries: Vec<Tendril>,
}

impl TagIndex {
  pub fn build<I, S>(corpus: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut entries: Vec<Tendril> = Vec::new();
    for raw in corpus {
      let Some(leaf) = normalize(raw.as_ref()) else {
        continue;
      };
      if !entries.iter().any(|seen| folded_eq(seen, leaf)) {
        entries.push(leaf.into());
      }
    }
    entries.sort_by(|a, b| natural_cmp(a, b));

    tracing::debug!("tag index rebuilt with {} entries", entries.len());
    Self { entries }
  }

  /// Entries whose case-folded text contains `query` anywhere, in index
  /// order. An empty query yields the whole index.
  pub fn matches<'i>(&'i self, query: &str) -> impl Iterator<Item = &'i str> {
    let needle = query.to_lowercase();
    self
      .entries
      .iter()
      .filter(move |tag| tag.to_lowercase().contains(&needle))
      .map(|tag| tag.as_str())
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(|tag| tag.as_str())
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

/// Collapse a raw tag to its leaf: the substring after the final separator
/// (`#` for the marker prefix, `/` for hierarchy levels). Tags that
/// normalize to nothing (empty input, trailing separator) are dropped.
fn normalize(raw: &str) -> Option<&str> {
  let leaf = match raw.rfind(['#', '/']) {
    Some(pos) => &raw[pos + 1..],
    None => raw,
  };
  if leaf.is_empty() { None } else { Some(leaf) }
}

/// Case-folded equality for dedup. Ordering stays with [`natural_cmp`],
/// which carries tiebreaks and so never reports case-only variants equal.
fn folded_eq(a: &str, b: &str) -> bool {
  a.chars()
    .flat_map(char::to_lowercase)
    .eq(b.chars().flat_map(char::to_lowercase))
}
