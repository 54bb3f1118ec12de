//! Numeric-aware, case-insensitive string ordering.
//!
//! Digit runs compare by numeric value instead of code point, so `tag2`
//! sorts before `tag10`. Everything else compares case-folded. Two strings
//! that differ only in leading zeros or letter case still get a stable,
//! deterministic order via a deferred tiebreak.

use std::{
  cmp::Ordering,
  iter::Peekable,
  str::Chars,
};

pub fn natural_cmp(a: &str, b: &str) -> Ordering {
  let mut ca = a.chars().peekable();
  let mut cb = b.chars().peekable();
  // Applied only when the folded comparison exhausts both strings as equal.
  let mut tiebreak = Ordering::Equal;

  loop {
    match (ca.peek().copied(), cb.peek().copied()) {
      (None, None) => return tiebreak,
      (None, Some(_)) => return Ordering::Less,
      (Some(_), None) => return Ordering::Greater,
      (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
        let (da, za) = take_digit_run(&mut ca);
        let (db, zb) = take_digit_run(&mut cb);
        match cmp_digit_runs(&da, &db) {
          Ordering::Equal => {
            if tiebreak == Ordering::Equal {
              // Fewer leading zeros first: `2` before `02`.
              tiebreak = za.cmp(&zb);
            }
          },
          ord => return ord,
        }
      },
      (Some(x), Some(y)) => {
        ca.next();
        cb.next();
        match fold_char(x).cmp(&fold_char(y)) {
          Ordering::Equal => {
            if tiebreak == Ordering::Equal {
              tiebreak = x.cmp(&y);
            }
          },
          ord => return ord,
        }
      },
    }
  }
}

/// Consume a maximal digit run, returning the run with leading zeros
/// stripped plus the number of zeros stripped.
fn take_digit_run(chars: &mut Peekable<Chars<'_>>) -> (String, usize) {
  let mut run = String::new();
  while let Some(&ch) = chars.peek() {
    if !ch.is_ascii_digit() {
      break;
    }
    run.push(ch);
    chars.next();
  }

  let stripped = run.trim_start_matches('0');
  let zeros = run.len() - stripped.len();
  if stripped.is_empty() {
    // All zeros: keep a single digit so `0` compares as a value.
    ("0".to_owned(), zeros.saturating_sub(1))
  } else {
    (stripped.to_owned(), zeros)
  }
}

/// Compare two zero-stripped digit runs by numeric value. Runs can be
/// arbitrarily long, so compare lengths before digits.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
  a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[inline]
fn fold_char(ch: char) -> char {
  ch.to_lowercase().next().unwrap_or(ch)
}
