//! # Sorter
//!
//! Three interchangeable in-place sorts over a mutable entry sequence, all
//! keyed exclusively by [`Emotion::rank`]. The set is closed: callers pick
//! one with a [`SortMethod`] tag and the dispatch is a plain `match`.
//!
//! Stability is a per-algorithm property, not a blanket guarantee: bubble
//! and insertion preserve the relative order of equal-rank entries,
//! selection does not.

use crate::error::MoodzError;
use crate::model::JournalEntry;

/// Selects which algorithm [`sort_by_emotion`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMethod {
    Bubble,
    Insertion,
    Selection,
}

impl SortMethod {
    pub fn name(self) -> &'static str {
        match self {
            SortMethod::Bubble => "bubble",
            SortMethod::Insertion => "insertion",
            SortMethod::Selection => "selection",
        }
    }
}

impl std::fmt::Display for SortMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for SortMethod {
    type Err = MoodzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" => Ok(SortMethod::Bubble),
            "insertion" => Ok(SortMethod::Insertion),
            "selection" => Ok(SortMethod::Selection),
            _ => Err(MoodzError::UnknownSortMethod(s.to_string())),
        }
    }
}

fn key(entry: &JournalEntry) -> usize {
    entry.emotion.rank()
}

/// Reorders `entries` in place into non-decreasing emotion-rank order.
///
/// Any finite sequence is acceptable; empty and single-element sequences are
/// no-ops and there are no error conditions.
pub fn sort_by_emotion(entries: &mut [JournalEntry], method: SortMethod) {
    match method {
        SortMethod::Bubble => {
            bubble(entries);
        }
        SortMethod::Insertion => insertion(entries),
        SortMethod::Selection => selection(entries),
    }
}

/// Adjacent-pair passes, each one element shorter than the last, stopping
/// the first time a pass makes no swap. Returns (passes, swaps) so the
/// early-exit behavior stays observable; [`sort_by_emotion`] discards them.
fn bubble(a: &mut [JournalEntry]) -> (usize, usize) {
    let n = a.len();
    let mut passes = 0;
    let mut swaps = 0;
    for i in 0..n.saturating_sub(1) {
        passes += 1;
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if key(&a[j]) > key(&a[j + 1]) {
                a.swap(j, j + 1);
                swapped = true;
                swaps += 1;
            }
        }
        if !swapped {
            break;
        }
    }
    (passes, swaps)
}

/// Each element is swapped backward past every higher-ranked predecessor.
fn insertion(a: &mut [JournalEntry]) {
    for i in 1..a.len() {
        let mut j = i;
        while j > 0 && key(&a[j - 1]) > key(&a[j]) {
            a.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Minimum-of-suffix swap. The long-range swap can reorder equal-rank
/// entries; not stable.
fn selection(a: &mut [JournalEntry]) {
    for i in 0..a.len() {
        let mut min = i;
        for j in i + 1..a.len() {
            if key(&a[j]) < key(&a[min]) {
                min = j;
            }
        }
        if min != i {
            a.swap(i, min);
        }
    }
}
