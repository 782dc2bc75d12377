//! # Index
//!
//! Three interchangeable lookup structures answering "every entry with
//! emotion X", selected by a [`SearchMethod`] tag. Each structure is built
//! fresh from the caller's snapshot on every query and discarded afterwards;
//! nothing is incrementally maintained, so there is no stale index state.
//!
//! All three return the same entries for the same query, in the snapshot's
//! relative order; they differ only in internal organization and cost shape.

use crate::error::MoodzError;
use crate::model::{Emotion, JournalEntry};

pub mod hash;
pub mod list;
pub mod tree;

/// Selects which structure [`search_by_emotion`] builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMethod {
    Hash,
    Tree,
    List,
}

impl SearchMethod {
    pub fn name(self) -> &'static str {
        match self {
            SearchMethod::Hash => "hash",
            SearchMethod::Tree => "tree",
            SearchMethod::List => "list",
        }
    }
}

impl std::fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for SearchMethod {
    type Err = MoodzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hash" => Ok(SearchMethod::Hash),
            "tree" => Ok(SearchMethod::Tree),
            "list" => Ok(SearchMethod::List),
            _ => Err(MoodzError::UnknownSearchMethod(s.to_string())),
        }
    }
}

/// Returns every entry in `snapshot` whose emotion equals `emotion`, in the
/// snapshot's relative order.
///
/// A category absent from the snapshot yields an empty result, never an
/// error.
pub fn search_by_emotion(
    snapshot: &[JournalEntry],
    emotion: Emotion,
    method: SearchMethod,
) -> Vec<JournalEntry> {
    match method {
        SearchMethod::Hash => hash::HashIndex::build(snapshot).find(emotion),
        SearchMethod::Tree => tree::EmotionTree::build(snapshot).find(emotion),
        SearchMethod::List => list::EntryList::build(snapshot).find(emotion),
    }
}
