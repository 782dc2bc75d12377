//! # Journal Facade
//!
//! The owning collection manager: holds the authoritative entry list plus
//! the currently selected sort algorithm and search structure, and
//! dispatches into [`sort`](crate::sort), [`search`](crate::search), and
//! [`stats`](crate::stats). No algorithmic logic of its own lives here.

use crate::error::{MoodzError, Result};
use crate::model::{Emotion, JournalEntry};
use crate::search::{search_by_emotion, SearchMethod};
use crate::sort::{sort_by_emotion, SortMethod};
use crate::stats::{emotion_frequencies, EmotionSlice};

/// An in-memory journal with remembered sort/search strategy selections.
#[derive(Debug)]
pub struct Journal {
    entries: Vec<JournalEntry>,
    sort_method: SortMethod,
    search_method: SearchMethod,
}

impl Journal {
    /// An empty journal with bubble sort and hash lookup selected.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            sort_method: SortMethod::Bubble,
            search_method: SearchMethod::Hash,
        }
    }

    /// Appends an entry. The list is not reordered; call [`sort`](Self::sort)
    /// when rank order is needed.
    pub fn add(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Removes and returns the entry with the given id.
    pub fn remove(&mut self, id: i64) -> Result<JournalEntry> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(MoodzError::EntryNotFound(id))?;
        Ok(self.entries.remove(pos))
    }

    /// Sorts the authoritative list in place with `method` and remembers it
    /// as the current selection.
    pub fn sort(&mut self, method: SortMethod) {
        self.sort_method = method;
        sort_by_emotion(&mut self.entries, method);
    }

    pub fn sort_method(&self) -> SortMethod {
        self.sort_method
    }

    /// Selects the structure used by subsequent searches.
    pub fn set_search_method(&mut self, method: SearchMethod) {
        self.search_method = method;
    }

    pub fn search_method(&self) -> SearchMethod {
        self.search_method
    }

    /// Queries the current list with the currently selected structure. The
    /// structure is rebuilt from scratch on every call.
    pub fn search_by_emotion(&self, emotion: Emotion) -> Vec<JournalEntry> {
        search_by_emotion(&self.entries, emotion, self.search_method)
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Frequency summary of the current list.
    pub fn emotion_frequencies(&self) -> Vec<EmotionSlice> {
        emotion_frequencies(&self.entries)
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::new()
    }
}
