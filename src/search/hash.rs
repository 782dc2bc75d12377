use crate::model::{Emotion, JournalEntry};
use std::collections::HashMap;

/// Hash-grouped index: one bucket per emotion present in the snapshot,
/// each bucket holding its entries in snapshot order.
pub struct HashIndex<'a> {
    buckets: HashMap<Emotion, Vec<&'a JournalEntry>>,
}

impl<'a> HashIndex<'a> {
    pub fn build(snapshot: &'a [JournalEntry]) -> Self {
        let mut buckets: HashMap<Emotion, Vec<&JournalEntry>> = HashMap::new();
        for entry in snapshot {
            buckets.entry(entry.emotion).or_default().push(entry);
        }
        Self { buckets }
    }

    /// The bucket for `emotion` verbatim, or empty if the emotion was never
    /// inserted.
    pub fn find(&self, emotion: Emotion) -> Vec<JournalEntry> {
        self.buckets
            .get(&emotion)
            .map(|bucket| bucket.iter().map(|&e| e.clone()).collect())
            .unwrap_or_default()
    }
}
