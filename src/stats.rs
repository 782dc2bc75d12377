use crate::model::{Emotion, JournalEntry};
use std::collections::HashMap;

/// One emotion's share of a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionSlice {
    pub emotion: Emotion,
    pub count: usize,
    /// Fraction of the snapshot, in 0..=1.
    pub fraction: f32,
}

/// Per-emotion frequency summary of a snapshot.
///
/// Emotions absent from the snapshot are omitted; slices are ordered
/// alphabetically by emotion name so the summary is stable regardless of
/// entry order. An empty snapshot yields an empty summary.
pub fn emotion_frequencies(entries: &[JournalEntry]) -> Vec<EmotionSlice> {
    if entries.is_empty() {
        return Vec::new();
    }

    let mut counts: HashMap<Emotion, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.emotion).or_insert(0) += 1;
    }

    let total = entries.len();
    let mut slices: Vec<EmotionSlice> = counts
        .into_iter()
        .map(|(emotion, count)| EmotionSlice {
            emotion,
            count,
            fraction: count as f32 / total as f32,
        })
        .collect();
    slices.sort_by(|a, b| a.emotion.name().cmp(b.emotion.name()));
    slices
}
