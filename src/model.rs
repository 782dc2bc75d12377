//! # Data Model
//!
//! The journal entry record, the closed emotion category set with its
//! priority ranking, and the data shapes exchanged with the remote
//! classification service.
//!
//! The rest of the crate treats everything here as immutable input: sorting
//! permutes entries, searching clones matches out, and nothing ever rewrites
//! a field after construction.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The closed set of emotion labels the classification service can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Disgust,
    Surprise,
    Neutral,
}

/// The priority order entries are sorted by. This is a fixed constant of the
/// system, deliberately distinct from the enum's declaration order.
pub const EMOTION_ORDER: [Emotion; 7] = [
    Emotion::Anger,
    Emotion::Sadness,
    Emotion::Fear,
    Emotion::Disgust,
    Emotion::Surprise,
    Emotion::Joy,
    Emotion::Neutral,
];

static RANK: Lazy<HashMap<Emotion, usize>> = Lazy::new(|| {
    EMOTION_ORDER
        .iter()
        .enumerate()
        .map(|(rank, &emotion)| (emotion, rank))
        .collect()
});

impl Emotion {
    /// Position of this emotion in [`EMOTION_ORDER`]. The sole sort key;
    /// entry id, text, and timestamp never participate in comparisons.
    pub fn rank(self) -> usize {
        RANK[&self]
    }

    /// Lowercase label, also the accepted wire spelling.
    pub fn name(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Disgust => "disgust",
            Emotion::Surprise => "surprise",
            Emotion::Neutral => "neutral",
        }
    }

    /// Maps a free-text classifier label onto the closed set,
    /// case-insensitively. Anything unrecognized becomes
    /// [`Emotion::Neutral`], never an error.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "joy" => Emotion::Joy,
            "sadness" => Emotion::Sadness,
            "anger" => Emotion::Anger,
            "fear" => Emotion::Fear,
            "disgust" => Emotion::Disgust,
            "surprise" => Emotion::Surprise,
            _ => Emotion::Neutral,
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single classified journal entry. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Caller-assigned, unique within a collection. In practice the creation
    /// time in millis, so ids are monotonic.
    pub id: i64,
    pub text: String,
    pub emotion: Emotion,
    pub advice: String,
    /// Opaque to this crate; carried through unchanged.
    pub timestamp: i64,
}

impl JournalEntry {
    pub fn new(
        id: i64,
        text: impl Into<String>,
        emotion: Emotion,
        advice: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            emotion,
            advice: advice.into(),
            timestamp,
        }
    }

    /// Builds an entry from a classifier response, normalizing the label
    /// through [`Emotion::from_label`].
    pub fn from_response(
        id: i64,
        text: impl Into<String>,
        timestamp: i64,
        response: &ClassifyResponse,
    ) -> Self {
        Self::new(
            id,
            text,
            Emotion::from_label(&response.emotion),
            response.advice.clone(),
            timestamp,
        )
    }
}

/// Request body sent to the classification service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

/// Response body returned by the classification service. `emotion` is the
/// service's free-text label, not yet normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub emotion: String,
    #[serde(default)]
    pub advice: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_follows_priority_order_not_declaration_order() {
        assert_eq!(Emotion::Anger.rank(), 0);
        assert_eq!(Emotion::Sadness.rank(), 1);
        assert_eq!(Emotion::Fear.rank(), 2);
        assert_eq!(Emotion::Disgust.rank(), 3);
        assert_eq!(Emotion::Surprise.rank(), 4);
        assert_eq!(Emotion::Joy.rank(), 5);
        assert_eq!(Emotion::Neutral.rank(), 6);
    }

    #[test]
    fn every_emotion_has_a_distinct_rank() {
        let ranks: std::collections::HashSet<usize> =
            EMOTION_ORDER.iter().map(|e| e.rank()).collect();
        assert_eq!(ranks.len(), EMOTION_ORDER.len());
    }

    #[test]
    fn from_label_accepts_any_casing() {
        assert_eq!(Emotion::from_label("JOY"), Emotion::Joy);
        assert_eq!(Emotion::from_label("Sadness"), Emotion::Sadness);
        assert_eq!(Emotion::from_label("  fear "), Emotion::Fear);
    }

    #[test]
    fn from_label_falls_back_to_neutral() {
        assert_eq!(Emotion::from_label("ecstatic"), Emotion::Neutral);
        assert_eq!(Emotion::from_label(""), Emotion::Neutral);
    }

    #[test]
    fn from_response_normalizes_the_label() {
        let response = ClassifyResponse {
            emotion: "ANGER".to_string(),
            advice: "Take a walk.".to_string(),
        };
        let entry = JournalEntry::from_response(7, "ugh", 1000, &response);
        assert_eq!(entry.id, 7);
        assert_eq!(entry.emotion, Emotion::Anger);
        assert_eq!(entry.advice, "Take a walk.");
        assert_eq!(entry.timestamp, 1000);
    }

    #[test]
    fn response_parsing_tolerates_extra_and_missing_fields() {
        let parsed: ClassifyResponse =
            serde_json::from_str(r#"{"emotion":"joy","confidence":0.93}"#).unwrap();
        assert_eq!(parsed.emotion, "joy");
        assert_eq!(parsed.advice, "");
    }

    #[test]
    fn request_serializes_text_only() {
        let request = ClassifyRequest {
            text: "went for a run".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"text":"went for a run"}"#);
    }
}
