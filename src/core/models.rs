use chrono::{
    DateTime,
    Duration,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::content::VocabularyEntry;

pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

/// One learnable term and its review state. The scheduling fields
/// (`next_review`, `interval`, `ease_factor`, `repetitions`) are only
/// mutated by the review transition; everything else is authored content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyRecord {
    pub id: String,                     // Unique key, assigned at authoring time
    pub term: String,                   // The Spanish term
    pub translation: String,            // English gloss
    pub context: String,                // Free-text category tag, e.g. "finanzas"
    pub example: String,                // Example sentence
    pub next_review: DateTime<Utc>,     // When the item becomes due
    pub interval: u32,                  // Current spacing interval in days
    pub ease_factor: f64,               // Growth multiplier, kept in [1.3, 3.0]
    pub repetitions: u32,               // Consecutive successes since last failure
}

impl VocabularyRecord {
    /// Fresh scheduling state for a newly authored entry: due tomorrow,
    /// one-day interval, default ease.
    pub fn new(id: String, entry: &VocabularyEntry, now: DateTime<Utc>) -> Self {
        VocabularyRecord {
            id,
            term: entry.term.clone(),
            translation: entry.translation.clone(),
            context: entry.context.clone(),
            example: entry.example.clone(),
            next_review: now + Duration::days(1),
            interval: 1,
            ease_factor: DEFAULT_EASE_FACTOR,
            repetitions: 0,
        }
    }
}
