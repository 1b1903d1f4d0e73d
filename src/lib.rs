pub mod content;
pub mod core;
pub mod persistence;
pub mod srs;

pub use crate::{
    content::{
        seed_records,
        starter_lesson,
        Lesson,
        VocabularyEntry,
    },
    core::{
        RepasoError,
        VocabularyRecord,
    },
    persistence::Deck,
    srs::{
        days_until_review,
        AnglicismList,
        ReviewForecast,
        ReviewOutcome,
        ReviewQuality,
        SpacedRepetitionScheduler,
        UrgencyBand,
    },
};
