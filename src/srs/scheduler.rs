use chrono::{
    DateTime,
    Duration,
    Utc,
};

use super::policy::{
    AnglicismList,
    UrgencyBand,
};
use crate::core::VocabularyRecord;

pub const MIN_EASE_FACTOR: f64 = 1.3;
pub const MAX_EASE_FACTOR: f64 = 3.0;
pub const EASE_BONUS: f64 = 0.05;
pub const EASE_PENALTY: f64 = 0.15;
pub const MAX_INTERVAL_DAYS: u32 = 90;

/// Interval schedule for the fixed phase, indexed by the repetition count
/// before the successful review. From the fifth success on, growth is
/// multiplicative by the ease factor.
const FIXED_INTERVALS: [u32; 5] = [1, 3, 7, 14, 30];

const SECONDS_PER_DAY: f64 = 86_400.0;

/// The two-valued signal the transition branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    Success,
    Failure,
}

/// What the learner actually taps. "easy" and "good" share one
/// transition; only "hard" counts as a lapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewQuality {
    Easy,
    Good,
    Hard,
}

impl ReviewQuality {
    pub fn outcome(self) -> ReviewOutcome {
        match self {
            ReviewQuality::Easy | ReviewQuality::Good => ReviewOutcome::Success,
            ReviewQuality::Hard => ReviewOutcome::Failure,
        }
    }
}

/// Decides which records are due, in what order they are reviewed, and
/// how a review outcome moves a record's scheduling state. Every
/// operation is a pure function of its inputs; loading and saving the
/// records belongs to the caller.
pub struct SpacedRepetitionScheduler {
    anglicisms: AnglicismList,
}

impl SpacedRepetitionScheduler {
    pub fn new(anglicisms: AnglicismList) -> Self {
        Self { anglicisms }
    }

    /// Stable filter of the records whose `next_review` has arrived.
    pub fn select_due(
        &self,
        records: &[VocabularyRecord],
        now: DateTime<Utc>,
    ) -> Vec<VocabularyRecord> {
        records.iter().filter(|record| record.next_review <= now).cloned().collect()
    }

    /// Presentation order: most overdue band first, and within a band
    /// anglicisms after everything else. Ties keep their input order.
    pub fn order_for_review(
        &self,
        mut records: Vec<VocabularyRecord>,
        now: DateTime<Utc>,
    ) -> Vec<VocabularyRecord> {
        records.sort_by_key(|record| {
            (UrgencyBand::of(record, now), self.anglicisms.contains(&record.term))
        });
        records
    }

    /// `select_due` followed by `order_for_review`, the shape the review
    /// queue consumes.
    pub fn due_for_review(
        &self,
        records: &[VocabularyRecord],
        now: DateTime<Utc>,
    ) -> Vec<VocabularyRecord> {
        let due = self.select_due(records, now);
        self.order_for_review(due, now)
    }

    /// The one transition a record's scheduling state goes through. Pure:
    /// the updated record is returned and the caller persists it.
    ///
    /// Ease and interval are clamped on every pass rather than validated
    /// on the way in, so out-of-range stored values heal on the next
    /// review instead of erroring.
    pub fn apply_review_outcome(
        &self,
        record: &VocabularyRecord,
        outcome: ReviewOutcome,
        now: DateTime<Utc>,
    ) -> VocabularyRecord {
        let mut next = record.clone();

        match outcome {
            ReviewOutcome::Success => {
                next.interval =
                    grow_interval(record.repetitions, record.interval, record.ease_factor);
                next.ease_factor =
                    (record.ease_factor + EASE_BONUS).clamp(MIN_EASE_FACTOR, MAX_EASE_FACTOR);
                next.repetitions = record.repetitions + 1;
            }
            ReviewOutcome::Failure => {
                next.interval = 1;
                next.ease_factor =
                    (record.ease_factor - EASE_PENALTY).clamp(MIN_EASE_FACTOR, MAX_EASE_FACTOR);
                next.repetitions = 0;
            }
        }

        next.next_review = now + Duration::days(next.interval as i64);
        next
    }
}

/// Fixed table through the first five successes, then `floor(interval *
/// ease_factor)` held to at most 90 days.
fn grow_interval(repetitions: u32, interval: u32, ease_factor: f64) -> u32 {
    match FIXED_INTERVALS.get(repetitions as usize) {
        Some(&days) => days,
        None => {
            let grown = (interval as f64 * ease_factor).floor() as u32;
            grown.clamp(1, MAX_INTERVAL_DAYS)
        }
    }
}

/// Whole days until the record is due, rounded up so a partially elapsed
/// day still counts. Negative means overdue by that many days.
pub fn days_until_review(record: &VocabularyRecord, now: DateTime<Utc>) -> i64 {
    let seconds = (record.next_review - now).num_seconds();
    (seconds as f64 / SECONDS_PER_DAY).ceil() as i64
}
