use chrono::{
    DateTime,
    Utc,
};

use super::{
    policy::UrgencyBand,
    scheduler::days_until_review,
};
use crate::core::VocabularyRecord;

/// Snapshot of upcoming review load, shown on the progress view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewForecast {
    pub total: usize,
    pub due_now: usize,
    pub high_urgency: usize,
    pub medium_urgency: usize,
    pub low_urgency: usize,
    pub due_this_week: usize, // Not yet due, but within the next 7 days
}

impl ReviewForecast {
    pub fn for_records(records: &[VocabularyRecord], now: DateTime<Utc>) -> Self {
        let mut forecast = ReviewForecast { total: records.len(), ..Default::default() };

        for record in records {
            if record.next_review <= now {
                forecast.due_now += 1;
                match UrgencyBand::of(record, now) {
                    UrgencyBand::High => forecast.high_urgency += 1,
                    UrgencyBand::Medium => forecast.medium_urgency += 1,
                    UrgencyBand::Low => forecast.low_urgency += 1,
                }
            } else if days_until_review(record, now) <= 7 {
                forecast.due_this_week += 1;
            }
        }

        forecast
    }
}
