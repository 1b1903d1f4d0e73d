use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::{
        RepasoError,
        VocabularyRecord,
    },
    persistence::{
        load_json,
        save_json,
    },
};

const ANGLICISM_FILE: &str = "anglicisms.json";

/// English business/tech loanwords a working professional already knows.
/// Reviewing them teaches little Spanish, so they sort after everything
/// else in the same urgency band. Entries are lowercase with spaces
/// replaced by hyphens.
pub const DEFAULT_ANGLICISMS: &[&str] = &[
    "startup",
    "ceo",
    "cto",
    "cfo",
    "api",
    "saas",
    "b2b",
    "b2c",
    "kpi",
    "roi",
    "mvp",
    "sprint",
    "scrum",
    "backlog",
    "standup",
    "feedback",
    "networking",
    "marketing",
    "branding",
    "engagement",
    "lead",
    "pitch",
    "elevator-pitch",
    "deadline",
    "target",
    "budget",
    "forecast",
    "cash-flow",
    "equity",
    "stock-options",
    "venture-capital",
    "crowdfunding",
    "coworking",
    "freelance",
    "outsourcing",
    "benchmark",
    "brainstorming",
    "burnout",
    "workflow",
    "dashboard",
    "growth-hacking",
    "onboarding",
];

/// How overdue a due item is. The primary review-ordering key: `High`
/// sorts before `Medium` sorts before `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UrgencyBand {
    High,
    Medium,
    Low,
}

impl UrgencyBand {
    pub fn from_days_overdue(days: i64) -> Self {
        if days > 7 {
            UrgencyBand::High
        } else if days > 3 {
            UrgencyBand::Medium
        } else {
            UrgencyBand::Low
        }
    }

    pub fn of(record: &VocabularyRecord, now: DateTime<Utc>) -> Self {
        Self::from_days_overdue((now - record.next_review).num_days())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnglicismListData {
    pub terms: Vec<String>,
}

impl Default for AnglicismListData {
    fn default() -> Self {
        Self { terms: DEFAULT_ANGLICISMS.iter().map(|s| s.to_string()).collect() }
    }
}

/// The loanword denylist consumed by the scheduler's ordering. Callers
/// construct one (built-in default or loaded from the data dir) and hand
/// it to the scheduler, so vocabulary policy can vary by curriculum.
#[derive(Debug, Clone, Default)]
pub struct AnglicismList {
    data: AnglicismListData,
}

impl AnglicismList {
    pub fn load() -> Result<Self, RepasoError> {
        let data = load_json::<AnglicismListData>(ANGLICISM_FILE)?;
        Ok(Self { data })
    }

    pub fn save(&self) -> Result<(), RepasoError> {
        save_json(&self.data, ANGLICISM_FILE)
    }

    pub fn contains(&self, term: &str) -> bool {
        let normalized = normalize_term(term);
        self.data.terms.iter().any(|t| *t == normalized)
    }

    pub fn add_term(&mut self, term: &str) -> bool {
        let normalized = normalize_term(term);
        if self.data.terms.contains(&normalized) {
            return false;
        }
        self.data.terms.push(normalized);
        true
    }

    pub fn remove_term(&mut self, term: &str) -> bool {
        let normalized = normalize_term(term);
        if let Some(pos) = self.data.terms.iter().position(|t| *t == normalized) {
            self.data.terms.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn set_terms(&mut self, terms: Vec<String>) {
        self.data.terms = terms.iter().map(|t| normalize_term(t)).collect();
    }

    pub fn get_all_terms(&self) -> Vec<String> {
        self.data.terms.clone()
    }
}

/// Lowercase, spaces to hyphens. "Growth Hacking" matches the entry
/// "growth-hacking".
fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_thresholds() {
        assert_eq!(UrgencyBand::from_days_overdue(10), UrgencyBand::High);
        assert_eq!(UrgencyBand::from_days_overdue(8), UrgencyBand::High);
        assert_eq!(UrgencyBand::from_days_overdue(7), UrgencyBand::Medium);
        assert_eq!(UrgencyBand::from_days_overdue(4), UrgencyBand::Medium);
        assert_eq!(UrgencyBand::from_days_overdue(3), UrgencyBand::Low);
        assert_eq!(UrgencyBand::from_days_overdue(0), UrgencyBand::Low);
        assert_eq!(UrgencyBand::from_days_overdue(-5), UrgencyBand::Low);
    }

    #[test]
    fn bands_sort_most_urgent_first() {
        let mut bands = vec![UrgencyBand::Low, UrgencyBand::High, UrgencyBand::Medium];
        bands.sort();
        assert_eq!(bands, vec![UrgencyBand::High, UrgencyBand::Medium, UrgencyBand::Low]);
    }

    #[test]
    fn denylist_matching_normalizes_case_and_spaces() {
        let list = AnglicismList::default();
        assert!(list.contains("sprint"));
        assert!(list.contains("CEO"));
        assert!(list.contains("Growth Hacking"));
        assert!(!list.contains("cronograma"));
        assert!(!list.contains("la reunión"));
    }

    #[test]
    fn add_and_remove_terms() {
        let mut list = AnglicismList::default();
        assert!(list.add_term("Cloud Computing"));
        assert!(list.contains("cloud computing"));
        assert!(!list.add_term("cloud-computing"));

        assert!(list.remove_term("Cloud Computing"));
        assert!(!list.contains("cloud computing"));
        assert!(!list.remove_term("cloud-computing"));
    }
}
