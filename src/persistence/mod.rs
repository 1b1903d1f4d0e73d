use std::{
    fs,
    path::PathBuf,
};

use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    content::{
        seed_records,
        Lesson,
    },
    core::{
        RepasoError,
        VocabularyRecord,
    },
};

const APP_NAME: &str = "repaso";
const DECK_FILE: &str = "deck.json";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), RepasoError> {
    let file_path = get_data_file_path(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)?;
    println!("Data saved to: {}", file_path.display());
    Ok(())
}

pub fn load_json<T: for<'de> Deserialize<'de> + Default>(
    filename: &str,
) -> Result<T, RepasoError> {
    let file_path = get_data_file_path(filename);

    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(&file_path)
        .map_err(|_| RepasoError::FailedToLoadFile(file_path.display().to_string()))?;
    let data: T = serde_json::from_str(&json)?;
    Ok(data)
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    match load_json::<T>(filename) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}

pub fn data_file_exists(filename: &str) -> bool {
    get_data_file_path(filename).exists()
}

/// The stored vocabulary collection, one record per id. Review commits
/// replace whole records, so concurrent writers resolve to last-write-wins
/// per record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    pub records: Vec<VocabularyRecord>,
}

impl Deck {
    pub fn load() -> Result<Self, RepasoError> {
        load_json(DECK_FILE)
    }

    pub fn save(&self) -> Result<(), RepasoError> {
        save_json(self, DECK_FILE)
    }

    pub fn get(&self, id: &str) -> Option<&VocabularyRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Persist the outcome of one review: the updated record replaces the
    /// stored record with the same id.
    pub fn commit_review(&mut self, updated: VocabularyRecord) -> Result<(), RepasoError> {
        match self.records.iter_mut().find(|record| record.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                Ok(())
            }
            None => Err(RepasoError::UnknownRecord(updated.id)),
        }
    }

    /// Seed a lesson's vocabulary into the deck. Ids already present are
    /// left alone so re-importing a lesson never resets progress.
    pub fn add_lesson(&mut self, lesson: &Lesson, now: DateTime<Utc>) -> usize {
        let mut added = 0;
        for record in seed_records(lesson, now) {
            if self.get(&record.id).is_none() {
                self.records.push(record);
                added += 1;
            }
        }
        added
    }
}
