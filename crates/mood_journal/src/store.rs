//! Journal persistence: one JSON document holding the full entry list,
//! newest first.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entry::MoodEntry;
use crate::{JournalError, JournalResult};

/// File-backed store for journal entries.
pub struct JournalStore {
    journal_dir: PathBuf,
}

impl JournalStore {
    /// Create a new journal store rooted at `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> JournalResult<Self> {
        let journal_dir = data_dir.as_ref().join("journal");
        fs::create_dir_all(&journal_dir)?;

        Ok(Self { journal_dir })
    }

    fn entries_file(&self) -> PathBuf {
        self.journal_dir.join("reflections.json")
    }

    /// List all entries, most recent first.
    pub fn list(&self) -> JournalResult<Vec<MoodEntry>> {
        let path = self.entries_file();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path)?;
        let mut entries: Vec<MoodEntry> = serde_json::from_str(&content)?;
        entries.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(entries)
    }

    /// Create an entry stamped now and prepend it.
    pub fn add(
        &self,
        mood: impl Into<String>,
        emoji: impl Into<String>,
        text: impl Into<String>,
    ) -> JournalResult<MoodEntry> {
        self.add_at(mood, emoji, text, Utc::now())
    }

    /// Create an entry with an explicit timestamp.
    pub fn add_at(
        &self,
        mood: impl Into<String>,
        emoji: impl Into<String>,
        text: impl Into<String>,
        recorded_at: DateTime<Utc>,
    ) -> JournalResult<MoodEntry> {
        let entry = MoodEntry::new_at(mood, emoji, text, recorded_at);
        let mut entries = self.list()?;
        entries.insert(0, entry.clone());
        self.save(&entries)?;
        tracing::debug!(id = %entry.id, mood = %entry.mood, "journal entry added");
        Ok(entry)
    }

    /// Delete an entry by id.
    pub fn delete(&self, id: Uuid) -> JournalResult<()> {
        let mut entries = self.list()?;
        let len_before = entries.len();
        entries.retain(|e| e.id != id);

        if entries.len() == len_before {
            return Err(JournalError::NotFound(format!("entry {} not found", id)));
        }

        self.save(&entries)
    }

    /// Replace the full entry list.
    pub fn replace(&self, entries: &[MoodEntry]) -> JournalResult<()> {
        self.save(entries)
    }

    fn save(&self, entries: &[MoodEntry]) -> JournalResult<()> {
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(self.entries_file(), json)?;
        Ok(())
    }
}
