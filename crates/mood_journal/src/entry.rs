use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One journal record: a mood label, the emoji it was picked with, and a
/// free-form note. Entries are immutable once created.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoodEntry {
    pub id: Uuid,
    pub mood: String,
    pub emoji: String,
    pub text: String,
    pub recorded_at: DateTime<Utc>,
}

impl MoodEntry {
    /// Create an entry stamped with the current time.
    pub fn new(
        mood: impl Into<String>,
        emoji: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::new_at(mood, emoji, text, Utc::now())
    }

    /// Create an entry with an explicit timestamp.
    pub fn new_at(
        mood: impl Into<String>,
        emoji: impl Into<String>,
        text: impl Into<String>,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            mood: mood.into(),
            emoji: emoji.into(),
            text: text.into(),
            recorded_at,
        }
    }
}

/// The pickable moods and their emoji, in picker order.
pub const MOODS: [(&str, &str); 11] = [
    ("😊", "Happy"),
    ("😢", "Sad"),
    ("😡", "Angry"),
    ("😌", "Peaceful"),
    ("😟", "Anxious"),
    ("😴", "Tired"),
    ("😞", "Lonely"),
    ("🤩", "Excited"),
    ("🤯", "Overwhelmed"),
    ("🛡️", "Protective"),
    ("🥳", "Overjoyed"),
];

/// Emoji for a mood label, case-insensitive. Unknown labels get a neutral face.
pub fn emoji_for(mood: &str) -> &'static str {
    MOODS
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(mood))
        .map(|(emoji, _)| *emoji)
        .unwrap_or("🙂")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entries_get_distinct_ids() {
        let a = MoodEntry::new("Happy", "😊", "good day");
        let b = MoodEntry::new("Happy", "😊", "good day");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn entry_round_trips_through_json() {
        let entry = MoodEntry::new("Peaceful", "😌", "calm evening");
        let json = serde_json::to_string(&entry).expect("serialize");
        let back: MoodEntry = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, entry);
    }

    #[test]
    fn emoji_lookup_is_case_insensitive() {
        assert_eq!(emoji_for("overjoyed"), "🥳");
        assert_eq!(emoji_for("Overjoyed"), "🥳");
    }

    #[test]
    fn unknown_mood_gets_neutral_face() {
        assert_eq!(emoji_for("Bewildered"), "🙂");
    }
}
