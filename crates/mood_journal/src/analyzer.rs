//! Weekly mood analytics: filter the journal to the current calendar week,
//! tabulate mood frequency, bucket entries by positivity, pick the dominant
//! mood, and derive an advice report.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use crate::advice::{self, AdviceTemplates};
use crate::entry::MoodEntry;
use crate::week::WeekConvention;

/// Moods counted toward the positive bucket (compared lowercased).
const POSITIVE_MOODS: [&str; 4] = ["happy", "peaceful", "excited", "overjoyed"];
/// Moods counted toward the negative bucket (compared lowercased).
const NEGATIVE_MOODS: [&str; 5] = ["sad", "angry", "anxious", "lonely", "overwhelmed"];

/// Aggregates for one analyzed week.
///
/// The `*_days` fields count entries, not distinct calendar days; the name is
/// kept from the product copy.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct MoodSummary {
    pub dominant_mood: String,
    /// Occurrence count per mood label within the window, keyed exactly as
    /// the entries were cased, in first-seen order.
    pub mood_frequency: IndexMap<String, u32>,
    pub positive_days: u32,
    pub negative_days: u32,
    pub neutral_days: u32,
    pub advice: String,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
}

impl MoodSummary {
    /// Short `M/D/YY - M/D/YY` label for the analyzed window.
    pub fn date_range_label(&self) -> String {
        format!(
            "{} - {}",
            self.window_start.format("%-m/%-d/%y"),
            self.window_end.format("%-m/%-d/%y")
        )
    }
}

/// Summarize the current calendar week of `entries` as of `now`.
///
/// Returns `None` only when `entries` is empty: an empty journal has nothing
/// to summarize, which is an expected outcome rather than an error. Entries
/// dated before the week start are ignored; the lower bound is inclusive and
/// no upper bound is applied. Input order does not matter except to break
/// dominant-mood ties.
pub fn analyze_week(
    entries: &[MoodEntry],
    now: DateTime<Utc>,
    week: &WeekConvention,
) -> Option<MoodSummary> {
    analyze_week_with(entries, now, week, &AdviceTemplates::default())
}

/// [`analyze_week`] with an explicit advice template table.
pub fn analyze_week_with(
    entries: &[MoodEntry],
    now: DateTime<Utc>,
    week: &WeekConvention,
    templates: &AdviceTemplates,
) -> Option<MoodSummary> {
    if entries.is_empty() {
        return None;
    }

    let window_start = week.start_of_week(now);

    let mut mood_frequency: IndexMap<String, u32> = IndexMap::new();
    let mut positive_days = 0u32;
    let mut negative_days = 0u32;
    let mut neutral_days = 0u32;

    for entry in entries.iter().filter(|e| e.recorded_at >= window_start) {
        *mood_frequency.entry(entry.mood.clone()).or_insert(0) += 1;

        let lowered = entry.mood.to_lowercase();
        if POSITIVE_MOODS.contains(&lowered.as_str()) {
            positive_days += 1;
        } else if NEGATIVE_MOODS.contains(&lowered.as_str()) {
            negative_days += 1;
        } else {
            neutral_days += 1;
        }
    }

    // Highest count wins; strict `>` keeps the first-seen mood on a tie, so
    // the pick is deterministic for a given entry order. A window with no
    // entries at all reports "neutral".
    let mut dominant_mood = String::from("neutral");
    let mut best = 0u32;
    for (mood, count) in &mood_frequency {
        if *count > best {
            best = *count;
            dominant_mood = mood.clone();
        }
    }

    let advice = advice::generate_advice(
        templates,
        &dominant_mood,
        positive_days,
        negative_days,
        &mood_frequency,
    );

    tracing::debug!(
        entries_in_window = mood_frequency.values().sum::<u32>(),
        dominant_mood = %dominant_mood,
        "weekly summary computed"
    );

    Some(MoodSummary {
        dominant_mood,
        mood_frequency,
        positive_days,
        negative_days,
        neutral_days,
        advice,
        window_start,
        window_end: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    fn entry(mood: &str, recorded_at: DateTime<Utc>) -> MoodEntry {
        MoodEntry::new_at(mood, "", "", recorded_at)
    }

    #[test]
    fn frequency_keys_preserve_entry_casing() {
        // Thursday 2025-04-10; week opened Monday 2025-04-07.
        let now = at(2025, 4, 10, 12);
        let entries = vec![entry("HaPpY", now), entry("HaPpY", now)];
        let summary = analyze_week(&entries, now, &WeekConvention::default()).unwrap();
        assert_eq!(summary.mood_frequency.get("HaPpY"), Some(&2));
        assert_eq!(summary.positive_days, 2);
    }

    #[test]
    fn dominant_mood_tie_goes_to_first_seen() {
        let now = at(2025, 4, 10, 12);
        let entries = vec![entry("Sad", now), entry("Happy", now)];
        let summary = analyze_week(&entries, now, &WeekConvention::default()).unwrap();
        assert_eq!(summary.dominant_mood, "Sad");
    }

    #[test]
    fn window_with_no_entries_reports_neutral() {
        // One entry, dated before the week start: the summary is populated
        // with zero counts rather than absent.
        let now = at(2025, 4, 10, 12);
        let entries = vec![entry("Happy", at(2025, 3, 1, 12))];
        let summary = analyze_week(&entries, now, &WeekConvention::default()).unwrap();
        assert_eq!(summary.dominant_mood, "neutral");
        assert!(summary.mood_frequency.is_empty());
        assert_eq!(
            (summary.positive_days, summary.negative_days, summary.neutral_days),
            (0, 0, 0)
        );
    }

    #[test]
    fn date_range_label_is_short_form() {
        let now = at(2025, 4, 10, 12);
        let entries = vec![entry("Happy", now)];
        let summary = analyze_week(&entries, now, &WeekConvention::default()).unwrap();
        assert_eq!(summary.date_range_label(), "4/7/25 - 4/10/25");
    }
}
