//! Static catalog of mood quote cards: a Gita verse and its translation for
//! each mood the picker offers. Content, not logic.

/// One quote card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoodQuote {
    pub mood: &'static str,
    pub memoji: &'static str,
    pub shloka: &'static str,
    pub translation: &'static str,
}

pub const MOOD_QUOTES: [MoodQuote; 12] = [
    MoodQuote {
        mood: "Happy",
        memoji: "😀",
        shloka: "योगस्थः कुरु कर्माणि सङ्गं त्यक्त्वा धनञ्जय",
        translation: "Perform your duty equipoised, O Arjuna, abandoning all attachment to success or failure",
    },
    MoodQuote {
        mood: "Sad",
        memoji: "😢",
        shloka: "न त्वं शोचितुमर्हसि।",
        translation: "You should not grieve for what is impermanent.",
    },
    MoodQuote {
        mood: "Peace",
        memoji: "🧘",
        shloka: "शान्तिं निर्वाणपरमां मत्संस्थामधिगच्छति।",
        translation: "One who attains peace reaches the supreme abode of the Divine.",
    },
    MoodQuote {
        mood: "Worried",
        memoji: "😰",
        shloka: "सर्वधर्मान्परित्यज्य मामेकं शरणं व्रज।",
        translation: "Abandon all varieties of duties and surrender unto Me alone.",
    },
    MoodQuote {
        mood: "Anxiety",
        memoji: "😟",
        shloka: "मात्रास्पर्शास्तु कौन्तेय शीतोष्णसुखदुःखदाः।",
        translation: "O son of Kunti, the non-permanent appearance of happiness and distress is like seasons, they come and go.",
    },
    MoodQuote {
        mood: "Anger",
        memoji: "😠",
        shloka: "क्रोधाद्भवति सम्मोहः सम्मोहात्स्मृतिविभ्रमः।",
        translation: "From anger comes delusion, and from delusion, bewilderment of memory. (BG 2.63)",
    },
    MoodQuote {
        mood: "Laziness",
        memoji: "😴",
        shloka: "उद्धरेदात्मनाऽऽत्मानं नात्मानमवसादयेत्।",
        translation: "Rise and act! Laziness is the enemy of success.",
    },
    MoodQuote {
        mood: "Loneliness",
        memoji: "😔",
        shloka: "यो मां पश्यति सर्वत्र सर्वं च मयि पश्यति।",
        translation: "One who sees Me everywhere and sees everything in Me, is never separated from Me",
    },
    MoodQuote {
        mood: "Excited",
        memoji: "🤩",
        shloka: "न हि कश्चित्क्षणमपि जातु तिष्ठत्यकर्मकृत्।",
        translation: "Indeed, no one can remain inactive even for a moment.",
    },
    MoodQuote {
        mood: "Overwhelmed",
        memoji: "🤯",
        shloka: "व्यासप्रसादाच्छ्रुतवानेतद्गुह्यमहं परम्।",
        translation: "By the grace of Vyasa, I heard this supreme secret from Krishna Himself.",
    },
    MoodQuote {
        mood: "Protective",
        memoji: "🛡️",
        shloka: "कौन्तेय प्रतिजानीहि न मे भक्तः प्रणश्यति।",
        translation: "O Arjuna, declare it boldly: My devotee never perishes.",
    },
    MoodQuote {
        mood: "Overjoyed",
        memoji: "😇",
        shloka: "दिवि सूर्यसहस्रस्य भवेद्युगपदुत्थिता।",
        translation: "If a thousand suns were to rise at once in the sky, that would be like the splendor of the Supreme.",
    },
];

/// Quote card for a mood label, case-insensitive. Unknown labels have no card.
pub fn quote_for(mood: &str) -> Option<&'static MoodQuote> {
    MOOD_QUOTES.iter().find(|q| q.mood.eq_ignore_ascii_case(mood))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_lookup_is_case_insensitive() {
        let card = quote_for("aNGer").expect("anger card");
        assert_eq!(card.mood, "Anger");
        assert!(card.translation.contains("From anger comes delusion"));
    }

    #[test]
    fn unknown_mood_has_no_card() {
        assert!(quote_for("Confused").is_none());
    }

    #[test]
    fn every_card_carries_a_verse_and_translation() {
        for card in &MOOD_QUOTES {
            assert!(!card.shloka.is_empty());
            assert!(!card.translation.is_empty());
        }
    }
}
