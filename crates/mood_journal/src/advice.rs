//! Advice generation: threshold bands over the weekly aggregates plus a
//! table of reflective paragraphs. The texts live in [`AdviceTemplates`] so
//! the generator is control flow over configuration, not hard-coded prose.

use indexmap::IndexMap;

/// Ratio at or above which the week reads as a great one.
const GREAT_WEEK_RATIO: f64 = 0.7;
/// Ratio at or above which ups outweighed downs.
const UPBEAT_RATIO: f64 = 0.4;
/// More negative entries than this adds the hard-week paragraph.
const HARD_WEEK_NEGATIVES: u32 = 3;
/// At least this many entries under the literal lowercase "happy" key adds
/// the celebration paragraph.
const CELEBRATE_HAPPY_COUNT: u32 = 3;

/// The advice copy: an opening sentence per assessment band, a reflective
/// paragraph per dominant-mood group, and two conditional extras.
#[derive(Clone, Debug)]
pub struct AdviceTemplates {
    pub opening_great: String,
    pub opening_upbeat: String,
    pub opening_challenging: String,
    pub opening_mixed: String,
    /// Dominant mood in {happy, excited, overjoyed}.
    pub joyful: String,
    /// Dominant mood in {sad, lonely}.
    pub downhearted: String,
    /// Dominant mood "angry".
    pub angry: String,
    /// Dominant mood in {anxious, overwhelmed}.
    pub overloaded: String,
    /// Dominant mood "tired".
    pub tired: String,
    /// Any other dominant mood.
    pub open: String,
    pub hard_week_extra: String,
    pub happy_moments_extra: String,
}

impl Default for AdviceTemplates {
    fn default() -> Self {
        Self {
            opening_great: "You've had a great week! Keep doing what makes you happy. ".into(),
            opening_upbeat: "Your week had more ups than downs. ".into(),
            opening_challenging: "You've had a challenging week. ".into(),
            opening_mixed: "Your week had a mix of emotions. ".into(),
            joyful: "Your heart felt light and joyful this week. Enjoy this fully, but also remember—lasting peace comes from within, not just from external highs. Reflect on what truly nourished your spirit, and carry that warmth forward without getting attached to outcomes.".into(),
            downhearted: "This week may have felt heavy or isolating. Emotions pass like clouds in the sky. You're not alone, even when it feels that way. Sometimes, sitting with your feelings gently and reaching out—just a little—can open up space for light to enter again.".into(),
            angry: "Anger often arises when expectations collide with reality. Take a moment to pause, breathe, and look inward. It's okay to feel it—but you don’t have to act on it. Responding from calm awareness helps you protect your energy and choose your next step wisely.".into(),
            overloaded: "When life feels like too much, slow down. You don’t have to do everything at once. Break things into small steps, and bring your focus gently back to what you can control right now. Peace grows when you create space between stimulus and response.".into(),
            tired: "Tiredness is your body and mind asking for rest. You don’t have to earn rest—it’s a basic need. This week, allow yourself to step back, restore, and simply be. Moving gently and mindfully often brings you closer to clarity than constant pushing ever could.".into(),
            open: "However you're feeling, it's okay. Emotions are like waves—they rise, they fall, they pass. Try to observe what your heart needs right now. A little space, a little kindness, and a few quiet moments can bring surprising clarity.".into(),
            hard_week_extra: "\n\n\nThis week had more than a few hard days. That’s okay. Sometimes, the path forward begins with simply noticing what’s hurting and allowing yourself to feel it. Writing it down or sharing with someone can help lighten the weight you've been carrying.".into(),
            happy_moments_extra: "\n\n\nThere were several happy moments this week. That’s a beautiful thing. Pause and remember what brought you those smiles—people, places, or even small things. Try to hold on to those habits or spaces that bring you closer to yourself.".into(),
        }
    }
}

impl AdviceTemplates {
    /// Paragraph for a dominant mood, compared lowercased.
    fn paragraph_for(&self, dominant_mood: &str) -> &str {
        match dominant_mood.to_lowercase().as_str() {
            "happy" | "excited" | "overjoyed" => &self.joyful,
            "sad" | "lonely" => &self.downhearted,
            "angry" => &self.angry,
            "anxious" | "overwhelmed" => &self.overloaded,
            "tired" => &self.tired,
            _ => &self.open,
        }
    }
}

/// Assemble the advice text from the weekly aggregates.
///
/// The assessment denominator counts positives, negatives, and the literal
/// lowercase `"tired"` key only; other neutral moods stay out of it, so an
/// all-neutral week lands in the mixed-emotions band. Kept as the product
/// shipped it (see DESIGN.md).
pub fn generate_advice(
    templates: &AdviceTemplates,
    dominant_mood: &str,
    positive_days: u32,
    negative_days: u32,
    mood_frequency: &IndexMap<String, u32>,
) -> String {
    let tired_count = mood_frequency.get("tired").copied().unwrap_or(0);
    let total_days = positive_days + negative_days + tired_count;

    let mut advice = String::new();

    let opening = if total_days == 0 {
        &templates.opening_mixed
    } else {
        let mood_ratio = f64::from(positive_days) / f64::from(total_days);
        if (GREAT_WEEK_RATIO..=1.0).contains(&mood_ratio) {
            &templates.opening_great
        } else if (UPBEAT_RATIO..GREAT_WEEK_RATIO).contains(&mood_ratio) {
            &templates.opening_upbeat
        } else if (0.0..UPBEAT_RATIO).contains(&mood_ratio) {
            &templates.opening_challenging
        } else {
            &templates.opening_mixed
        }
    };
    advice.push_str(opening);

    advice.push_str(templates.paragraph_for(dominant_mood));

    if negative_days > HARD_WEEK_NEGATIVES {
        advice.push_str(&templates.hard_week_extra);
    }

    // Exact-case lookup: only the literal lowercase "happy" key counts here,
    // unlike the case-insensitive bucket classification.
    if mood_frequency.get("happy").copied().unwrap_or(0) >= CELEBRATE_HAPPY_COUNT {
        advice.push_str(&templates.happy_moments_extra);
    }

    advice
}
