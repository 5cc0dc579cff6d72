//! Prompt frame for the emotional-mentor persona.

/// Role preamble sent ahead of every user message. The reply contract is
/// 1-2 short sentences of plain text, no markdown decoration.
const MENTOR_ROLE: &str = "[Role: You are the user's emotional mentor. \
Respond compassionately in 1-2 short sentences. Plain text only, \
no stars or hashtags.]";

/// Wrap the user's text in the mentor frame.
pub fn mentor_prompt(user_text: &str) -> String {
    format!("{MENTOR_ROLE}\nUser: {user_text}\nAI:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mentor_prompt_frames_user_text() {
        let prompt = mentor_prompt("I had a rough day");
        assert!(prompt.starts_with("[Role:"));
        assert!(prompt.contains("\nUser: I had a rough day\n"));
        assert!(prompt.ends_with("AI:"));
    }
}
