//! Reply selection rules.
//!
//! Rules are tried in order and the first match wins. Matching is done on the
//! trimmed, lowercased text. The only conversational state is the wording of
//! the last bot message: when it asked which day the user meant, the next
//! message is taken as the answer.

use banter_types::message::History;

pub const EMPTY_PROMPT: &str = "Please type something and try again.";
pub const GREETING: &str = "Hello! How can I help you today?";
pub const GREETING_AGAIN: &str = "Hello again! What else can I help you with?";
pub const ASK_DAY: &str = "I can help with hours. What day are you asking about?";
pub const FAREWELL: &str = "Bye! Have a great day.";
pub const FALLBACK: &str =
    "Thanks! I'm a simple rule-based bot for now. Try saying 'hi' or ask about 'hours'.";

/// Recognized greetings (exact match after normalization).
pub const GREETINGS: [&str; 5] = ["hi", "hello", "hey", "good morning", "good evening"];

/// Lowercased marker identifying the "which day" question in a bot message.
const DAY_QUESTION_MARKER: &str = "what day are you asking about";

/// Earlier greetings needed before the bot switches to [`GREETING_AGAIN`].
const REPEAT_GREETING_THRESHOLD: usize = 2;

/// Choose the bot reply for `text`.
///
/// `history` is the conversation so far. It may or may not already end with
/// `text` as an unanswered user message; only answered user messages count as
/// earlier greetings.
pub fn decide(text: &str, history: &History) -> String {
    let normalized = normalize(text);

    if normalized.is_empty() {
        return EMPTY_PROMPT.to_string();
    }

    if is_greeting(&normalized) {
        let earlier = history
            .answered_user_messages()
            .filter(|m| is_greeting(&normalize(m.content())))
            .count();
        return if earlier >= REPEAT_GREETING_THRESHOLD {
            GREETING_AGAIN.to_string()
        } else {
            GREETING.to_string()
        };
    }

    if awaiting_day(history) {
        return day_acknowledgement(text.trim());
    }

    if normalized.contains("hours") || normalized.contains("open") {
        return ASK_DAY.to_string();
    }

    if normalized.contains("bye") || normalized.contains("goodbye") {
        return FAREWELL.to_string();
    }

    FALLBACK.to_string()
}

/// Acknowledge a day answer, echoing the user's wording as typed.
pub fn day_acknowledgement(day: &str) -> String {
    format!("Got it, {day}. We're open 9am to 5pm that day.")
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn is_greeting(normalized: &str) -> bool {
    GREETINGS.contains(&normalized)
}

fn awaiting_day(history: &History) -> bool {
    history
        .last_bot_message()
        .is_some_and(|m| m.content().to_lowercase().contains(DAY_QUESTION_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use banter_types::message::Message;

    fn exchange(pairs: &[(&str, &str)]) -> History {
        let mut history = History::new();
        for (user, bot) in pairs {
            history.push(Message::user(*user));
            history.push(Message::bot(*bot));
        }
        history
    }

    #[test]
    fn empty_and_whitespace_prompt_for_input() {
        let history = History::new();
        assert_eq!(decide("", &history), EMPTY_PROMPT);
        assert_eq!(decide("   \t\n", &history), EMPTY_PROMPT);
    }

    #[test]
    fn empty_text_wins_over_pending_day_question() {
        let history = exchange(&[("hours?", ASK_DAY)]);
        assert_eq!(decide("  ", &history), EMPTY_PROMPT);
    }

    #[test]
    fn greetings_match_exactly_after_normalization() {
        let history = History::new();
        for greeting in ["hi", "HELLO", "  Hey  ", "Good Morning", "good evening"] {
            assert_eq!(decide(greeting, &history), GREETING, "{greeting}");
        }
        // Not an exact match: falls through to later rules.
        assert_eq!(decide("hi there", &history), FALLBACK);
    }

    #[test]
    fn third_greeting_gets_hello_again() {
        let one = exchange(&[("hi", GREETING)]);
        assert_eq!(decide("hi", &one), GREETING);

        let two = exchange(&[("hi", GREETING), ("hello", GREETING)]);
        assert_eq!(decide("hey", &two), GREETING_AGAIN);
    }

    #[test]
    fn pending_user_message_is_not_counted_as_earlier_greeting() {
        let mut history = exchange(&[("hi", GREETING)]);
        history.push(Message::user("hi"));
        assert_eq!(decide("hi", &history), GREETING);
    }

    #[test]
    fn non_greetings_do_not_count_toward_repeat() {
        let history = exchange(&[("hi", GREETING), ("what's up", FALLBACK)]);
        assert_eq!(decide("hi", &history), GREETING);
    }

    #[test]
    fn hours_and_open_ask_for_day() {
        let history = History::new();
        assert_eq!(decide("What are your hours?", &history), ASK_DAY);
        assert_eq!(decide("Are you OPEN today", &history), ASK_DAY);
    }

    #[test]
    fn answer_after_day_question_is_acknowledged_verbatim() {
        let history = exchange(&[("What are your hours?", ASK_DAY)]);
        let reply = decide("Monday", &history);
        assert_eq!(reply, day_acknowledgement("Monday"));
        assert!(reply.contains("Monday"));
    }

    #[test]
    fn day_question_detection_is_case_insensitive() {
        let history = exchange(&[("hours", "WHAT DAY ARE YOU ASKING ABOUT?")]);
        assert_eq!(decide("friday", &history), day_acknowledgement("friday"));
    }

    #[test]
    fn day_context_takes_priority_over_keywords() {
        let history = exchange(&[("hours", ASK_DAY)]);
        assert_eq!(decide("bye", &history), day_acknowledgement("bye"));
    }

    #[test]
    fn greeting_takes_priority_over_day_context() {
        let history = exchange(&[("hours", ASK_DAY)]);
        assert_eq!(decide("hello", &history), GREETING);
    }

    #[test]
    fn day_context_only_lasts_one_turn() {
        let ack = day_acknowledgement("monday");
        let history = exchange(&[("hours", ASK_DAY), ("monday", ack.as_str())]);
        assert_eq!(decide("tuesday", &history), FALLBACK);
    }

    #[test]
    fn farewell_keywords() {
        let history = History::new();
        assert_eq!(decide("ok bye", &history), FAREWELL);
        assert_eq!(decide("Goodbye!", &history), FAREWELL);
    }

    #[test]
    fn hours_rule_precedes_farewell() {
        assert_eq!(decide("bye, what hours?", &History::new()), ASK_DAY);
    }

    #[test]
    fn anything_else_falls_back() {
        assert_eq!(decide("tell me a joke", &History::new()), FALLBACK);
    }
}
