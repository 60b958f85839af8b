//! Deterministic offline demo responder.
//!
//! Always available, never fails: a pure function from the lower-cased
//! input (plus the configured provider id) to a canned educational reply.
//! Triggers are checked in a fixed order, so the same input always lands
//! on the same sentence.

use crate::config::ProviderId;

const GREETING: &str =
    "Hello! I'm here to help you learn. What subject would you like to study today?";
const MATH: &str = "Mathematics is a wonderful subject! I can help you with algebra, geometry, \
     arithmetic, and more. What specific topic would you like to learn about?";
const SCIENCE: &str = "Science is fascinating! I can help you understand physics, chemistry, \
     biology, and more. What would you like to explore?";
const ENGLISH: &str = "I'd be happy to help you with English! We can work on grammar, vocabulary, \
     reading comprehension, or writing. What do you need help with?";
const HISTORY: &str = "History helps us understand our past! I can help you learn about different \
     historical periods, events, and figures. What interests you?";
const HELP: &str = "I'm here to help you learn! You can ask me questions about any subject, and \
     I'll do my best to explain it clearly. Try asking about math, science, English, or history!";
const THANKS: &str = "You're welcome! I'm glad I could help. Feel free to ask me anything else \
     you'd like to learn!";

/// Produce the canned reply for one user message.
///
/// The trigger order is part of the contract: subject keywords outrank the
/// generic "help" trigger, so "help me with math" gets the math reply.
pub fn demo_reply(input: &str, active: Option<ProviderId>) -> String {
    let lower = input.to_lowercase();
    let contains_any = |words: &[&str]| words.iter().any(|word| lower.contains(word));

    if contains_any(&["hello", "hi", "hey"]) {
        return GREETING.to_string();
    }
    if contains_any(&["math", "mathematics"]) {
        return MATH.to_string();
    }
    if lower.contains("science") {
        return SCIENCE.to_string();
    }
    if contains_any(&["english", "language"]) {
        return ENGLISH.to_string();
    }
    if lower.contains("history") {
        return HISTORY.to_string();
    }
    if lower.contains("help") {
        return HELP.to_string();
    }
    if lower.contains("thank") {
        return THANKS.to_string();
    }

    default_reply(input, active)
}

fn default_reply(input: &str, active: Option<ProviderId>) -> String {
    let (name, hint) = match active {
        Some(id) => (id.display_name(), id.key_hint()),
        None => ("AI", "Check the configuration file for setup instructions."),
    };

    format!(
        "That's an interesting question about \"{input}\". To get the best AI-powered answers, \
         please add your {name} API key in the configuration file. {hint} For now, I can help \
         you with general study tips and guidance!"
    )
}
