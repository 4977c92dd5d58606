use crate::{Rule, Trigger};

/// Joke pool; one entry is chosen per request through the injected selector.
pub(crate) static JOKES: &[&str] = &[
    "Why do programmers prefer dark mode? Because light attracts bugs!",
    "Why did the chatbot go to therapy? It had too many issues to resolve!",
    "What's a chatbot's favorite snack? Microchips!",
    "Why don't chatbots ever get tired? They run on endless loops!",
];

pub(crate) const GREETING_REPLY: &str = "Hello! How can I help you today? Type 'help' to see what I can do.";

pub(crate) const FAREWELL_REPLY: &str = "Goodbye! Have a great day! Feel free to come back anytime.";

pub(crate) const WELL_BEING_REPLY: &str =
    "I'm doing great, thank you for asking! I'm here and ready to help. How are you?";

pub(crate) const IDENTITY_REPLY: &str =
    "I'm a simple rule-based chatbot. I match your message against a fixed set of patterns to decide how to respond.";

pub(crate) const GRATITUDE_REPLY: &str = "You're welcome! Happy to help. Is there anything else I can do for you?";

pub(crate) fn rule_greeting() -> Rule {
    canned! {
        name: "greeting",
        keywords: ["hello", "hi", "hey", "greetings", "good morning", "good afternoon", "good evening"],
        reply: GREETING_REPLY,
    }
}

pub(crate) fn rule_farewell() -> Rule {
    canned! {
        name: "farewell",
        keywords: ["bye", "goodbye", "see you", "farewell"],
        reply: FAREWELL_REPLY,
    }
}

pub(crate) fn rule_well_being() -> Rule {
    canned! {
        name: "well-being",
        keywords: ["how are you", "how do you do"],
        reply: WELL_BEING_REPLY,
    }
}

pub(crate) fn rule_identity() -> Rule {
    canned! {
        name: "identity",
        keywords: ["who are you", "what are you", "your name"],
        reply: IDENTITY_REPLY,
    }
}

pub(crate) fn rule_gratitude() -> Rule {
    canned! {
        name: "gratitude",
        keywords: ["thank"],
        reply: GRATITUDE_REPLY,
    }
}

pub(crate) fn rule_joke() -> Rule {
    rule! {
        name: "joke",
        trigger: Trigger::Keywords(&["joke", "funny"]),
        prod: |_utt, _ctx, select| -> Option<String> {
            Some(JOKES[select.choose(JOKES.len())].to_string())
        },
    }
}
