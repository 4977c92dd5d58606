//! Rendering helpers for the informational replies.

use chrono::NaiveDateTime;

/// Render the capability list: a header line, each capability prefixed with
/// its 1-based ordinal, and a closing line inviting free-form input.
pub(crate) fn render_capabilities(capabilities: &[&str]) -> String {
    let mut text = String::from("Here's what I can do:\n\n");
    for (i, capability) in capabilities.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", i + 1, capability));
    }
    text.push_str("\nJust type naturally and I'll do my best to help!");
    text
}

/// Reply interpolating the clock as 12-hour `HH:MM AM/PM`.
pub(crate) fn clock_reply(now: &NaiveDateTime) -> String {
    format!("The current time is {}.", now.format("%I:%M %p"))
}

/// Reply interpolating the date as full month name, day, 4-digit year.
pub(crate) fn date_reply(now: &NaiveDateTime) -> String {
    format!("Today's date is {}.", now.format("%B %d, %Y"))
}
