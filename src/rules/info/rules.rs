use crate::rules::info::helpers::{clock_reply, date_reply, render_capabilities};
use crate::{Rule, Trigger};

/// What the responder can do, in presentation order. Rendered on demand as a
/// numbered list; fixed at construction and never mutated.
pub(crate) static CAPABILITIES: &[&str] = &[
    "Greet users and respond to greetings",
    "Answer questions about myself",
    "Provide weather information (simulated)",
    "Tell the current time",
    "Perform basic calculations",
    "Tell jokes",
    "List my capabilities with 'help' or 'what can you do'",
];

/// Static condition string; not a live lookup.
pub(crate) const WEATHER_REPLY: &str = "I can provide simulated weather information! \
    The weather today is sunny with a temperature of 72°F (22°C). Perfect day to go outside!";

pub(crate) fn rule_capabilities() -> Rule {
    rule! {
        name: "capabilities",
        trigger: Trigger::Keywords(&["help", "what can you do", "capabilities", "commands"]),
        prod: |_utt, _ctx, _select| -> Option<String> {
            Some(render_capabilities(CAPABILITIES))
        },
    }
}

pub(crate) fn rule_weather() -> Rule {
    canned! {
        name: "weather",
        keywords: ["weather"],
        reply: WEATHER_REPLY,
    }
}

pub(crate) fn rule_time() -> Rule {
    rule! {
        name: "time query",
        trigger: Trigger::Paired { word: "time", companions: &["what", "tell", "current"] },
        prod: |_utt, ctx, _select| -> Option<String> {
            Some(clock_reply(&ctx.reference_time))
        },
    }
}

pub(crate) fn rule_date() -> Rule {
    rule! {
        name: "date query",
        trigger: Trigger::Paired { word: "date", companions: &["what", "tell", "today"] },
        prod: |_utt, ctx, _select| -> Option<String> {
            Some(date_reply(&ctx.reference_time))
        },
    }
}
