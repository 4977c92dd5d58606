use crate::{Rule, Trigger};

/// Templates for input no earlier rule recognized. `{input}` is replaced
/// with the verbatim (case-preserved, trimmed) user text — the lower-cased
/// matching copy never leaks into a reply.
pub(crate) static UNKNOWN_REPLIES: &[&str] = &[
    "I'm not sure I understand '{input}'. Could you rephrase that?",
    "Hmm, I don't recognize '{input}'. Type 'help' to see what I can do!",
    "I'm still learning! I don't know how to respond to '{input}' yet. Try asking something else or type 'help'.",
];

pub(crate) const PLACEHOLDER: &str = "{input}";

/// The catch-all. Must stay last in the table; the engine asserts this.
pub(crate) fn rule_unknown() -> Rule {
    rule! {
        name: "unknown input",
        trigger: Trigger::Always,
        prod: |utt, _ctx, select| -> Option<String> {
            let template = UNKNOWN_REPLIES[select.choose(UNKNOWN_REPLIES.len())];
            Some(template.replace(PLACEHOLDER, utt.raw))
        },
    }
}
