//! Rule evaluation engine.
//!
//! Replying to an input line is a short pipeline:
//!
//! ```text
//! rules (ordered)  ──┐
//!                    │
//! input ─ normalize ─┼─ trim, lower-case, empty short-circuit
//!                    │
//!                    v
//!          first-match-wins loop
//!            - test each trigger in priority order
//!            - ask the matching rule's production for a reply
//!            - a production may decline (None) and pass the turn on
//!                    │
//!                    v
//!               RunOutcome
//! ```
//!
//! The table always ends with a catch-all rule whose production never
//! declines, so every non-empty input produces exactly one reply. That
//! invariant is asserted when the engine is built, not handled at runtime.
//!
//! Set `PARLEY_DEBUG_RULES=1` to print per-rule trigger/production traces.

use crate::api::{Context, Select};
use crate::{Rule, Trigger, Utterance};
use std::time::{Duration, Instant};

/// Reply for empty or whitespace-only input, returned before any rule runs.
pub(crate) const EMPTY_INPUT_REPLY: &str = "I didn't receive any text. Please type something!";

/// Rule name reported when the empty-input short-circuit answers.
pub(crate) const EMPTY_INPUT_RULE: &str = "empty input";

/// Timing captured for a single evaluation.
#[derive(Debug, Clone)]
pub(crate) struct RunMetrics {
    pub total: Duration,
}

/// Outcome of one evaluation: the reply, the rule that produced it, and the
/// names of every rule whose trigger matched along the way.
#[derive(Debug, Clone)]
pub(crate) struct RunOutcome {
    pub reply: String,
    pub rule: &'static str,
    pub triggered: Vec<&'static str>,
    pub metrics: RunMetrics,
}

/// First-match-wins evaluator over an ordered rule table.
pub(crate) struct Engine<'r> {
    rules: &'r [Rule],
}

impl<'r> Engine<'r> {
    /// Build an evaluator over `rules`.
    ///
    /// Panics if the table does not end with a catch-all rule; a table that
    /// can decline every input would break the `respond` contract.
    pub fn new(rules: &'r [Rule]) -> Self {
        assert!(
            matches!(rules.last().map(|r| &r.trigger), Some(Trigger::Always)),
            "rule table must end with a catch-all rule"
        );
        Engine { rules }
    }

    /// Evaluate `input` and return the reply. Never fails: empty input gets
    /// the canned empty-input reply, and the catch-all covers everything the
    /// earlier rules decline.
    pub fn run(&self, input: &str, context: &Context, select: &dyn Select) -> RunOutcome {
        let started = Instant::now();

        let raw = input.trim();
        if raw.is_empty() {
            return RunOutcome {
                reply: EMPTY_INPUT_REPLY.to_string(),
                rule: EMPTY_INPUT_RULE,
                triggered: Vec::new(),
                metrics: RunMetrics { total: started.elapsed() },
            };
        }

        let lower = raw.to_lowercase();
        let utterance = Utterance { raw, lower: &lower };

        let mut triggered = Vec::new();
        for rule in self.rules {
            if !rule.trigger.matches(utterance.lower) {
                continue;
            }
            triggered.push(rule.name);

            let produced = (rule.production)(&utterance, context, select);
            if debug_rules() {
                eprintln!("[engine] rule=\"{}\" produced={}", rule.name, produced.is_some());
            }

            if let Some(reply) = produced {
                return RunOutcome {
                    reply,
                    rule: rule.name,
                    triggered,
                    metrics: RunMetrics { total: started.elapsed() },
                };
            }
        }

        // Unreachable by construction: `new` asserts the table ends with a
        // catch-all, and the catch-all production never declines.
        unreachable!("no rule produced a reply")
    }
}

fn debug_rules() -> bool {
    std::env::var_os("PARLEY_DEBUG_RULES").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UniformSelect;

    #[test]
    fn empty_and_whitespace_input_short_circuit() {
        let rules = crate::rules::get();
        let engine = Engine::new(&rules);
        let ctx = Context::default();

        for input in ["", "   ", "\t\n"] {
            let run = engine.run(input, &ctx, &UniformSelect);
            assert_eq!(run.reply, EMPTY_INPUT_REPLY);
            assert_eq!(run.rule, EMPTY_INPUT_RULE);
            assert!(run.triggered.is_empty());
        }
    }

    #[test]
    fn keyword_trigger_is_substring_containment() {
        let trigger = Trigger::Keywords(&["hello", "hi"]);
        assert!(trigger.matches("well hello there"));
        assert!(trigger.matches("this")); // "hi" inside "this"
        assert!(!trigger.matches("greetings"));
    }

    #[test]
    fn paired_trigger_needs_a_companion() {
        let trigger = Trigger::Paired { word: "time", companions: &["what", "tell", "current"] };
        assert!(trigger.matches("what time is it"));
        assert!(trigger.matches("tell me the time"));
        assert!(!trigger.matches("that was a fun time"));
        assert!(!trigger.matches("what is this"));
    }

    #[test]
    #[should_panic(expected = "catch-all")]
    fn table_without_catch_all_is_rejected() {
        let rules = vec![canned! {
            name: "greeting",
            keywords: ["hello"],
            reply: "Hello!",
        }];
        let _ = Engine::new(&rules);
    }
}
