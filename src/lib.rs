extern crate self as parley;

#[macro_use]
mod macros;
mod api;
mod engine;
mod rules;

pub use api::{
    Context, RespondDetails, RespondResultVerbose, Select, UniformSelect, respond, respond_verbose_with, respond_with,
    welcome_message,
};

// --- Internal types ---------------------------------------------------------

/// Both views over one line of input: the trimmed original text (echoed back
/// verbatim by the fallback rule) and its lower-cased copy (used by every
/// trigger test).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Utterance<'a> {
    pub raw: &'a str,
    pub lower: &'a str,
}

/// Trigger predicate over the lower-cased input. A rule fires only when its
/// trigger matches; the engine then asks the production for a reply.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Trigger {
    /// Any of the listed needles appears as a substring.
    Keywords(&'static [&'static str]),

    /// `word` appears together with at least one companion word. Used by the
    /// time and date rules to tell a query ("what time is it") apart from a
    /// declarative sentence that merely contains the word.
    Paired { word: &'static str, companions: &'static [&'static str] },

    /// Always fires. Used by rules that do their real matching in the
    /// production (arithmetic) and by the final catch-all.
    Always,
}

impl Trigger {
    pub fn matches(&self, lower: &str) -> bool {
        match self {
            Trigger::Keywords(needles) => needles.iter().any(|n| lower.contains(n)),
            Trigger::Paired { word, companions } => {
                lower.contains(word) && companions.iter().any(|c| lower.contains(c))
            }
            Trigger::Always => true,
        }
    }
}

/// Response producer for a matched rule. Returning `None` sends evaluation on
/// to the next rule in priority order (the arithmetic rule uses this when no
/// expression is found in the input).
pub(crate) type Production =
    Box<dyn Fn(&Utterance<'_>, &api::Context, &dyn api::Select) -> Option<String> + Send + Sync>;

/// A response rule: a name, a `trigger` predicate, and a `production` that
/// builds the reply when the trigger matches.
pub(crate) struct Rule {
    pub name: &'static str,
    pub trigger: Trigger,
    pub production: Production,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("trigger", &self.trigger)
            .field("production", &"<function>")
            .finish()
    }
}
