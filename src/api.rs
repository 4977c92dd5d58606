use crate::Rule;
use crate::engine::Engine;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use rand::Rng;
use std::time::Duration;

static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(crate::rules::get);

/// Fixed welcome for transports to send when a new participant joins a
/// conversation. The core only owns the content; deciding *when* to send it
/// (once per join, never to the responder itself) is the transport's job.
const WELCOME: &str = "Hello and welcome!\n\n\
    I'm a simple chatbot here to assist you.\n\
    Type 'help' or 'what can you do' to see what I can do!";

/// Responding context.
///
/// This holds the environment needed by clock-dependent rules (the time and
/// date queries).
#[derive(Debug, Clone)]
pub struct Context {
    /// Wall-clock reading interpolated into time/date replies.
    pub reference_time: NaiveDateTime,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            let date = NaiveDate::from_ymd_opt(2021, 9, 8).unwrap();
            let time = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
            Self { reference_time: NaiveDateTime::new(date, time) }
        } else {
            Self { reference_time: Local::now().naive_local() }
        }
    }
}

/// Selection strategy for replies drawn from a canned pool (jokes, fallback
/// templates). Injected so tests can substitute a deterministic picker.
pub trait Select {
    /// Choose an index in `0..len`. Callers guarantee `len >= 1`.
    fn choose(&self, len: usize) -> usize;
}

/// Uniform selection backed by the thread-local generator. Each call draws
/// from a call-local handle, so shared use across threads needs no locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformSelect;

impl Select for UniformSelect {
    fn choose(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Additional details returned by [`respond_verbose_with`].
///
/// This is intentionally compact: it's meant for debugging and rule
/// inspection without dumping the entire internal state.
#[derive(Debug, Clone)]
pub struct RespondDetails {
    /// Total elapsed time.
    pub total: Duration,
    /// Name of the rule that produced the reply.
    pub rule: String,
    /// Names of every rule whose trigger matched, in priority order. Rules
    /// after the one that fired are never tested and never appear here.
    pub triggered: Vec<String>,
}

/// Result from [`respond_verbose_with`].
#[derive(Debug, Clone)]
pub struct RespondResultVerbose {
    pub text: String,
    pub reply: String,
    pub elapsed: Duration,
    pub details: RespondDetails,
}

/// Reply to `text` using the default ruleset, the live clock, and uniform
/// random selection.
///
/// Never fails: every input (including empty or whitespace-only text) maps to
/// some non-empty reply.
///
/// # Example
/// ```
/// use parley::respond;
///
/// let out = respond("hello there");
/// assert!(!out.is_empty());
/// ```
pub fn respond(text: &str) -> String {
    respond_with(text, &Context::default(), &UniformSelect)
}

/// Reply to `text` with the provided `context` and `select` strategy.
///
/// Use this for deterministic replies: pin the clock via `context` and pass a
/// fixed [`Select`] implementation.
pub fn respond_with(text: &str, context: &Context, select: &dyn Select) -> String {
    let engine = Engine::new(&DEFAULT_RULES);
    engine.run(text, context, select).reply
}

/// Reply to `text` and return extra (compact) debug details: which rule
/// fired, which triggers matched along the way, and timing.
///
/// The default [`respond_with`] path does not allocate these extra traces.
pub fn respond_verbose_with(text: &str, context: &Context, select: &dyn Select) -> RespondResultVerbose {
    let engine = Engine::new(&DEFAULT_RULES);
    let run = engine.run(text, context, select);

    let details = RespondDetails {
        total: run.metrics.total,
        rule: run.rule.to_string(),
        triggered: run.triggered.iter().map(|s| s.to_string()).collect(),
    };

    RespondResultVerbose { text: text.to_string(), reply: run.reply, elapsed: run.metrics.total, details }
}

/// The canned "new participant joined" welcome string. The transport decides
/// when (and to whom) it is sent; the core only owns the content.
pub fn welcome_message() -> &'static str {
    WELCOME
}
