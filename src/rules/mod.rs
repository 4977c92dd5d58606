pub(crate) mod arithmetic;
pub(crate) mod fallback;
pub(crate) mod info;
pub(crate) mod smalltalk;

use crate::Rule;

/// Build the full rule table in priority order.
///
/// Order is significant and lives only here: earlier rules take precedence
/// and evaluation stops at the first rule whose production replies. The
/// canned-content invariants (non-empty pools) are checked up front so a bad
/// table fails at construction instead of mid-conversation.
pub(crate) fn get() -> Vec<Rule> {
    assert!(!info::rules::CAPABILITIES.is_empty(), "capability list must not be empty");
    assert!(!smalltalk::rules::JOKES.is_empty(), "joke pool must not be empty");
    assert!(!fallback::rules::UNKNOWN_REPLIES.is_empty(), "fallback template pool must not be empty");

    vec![
        info::rules::rule_capabilities(),
        smalltalk::rules::rule_greeting(),
        smalltalk::rules::rule_farewell(),
        smalltalk::rules::rule_well_being(),
        smalltalk::rules::rule_identity(),
        info::rules::rule_weather(),
        info::rules::rule_time(),
        info::rules::rule_date(),
        smalltalk::rules::rule_joke(),
        arithmetic::rules::rule_calculation(),
        smalltalk::rules::rule_gratitude(),
        fallback::rules::rule_unknown(),
    ]
}
