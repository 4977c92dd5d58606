use once_cell::sync::Lazy;
use regex::Regex;

use crate::rules::arithmetic::helpers::{BinOp, parse_operand, render_value};
use crate::{Rule, Trigger};

pub(crate) const DIVIDE_BY_ZERO_REPLY: &str = "I can't divide by zero! That would break the universe!";

/// Recognized operator patterns, tried in fixed order: a nonnegative decimal
/// literal, the operator symbol, a second literal, with optional whitespace
/// around the symbol. The first pattern that matches anywhere in the input
/// wins; within a pattern, the leftmost match is used.
static PATTERNS: Lazy<Vec<(&'static Regex, BinOp)>> = Lazy::new(|| {
    vec![
        (regex!(r"(\d+\.?\d*)\s*\+\s*(\d+\.?\d*)"), BinOp::Add),
        (regex!(r"(\d+\.?\d*)\s*-\s*(\d+\.?\d*)"), BinOp::Sub),
        (regex!(r"(\d+\.?\d*)\s*\*\s*(\d+\.?\d*)"), BinOp::Mul),
        (regex!(r"(\d+\.?\d*)\s*/\s*(\d+\.?\d*)"), BinOp::Div),
    ]
});

/// Scan `lower` for the first recognized arithmetic expression and evaluate
/// it. `None` means "no arithmetic found" — distinct from any valid result,
/// including zero — and lets evaluation fall through to the next rule.
pub(crate) fn extract(lower: &str) -> Option<String> {
    for (pattern, op) in PATTERNS.iter() {
        let Some(caps) = pattern.captures(lower) else {
            continue;
        };

        // A failed operand parse counts as "this pattern did not match" so
        // the remaining patterns still get their turn.
        let lhs = caps.get(1).and_then(|m| parse_operand(m.as_str()));
        let rhs = caps.get(2).and_then(|m| parse_operand(m.as_str()));
        let (Some(lhs), Some(rhs)) = (lhs, rhs) else {
            continue;
        };

        if *op == BinOp::Div && rhs == 0.0 {
            return Some(DIVIDE_BY_ZERO_REPLY.to_string());
        }

        return Some(format!("The answer is: {}", render_value(op.apply(lhs, rhs))));
    }

    None
}

pub(crate) fn rule_calculation() -> Rule {
    rule! {
        name: "arithmetic",
        trigger: Trigger::Always,
        prod: |utt, _ctx, _select| -> Option<String> {
            extract(utt.lower)
        },
    }
}
