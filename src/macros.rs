#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        trigger: $trigger:expr,
        prod: |$utt:ident, $ctx:ident, $select:ident| -> Option<String> $body:block
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            trigger: $trigger,
            production: Box::new(
                move |$utt: &$crate::Utterance<'_>,
                      $ctx: &$crate::Context,
                      $select: &dyn $crate::Select|
                      -> Option<String> { $body },
            ),
        }
    }};
}

/// Shorthand for the common case: a keyword trigger with a fixed reply.
#[macro_export]
macro_rules! canned {
    (
        name: $name:expr,
        keywords: [ $($kw:expr),* $(,)? ],
        reply: $reply:expr
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            trigger: $crate::Trigger::Keywords(&[ $($kw),* ]),
            production: Box::new(
                move |_: &$crate::Utterance<'_>, _: &$crate::Context, _: &dyn $crate::Select| {
                    Some(($reply).to_string())
                },
            ),
        }
    }};
}
