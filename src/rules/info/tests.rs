use crate::rules::info::helpers::{clock_reply, date_reply, render_capabilities};
use crate::rules::info::rules::{CAPABILITIES, WEATHER_REPLY};
use crate::{Context, UniformSelect, respond_with};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

fn reference_time(h: u32, m: u32) -> NaiveDateTime {
    let date = NaiveDate::from_ymd_opt(2021, 9, 8).unwrap();
    let time = NaiveTime::from_hms_opt(h, m, 0).unwrap();
    NaiveDateTime::new(date, time)
}

#[test]
fn capabilities_render_as_a_numbered_list() {
    let rendered = render_capabilities(CAPABILITIES);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.first(), Some(&"Here's what I can do:"));
    assert_eq!(lines.last(), Some(&"Just type naturally and I'll do my best to help!"));

    let numbered: Vec<&str> = lines.iter().filter(|l| l.starts_with(|c: char| c.is_ascii_digit())).copied().collect();
    assert_eq!(numbered.len(), CAPABILITIES.len());
    for (i, line) in numbered.iter().enumerate() {
        assert_eq!(*line, format!("{}. {}", i + 1, CAPABILITIES[i]));
    }
}

#[test]
fn capability_keywords_all_trigger_the_list() {
    let ctx = Context::default();
    let expected = render_capabilities(CAPABILITIES);

    for input in ["help", "HELP", "what can you do", "capabilities", "show me your commands"] {
        let reply = respond_with(input, &ctx, &UniformSelect);
        assert_eq!(reply, expected, "for input '{input}'");
    }
}

#[test]
fn weather_reply_is_static() {
    let ctx = Context::default();
    let first = respond_with("weather forecast please", &ctx, &UniformSelect);
    let second = respond_with("will the WEATHER hold", &ctx, &UniformSelect);
    assert_eq!(first, WEATHER_REPLY);
    assert_eq!(second, WEATHER_REPLY);
}

#[test]
fn clock_reply_uses_twelve_hour_format() {
    assert_eq!(clock_reply(&reference_time(9, 5)), "The current time is 09:05 AM.");
    assert_eq!(clock_reply(&reference_time(0, 0)), "The current time is 12:00 AM.");
    assert_eq!(clock_reply(&reference_time(12, 30)), "The current time is 12:30 PM.");
    assert_eq!(clock_reply(&reference_time(23, 59)), "The current time is 11:59 PM.");
}

#[test]
fn date_reply_spells_out_the_month() {
    assert_eq!(date_reply(&reference_time(9, 5)), "Today's date is September 08, 2021.");

    let new_year = NaiveDateTime::new(
        NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
        NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
    );
    assert_eq!(date_reply(&new_year), "Today's date is January 01, 2022.");
}

#[test]
fn time_and_date_queries_need_a_companion_word() {
    let ctx = Context { reference_time: reference_time(9, 5) };

    // Queries.
    assert_eq!(respond_with("what time is it", &ctx, &UniformSelect), "The current time is 09:05 AM.");
    assert_eq!(respond_with("tell me the current time", &ctx, &UniformSelect), "The current time is 09:05 AM.");
    assert_eq!(respond_with("what's the date today", &ctx, &UniformSelect), "Today's date is September 08, 2021.");

    // Declarative mentions fall through to the fallback echo.
    let reply = respond_with("we had a great time", &ctx, &UniformSelect);
    assert!(reply.contains("we had a great time"), "expected fallback echo, got: {reply}");
}

#[test]
fn time_query_outranks_date_query() {
    // Both subjects with a shared companion word: "time" is tried first.
    let ctx = Context { reference_time: reference_time(14, 45) };
    let reply = respond_with("what are the time and date", &ctx, &UniformSelect);
    assert_eq!(reply, "The current time is 02:45 PM.");
}
