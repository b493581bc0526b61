#![cfg(test)]
use pretty_assertions::assert_eq;
use roster_common::error::RosterError;
use roster_common::record::RecordEvent;
use roster_core::session::greeting::run_greeting;
use roster_core::session::profile::{ProfileRequest, build_profile};
use roster_core::session::walkthrough::run_walkthrough;

use crate::utils::{Entry, TaggedSink};

/// Prompts must come through `prompt`, titles through `header`.
#[test]
fn greeting_routes_prompts_and_headers() {
    let mut input: &[u8] = b"Ana\n\n30\n";
    let mut sink = TaggedSink::default();

    let greeting = run_greeting(&mut input, &mut sink).unwrap();

    assert_eq!(greeting.age, 30);
    assert_eq!(sink.headers(), vec!["Welcome to roster", "User input", "Result"]);
    let prompts: Vec<&Entry> = sink
        .entries
        .iter()
        .filter(|entry| matches!(entry, Entry::Prompt(_)))
        .collect();
    assert_eq!(
        prompts,
        vec![
            &Entry::Prompt("Enter your name: ".to_string()),
            &Entry::Prompt("Enter your age: ".to_string()),
        ]
    );
}

#[test]
fn greeting_accepts_windows_line_endings() {
    let mut input: &[u8] = b"Pedro\r\n12\r\n";
    let mut sink = TaggedSink::default();

    let greeting = run_greeting(&mut input, &mut sink).unwrap();

    assert_eq!(greeting.name, "Pedro");
    assert!(sink
        .entries
        .contains(&Entry::Line("In 10 years you will be 22 years old.".to_string())));
}

#[test]
fn walkthrough_notices_go_through_notify() {
    let mut sink = TaggedSink::default();

    run_walkthrough(&mut sink).unwrap();

    assert_eq!(
        sink.notices(),
        vec![
            &RecordEvent::SkillAdded {
                skill: "Java".to_string()
            },
            &RecordEvent::SkillAdded {
                skill: "Python".to_string()
            },
            &RecordEvent::SkillAdded {
                skill: "JavaScript".to_string()
            },
            &RecordEvent::AgedUp { age: 26 },
        ]
    );
    assert_eq!(sink.headers(), vec!["Information", "Skills of Juan"]);
}

#[test]
fn profile_birthdays_cross_the_adult_threshold() {
    let request = ProfileRequest {
        name: Some("Tomás".to_string()),
        age: Some(16),
        skills: Vec::new(),
        birthdays: 2,
    };
    let mut sink = TaggedSink::default();

    let record = build_profile(request, &mut sink).unwrap();

    assert_eq!(record.age(), 18);
    assert!(record.is_adult());
    assert_eq!(
        sink.notices(),
        vec![&RecordEvent::AgedUp { age: 17 }, &RecordEvent::AgedUp { age: 18 }]
    );
    assert_eq!(
        sink.entries.last(),
        Some(&Entry::Line("Tomás is an adult".to_string()))
    );
}

#[test]
fn profile_with_negative_age_fails() {
    let request = ProfileRequest {
        age: Some(-1),
        ..ProfileRequest::default()
    };
    let mut sink = TaggedSink::default();

    let result = build_profile(request, &mut sink);

    assert!(
        matches!(result, Err(RosterError::NegativeAge(-1))),
        "Expected NegativeAge, received: {result:?}"
    );
    assert!(sink.entries.is_empty());
}
