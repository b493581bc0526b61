#![cfg(test)]
use pretty_assertions::assert_eq;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use roster_common::record::{ADULT_AGE, AgeUpdate, Record, RecordEvent};

/// Any mix of accepted and rejected updates leaves the last accepted value behind.
#[quickcheck]
fn age_tracks_last_accepted_update(updates: Vec<i64>) -> bool {
    let mut record = Record::default();
    let mut expected: u64 = 0;

    for age in updates {
        let outcome = record.set_age(age);
        if age >= 0 {
            expected = age as u64;
            if outcome != AgeUpdate::Accepted {
                return false;
            }
        } else if outcome != (AgeUpdate::Rejected { attempted: age }) {
            return false;
        }
    }

    record.age() == expected
}

#[quickcheck]
fn adulthood_follows_the_threshold(age: u16) -> bool {
    let record = Record::new("Someone", i64::from(age)).unwrap();
    record.is_adult() == (u64::from(age) >= ADULT_AGE)
}

#[quickcheck]
fn display_text_reports_count_not_contents(skills: Vec<String>) -> TestResult {
    if skills.iter().any(|skill| skill.contains('}')) {
        return TestResult::discard();
    }
    let mut record = Record::new("Counter", 1).unwrap();
    for skill in &skills {
        record.append_skill(skill.clone());
    }

    let text = record.to_display_text();
    TestResult::from_bool(text.ends_with(&format!("skills={}}}", skills.len())))
}

#[test]
fn events_mirror_the_mutations() {
    let mut record = Record::new("Juan", 25).unwrap();

    let events = vec![
        record.append_skill("Java"),
        record.append_skill("Python"),
        record.increment_age(),
        record.increment_age(),
    ];

    assert_eq!(
        events,
        vec![
            RecordEvent::SkillAdded {
                skill: "Java".to_string()
            },
            RecordEvent::SkillAdded {
                skill: "Python".to_string()
            },
            RecordEvent::AgedUp { age: 26 },
            RecordEvent::AgedUp { age: 27 },
        ]
    );
    assert_eq!(record.age(), 27);
}

#[test]
fn setters_do_not_touch_skills() {
    let mut record = Record::default();
    record.append_skill("Java");

    record.set_name("María");
    record.set_age(17);
    record.set_age(-1);

    assert_eq!(record.skills(), ["Java"]);
    assert_eq!(record.to_display_text(), "Record{name='María', age=17, skills=1}");
}
