use colored::*;
use roster_common::record::{Record, RecordEvent};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn record_details(record: &Record) -> Vec<Detail> {
    let skills: ColoredString = if record.skills().is_empty() {
        "none".dimmed()
    } else {
        record.skills().join(", ").color(colors::SKILL)
    };

    let adult: ColoredString = if record.is_adult() {
        "yes".color(colors::ADULT)
    } else {
        "no".color(colors::MINOR)
    };

    vec![
        ("Age".to_string(), record.age().to_string().color(colors::AGE)),
        ("Skills".to_string(), skills),
        ("Adult".to_string(), adult),
    ]
}

pub fn event_line(event: &RecordEvent) -> ColoredString {
    match event {
        RecordEvent::SkillAdded { skill } => {
            format!("Skill added: {}", skill.color(colors::SKILL).bold()).normal()
        }
        RecordEvent::AgedUp { age } => format!(
            "Happy birthday! You are now {} years old",
            age.to_string().color(colors::AGE).bold()
        )
        .normal(),
    }
}
