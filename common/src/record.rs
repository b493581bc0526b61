//! # Record Model
//!
//! A [`Record`] describes a named individual with an age and an ordered list of skills.
//!
//! Two rules hold for every record:
//! * The age is never negative. Constructors return [`RosterError::NegativeAge`] and
//!   [`Record::set_age`] answers [`AgeUpdate::Rejected`] instead of storing the value.
//! * Skills only grow. They keep insertion order and duplicates.

use std::fmt;

use tracing::debug;

use crate::error::{Result, RosterError};
use crate::output::TextSink;

mod event;

pub use event::{AgeUpdate, RecordEvent};

/// Name given to records created without one.
pub const DEFAULT_NAME: &str = "No name";

/// Age from which [`Record::is_adult`] holds.
pub const ADULT_AGE: u64 = 18;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    age: u64,
    skills: Vec<String>,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            name: String::from(DEFAULT_NAME),
            age: 0,
            skills: Vec::new(),
        }
    }
}

impl Record {
    /// Creates a record with the given name and age and no skills.
    ///
    /// # Errors
    /// * [`RosterError::NegativeAge`] - If `age` is below zero.
    pub fn new(name: impl Into<String>, age: i64) -> Result<Self> {
        let age: u64 = u64::try_from(age).map_err(|_| RosterError::NegativeAge(age))?;
        Ok(Self {
            name: name.into(),
            age,
            skills: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    /// Stores `age` if it is not negative.
    ///
    /// A negative value leaves the record untouched and is reported as
    /// [`AgeUpdate::Rejected`].
    pub fn set_age(&mut self, age: i64) -> AgeUpdate {
        match u64::try_from(age) {
            Ok(age) => {
                self.age = age;
                debug!(name = %self.name, age, "age updated");
                AgeUpdate::Accepted
            }
            Err(_) => AgeUpdate::Rejected { attempted: age },
        }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Appends a skill at the end of the list.
    pub fn append_skill(&mut self, skill: impl Into<String>) -> RecordEvent {
        let skill: String = skill.into();
        self.skills.push(skill.clone());
        debug!(name = %self.name, skill = %skill, count = self.skills.len(), "skill appended");
        RecordEvent::SkillAdded { skill }
    }

    /// Writes every skill, in insertion order, one line each.
    pub fn list_skills<S: TextSink + ?Sized>(&self, sink: &mut S) {
        for skill in &self.skills {
            sink.line(&format!("  - {skill}"));
        }
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    /// Adds one year to the age.
    ///
    /// Saturates at `u64::MAX`.
    pub fn increment_age(&mut self) -> RecordEvent {
        self.age = self.age.saturating_add(1);
        debug!(name = %self.name, age = self.age, "age incremented");
        RecordEvent::AgedUp { age: self.age }
    }

    /// Summary with the name, the age and the number of skills.
    pub fn to_display_text(&self) -> String {
        format!(
            "Record{{name='{}', age={}, skills={}}}",
            self.name,
            self.age,
            self.skills.len()
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_text())
    }
}
