use std::fmt;

/// Notices produced by [`Record`](super::Record) mutators.
///
/// Mutators never print. They hand back one of these and the caller decides
/// where the notice goes, usually [`TextSink::notify`](crate::output::TextSink::notify).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordEvent {
    SkillAdded { skill: String },
    AgedUp { age: u64 },
}

impl fmt::Display for RecordEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SkillAdded { skill } => write!(f, "Skill added: {skill}"),
            Self::AgedUp { age } => write!(f, "Happy birthday! You are now {age} years old"),
        }
    }
}

/// Outcome of [`Record::set_age`](super::Record::set_age).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeUpdate {
    Accepted,
    /// The value was negative. The stored age is untouched.
    Rejected { attempted: i64 },
}

impl AgeUpdate {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}
