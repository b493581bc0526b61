use roster_common::error::Result;
use roster_common::output::TextSink;
use roster_common::record::{DEFAULT_NAME, Record};
use tracing::debug;

/// Everything needed to build a single record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileRequest {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub skills: Vec<String>,
    /// Number of birthdays to apply after the skills were added.
    pub birthdays: u32,
}

/// Builds a record from `request` and writes its summary to `sink`.
///
/// Without a name and an age the record starts from [`Record::default`]. Otherwise
/// the missing part falls back to the default value.
///
/// # Errors
/// * [`RosterError::NegativeAge`](roster_common::error::RosterError::NegativeAge) - If
///   the requested age is negative.
pub fn build_profile<S>(request: ProfileRequest, sink: &mut S) -> Result<Record>
where
    S: TextSink + ?Sized,
{
    let ProfileRequest {
        name,
        age,
        skills,
        birthdays,
    } = request;

    let mut record: Record = match (name, age) {
        (None, None) => Record::default(),
        (name, age) => Record::new(
            name.unwrap_or_else(|| String::from(DEFAULT_NAME)),
            age.unwrap_or(0),
        )?,
    };
    debug!(record = %record, "profile created");

    for skill in skills {
        let event = record.append_skill(skill);
        sink.notify(&event);
    }

    for _ in 0..birthdays {
        let event = record.increment_age();
        sink.notify(&event);
    }

    sink.header("Profile");
    sink.line(&record.to_display_text());
    if !record.skills().is_empty() {
        sink.header(&format!("Skills of {}", record.name()));
        record.list_skills(sink);
    }

    let status: &str = if record.is_adult() {
        "is an adult"
    } else {
        "is not an adult"
    };
    sink.line(&format!("{} {status}", record.name()));

    Ok(record)
}
