use roster_common::error::Result;
use roster_common::output::TextSink;
use roster_common::record::Record;

/// The two records a walkthrough leaves behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walkthrough {
    pub juan: Record,
    pub maria: Record,
}

/// Exercises every record operation on two sample records.
///
/// The first record is built with a name and an age, gains three skills and a
/// birthday. The second starts from the defaults and is filled in through setters.
pub fn run_walkthrough<S>(sink: &mut S) -> Result<Walkthrough>
where
    S: TextSink + ?Sized,
{
    let mut juan: Record = Record::new("Juan", 25)?;
    for skill in ["Java", "Python", "JavaScript"] {
        let event = juan.append_skill(skill);
        sink.notify(&event);
    }

    sink.header("Information");
    sink.line(&juan.to_display_text());
    sink.header(&format!("Skills of {}", juan.name()));
    juan.list_skills(sink);

    if juan.is_adult() {
        sink.line(&format!("{} is an adult", juan.name()));
    }

    let event = juan.increment_age();
    sink.notify(&event);

    let mut maria: Record = Record::default();
    maria.set_name("María");
    maria.set_age(17);
    sink.line(&maria.to_display_text());

    Ok(Walkthrough { juan, maria })
}
