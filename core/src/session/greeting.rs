use roster_common::error::{Result, RosterError};
use roster_common::output::TextSink;
use tracing::debug;

use crate::input::LineSource;

const PRESET_NAME: &str = "Developer";
const PRESET_AGE: i64 = 25;
const PRESET_SALARY: f64 = 50_000.50;

/// Years added to the age the user typed.
pub const YEARS_AHEAD: i64 = 10;

/// What the user typed during a greeting session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub name: String,
    pub age: i64,
}

impl Greeting {
    /// Age the user will have in [`YEARS_AHEAD`] years.
    pub fn projected_age(&self) -> Result<i64> {
        self.age
            .checked_add(YEARS_AHEAD)
            .ok_or(RosterError::AgeOverflow { age: self.age })
    }
}

/// Runs the greeting session.
///
/// Prints a few preset values, asks for a name and an age, greets the user and
/// closes with two fixed arithmetic lines.
///
/// # Errors
/// * [`RosterError::EndOfInput`] - If the input ends before both answers were read.
/// * [`RosterError::NotAnInteger`] - If the age is not a whole number.
/// * [`RosterError::AgeOverflow`] - If the projected age does not fit.
pub fn run_greeting<L, S>(input: &mut L, sink: &mut S) -> Result<Greeting>
where
    L: LineSource + ?Sized,
    S: TextSink + ?Sized,
{
    sink.header("Welcome to roster");
    sink.line(&format!("Name: {PRESET_NAME}"));
    sink.line(&format!("Age: {PRESET_AGE}"));
    sink.line(&format!("Salary: ${PRESET_SALARY:.2}"));

    sink.header("User input");
    sink.prompt("Enter your name: ");
    let name: String = input.read_text("a name")?.trim().to_string();
    sink.prompt("Enter your age: ");
    let age: i64 = input.read_int("an age")?;
    debug!(name = %name, age, "greeting input read");

    let greeting = Greeting { name, age };
    let projected: i64 = greeting.projected_age()?;

    sink.header("Result");
    sink.line(&format!("Hello, {}!", greeting.name));
    sink.line(&format!("In {YEARS_AHEAD} years you will be {projected} years old."));
    sink.line(&format!("Sum: 10 + 5 = {}", 10 + 5));
    sink.line(&format!("Product: 4 * 3 = {}", 4 * 3));

    Ok(greeting)
}
