pub mod demo;
pub mod greet;
pub mod profile;

use clap::{ArgAction, Args, Parser, Subcommand};
use roster_core::session::profile::ProfileRequest;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "A tiny keeper of names, ages and skills.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print less; repeat to drop record details as well
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Show debug events
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask for a name and an age and answer with a greeting
    #[command(alias = "g")]
    Greet,
    /// Walk through every record operation on two sample records
    #[command(alias = "d")]
    Demo,
    /// Build a single record from the given values
    #[command(alias = "p")]
    Profile(ProfileArgs),
}

#[derive(Args)]
pub struct ProfileArgs {
    /// Name of the record
    #[arg(short, long)]
    pub name: Option<String>,

    /// Age of the record, must not be negative
    #[arg(short, long, allow_negative_numbers = true)]
    pub age: Option<i64>,

    /// Skill to append, may be repeated
    #[arg(short, long = "skill")]
    pub skills: Vec<String>,

    /// Birthdays to celebrate after the skills were added
    #[arg(short, long, default_value_t = 0)]
    pub birthdays: u32,
}

impl From<ProfileArgs> for ProfileRequest {
    fn from(args: ProfileArgs) -> Self {
        Self {
            name: args.name,
            age: args.age,
            skills: args.skills,
            birthdays: args.birthdays,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        CommandLine::command().debug_assert();
    }

    #[test]
    fn profile_accepts_negative_age_and_repeated_skills() {
        let cli = CommandLine::parse_from([
            "roster", "-qq", "profile", "--name", "Ana", "--age", "-4", "-s", "Rust", "-s", "Rust",
        ]);

        assert_eq!(cli.quiet, 2);
        let Commands::Profile(args) = cli.command else {
            panic!("expected the profile subcommand");
        };
        let request: ProfileRequest = args.into();
        assert_eq!(request.name.as_deref(), Some("Ana"));
        assert_eq!(request.age, Some(-4));
        assert_eq!(request.skills, vec!["Rust", "Rust"]);
        assert_eq!(request.birthdays, 0);
    }

    #[test]
    fn aliases_resolve_to_subcommands() {
        let cli = CommandLine::parse_from(["roster", "d", "--no-banner"]);

        assert!(matches!(cli.command, Commands::Demo));
        assert!(cli.no_banner);
    }
}
