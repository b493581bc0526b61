mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, demo, greet, profile};
use roster_common::{config::Config, error};
use terminal::{logging, print};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    if commands.no_color {
        colored::control::set_override(false);
    }
    if let Err(err) = logging::init_logging(commands.verbose) {
        eprintln!("failed to initialize logging: {err:#}");
        return ExitCode::FAILURE;
    }

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
    };
    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command {
        Commands::Greet => {
            print::header("starting greeting", cfg.quiet);
            greet::greet(&cfg)
        }
        Commands::Demo => {
            print::header("record walkthrough", cfg.quiet);
            demo::demo(&cfg)
        }
        Commands::Profile(args) => {
            print::header("building profile", cfg.quiet);
            profile::profile(args.into(), &cfg)
        }
    };

    print::end_of_program(cfg.quiet);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
