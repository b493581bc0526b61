use std::io;

use anyhow::Context;
use roster_common::{config::Config, info, success};
use roster_core::session::greeting::{self, Greeting};

use crate::terminal::sink::TerminalSink;

pub fn greet(cfg: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut sink: TerminalSink = TerminalSink::new(cfg);
    info!("Reading answers from standard input");

    let greeting: Greeting =
        greeting::run_greeting(&mut input, &mut sink).context("greeting session failed")?;

    success!("Said hello to {}", greeting.name);
    Ok(())
}
