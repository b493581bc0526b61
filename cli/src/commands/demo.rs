use colored::*;

use crate::{mprint, terminal::{colors, format, print, sink::TerminalSink}};
use roster_common::{config::Config, record::Record, success};
use roster_core::session::walkthrough::{self, Walkthrough};

pub fn demo(cfg: &Config) -> anyhow::Result<()> {
    let mut sink: TerminalSink = TerminalSink::new(cfg);
    let Walkthrough { juan, maria } = walkthrough::run_walkthrough(&mut sink)?;

    let records: [Record; 2] = [juan, maria];
    print::header("final records", cfg.quiet);
    print_records(&records, cfg);
    print_summary(&records, cfg);
    Ok(())
}

pub fn print_records(records: &[Record], cfg: &Config) {
    if cfg.quiet >= 2 {
        return;
    }
    for (idx, record) in records.iter().enumerate() {
        print::tree_head(idx, record.name());
        print::as_tree_one_level(format::record_details(record));
        if idx + 1 != records.len() {
            mprint!();
        }
    }
}

fn print_summary(records: &[Record], cfg: &Config) {
    let adults: usize = records.iter().filter(|record| record.is_adult()).count();
    let total: ColoredString = format!("{} records", records.len()).bold().green();
    let adults: ColoredString = format!("{adults} adults").bold().yellow();
    let output: ColoredString =
        format!("Walkthrough complete: {total}, {adults}").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        _ => success!("{}", output),
    }
}
