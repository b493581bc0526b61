use roster_common::config::Config;
use roster_common::output::TextSink;
use roster_common::record::RecordEvent;

use crate::terminal::{format, print};

/// Renders session output on the terminal.
pub struct TerminalSink {
    quiet: u8,
}

impl TerminalSink {
    pub fn new(cfg: &Config) -> Self {
        Self { quiet: cfg.quiet }
    }
}

impl TextSink for TerminalSink {
    fn line(&mut self, text: &str) {
        print::print_status(text);
    }

    fn header(&mut self, title: &str) {
        print::header(title, self.quiet);
    }

    fn prompt(&mut self, text: &str) {
        print::prompt(text);
    }

    fn notify(&mut self, event: &RecordEvent) {
        print::notice(format::event_line(event));
    }
}
