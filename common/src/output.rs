//! # Text Output
//!
//! Every line a record or a session wants to show goes through a [`TextSink`].
//! The CLI renders lines on the terminal, tests collect them into a `Vec<String>`.

use crate::record::RecordEvent;

/// Defines the contract for anything that accepts lines of text.
pub trait TextSink {
    /// Writes a single line of text.
    fn line(&mut self, text: &str);

    /// Writes a section title. Sinks that style titles override this.
    fn header(&mut self, title: &str) {
        self.line(title);
    }

    /// Writes a request for user input.
    fn prompt(&mut self, text: &str) {
        self.line(text);
    }

    /// Writes the notice for a record event.
    fn notify(&mut self, event: &RecordEvent) {
        self.line(&event.to_string());
    }
}

impl TextSink for Vec<String> {
    fn line(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

impl<S: TextSink + ?Sized> TextSink for &mut S {
    fn line(&mut self, text: &str) {
        (**self).line(text);
    }

    fn header(&mut self, title: &str) {
        (**self).header(title);
    }

    fn prompt(&mut self, text: &str) {
        (**self).prompt(text);
    }

    fn notify(&mut self, event: &RecordEvent) {
        (**self).notify(event);
    }
}
