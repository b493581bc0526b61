use roster_common::output::TextSink;
use roster_common::record::RecordEvent;

/// One entry per call made on a [`TaggedSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Line(String),
    Header(String),
    Prompt(String),
    Notice(RecordEvent),
}

/// Sink that remembers which method produced each line.
#[derive(Debug, Default)]
pub struct TaggedSink {
    pub entries: Vec<Entry>,
}

impl TaggedSink {
    pub fn headers(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Header(title) => Some(title.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn notices(&self) -> Vec<&RecordEvent> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Notice(event) => Some(event),
                _ => None,
            })
            .collect()
    }
}

impl TextSink for TaggedSink {
    fn line(&mut self, text: &str) {
        self.entries.push(Entry::Line(text.to_string()));
    }

    fn header(&mut self, title: &str) {
        self.entries.push(Entry::Header(title.to_string()));
    }

    fn prompt(&mut self, text: &str) {
        self.entries.push(Entry::Prompt(text.to_string()));
    }

    fn notify(&mut self, event: &RecordEvent) {
        self.entries.push(Entry::Notice(event.clone()));
    }
}
