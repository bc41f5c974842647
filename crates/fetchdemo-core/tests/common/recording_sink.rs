//! Report sink that records structured events instead of rendering text.

use std::io;
use std::time::Duration;

use fetchdemo_core::{FetchResult, ReportSink, RunError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Result { identifier: String, char_len: usize },
    Elapsed(Duration),
    Failure(String),
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<Event>,
}

impl RecordingSink {
    /// (identifier, length) pairs in report order.
    pub fn results(&self) -> Vec<(String, usize)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Result {
                    identifier,
                    char_len,
                } => Some((identifier.clone(), *char_len)),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Failure(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.events.iter().find_map(|e| match e {
            Event::Elapsed(d) => Some(*d),
            _ => None,
        })
    }
}

impl ReportSink for RecordingSink {
    fn report_result(&mut self, result: &FetchResult) -> io::Result<()> {
        self.events.push(Event::Result {
            identifier: result.identifier().to_string(),
            char_len: result.char_len(),
        });
        Ok(())
    }

    fn report_elapsed(&mut self, elapsed: Duration) -> io::Result<()> {
        self.events.push(Event::Elapsed(elapsed));
        Ok(())
    }

    fn report_failure(&mut self, error: &RunError) -> io::Result<()> {
        self.events.push(Event::Failure(error.to_string()));
        Ok(())
    }
}
