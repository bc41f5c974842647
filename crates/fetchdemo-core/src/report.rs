//! Output sink the workflow reports into, and its plain-text rendering.
//!
//! The front end owns the concrete sink (stdout for the CLI) and passes it
//! into the runner explicitly.

use std::io::{self, Write};
use std::time::Duration;

use crate::model::FetchResult;
use crate::workflow::RunError;

/// Receives per-item results, the total time, or a failure, in that order.
pub trait ReportSink {
    fn report_result(&mut self, result: &FetchResult) -> io::Result<()>;

    fn report_elapsed(&mut self, elapsed: Duration) -> io::Result<()>;

    fn report_failure(&mut self, error: &RunError) -> io::Result<()>;
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn report_result(&mut self, result: &FetchResult) -> io::Result<()> {
        (**self).report_result(result)
    }

    fn report_elapsed(&mut self, elapsed: Duration) -> io::Result<()> {
        (**self).report_elapsed(elapsed)
    }

    fn report_failure(&mut self, error: &RunError) -> io::Result<()> {
        (**self).report_failure(error)
    }
}

pub fn result_line(result: &FetchResult) -> String {
    format!(
        "{} download: {} characters long.",
        result.identifier(),
        result.char_len()
    )
}

pub fn elapsed_line(elapsed: Duration) -> String {
    format!("Total execution time: {} ms", elapsed.as_millis())
}

pub fn failure_line(error: &RunError) -> String {
    format!("Run failed: {}", error)
}

/// Writes one line per event to any `Write`.
#[derive(Debug)]
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }
}

impl<W: Write> ReportSink for TextReporter<W> {
    fn report_result(&mut self, result: &FetchResult) -> io::Result<()> {
        self.line(&result_line(result))
    }

    fn report_elapsed(&mut self, elapsed: Duration) -> io::Result<()> {
        self.line(&elapsed_line(elapsed))
    }

    fn report_failure(&mut self, error: &RunError) -> io::Result<()> {
        self.line(&failure_line(error))
    }
}

/// Discards everything. Used when only timings matter.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl ReportSink for SilentSink {
    fn report_result(&mut self, _result: &FetchResult) -> io::Result<()> {
        Ok(())
    }

    fn report_elapsed(&mut self, _elapsed: Duration) -> io::Result<()> {
        Ok(())
    }

    fn report_failure(&mut self, _error: &RunError) -> io::Result<()> {
        Ok(())
    }
}
