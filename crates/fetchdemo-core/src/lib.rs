pub mod config;
pub mod logging;

pub mod compare;
pub mod fetch;
pub mod model;
pub mod report;
pub mod sites;
pub mod workflow;

pub use fetch::{FetchError, FetchErrorKind, Fetcher, HttpFetcher};
pub use model::{EmptyIdentifier, FetchResult};
pub use report::{ReportSink, SilentSink, TextReporter};
pub use workflow::{RunError, RunOutcome, RunState, Strategy, WorkflowRunner};
