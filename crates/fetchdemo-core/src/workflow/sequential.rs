//! Sequential strategies: one fetch at a time, each reported as soon as it lands.
//!
//! Both stop at the first failure; identifiers after it are never attempted.

use crate::fetch::Fetcher;
use crate::model::FetchResult;
use crate::report::ReportSink;

use super::RunError;

/// Fetch each identifier on the calling thread, reporting after each.
pub fn run_sequential_blocking<F, S>(
    fetcher: &F,
    identifiers: &[String],
    sink: &mut S,
) -> Result<Vec<FetchResult>, RunError>
where
    F: Fetcher + ?Sized,
    S: ReportSink + ?Sized,
{
    let mut results = Vec::with_capacity(identifiers.len());
    for (index, identifier) in identifiers.iter().enumerate() {
        tracing::debug!(index, identifier = identifier.as_str(), "blocking fetch");
        let result = fetcher.fetch_blocking(identifier)?;
        sink.report_result(&result)?;
        results.push(result);
    }
    Ok(results)
}

/// Await each identifier in turn, reporting after each. Same total latency as
/// the blocking loop, but the task yields while the network is busy.
pub async fn run_sequential_suspending<F, S>(
    fetcher: &F,
    identifiers: &[String],
    sink: &mut S,
) -> Result<Vec<FetchResult>, RunError>
where
    F: Fetcher + ?Sized,
    S: ReportSink + ?Sized,
{
    let mut results = Vec::with_capacity(identifiers.len());
    for (index, identifier) in identifiers.iter().enumerate() {
        tracing::debug!(index, identifier = identifier.as_str(), "suspending fetch");
        let result = fetcher.fetch(identifier).await?;
        sink.report_result(&result)?;
        results.push(result);
    }
    Ok(results)
}
