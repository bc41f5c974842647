//! `fetchdemo compare` – run every strategy and print their total times.

use anyhow::{Context, Result};
use fetchdemo_core::compare::{self, ComparisonRow};
use fetchdemo_core::config::FetchDemoConfig;
use fetchdemo_core::sites;
use fetchdemo_core::HttpFetcher;
use std::sync::Arc;

fn print_comparison(rows: &[ComparisonRow]) {
    println!("  {:<22}  {:>10}  {:>6}  {}", "Strategy", "Time(ms)", "Items", "Result");
    println!("  {}  {}  {}  {}", "-".repeat(22), "-".repeat(10), "------", "------");
    for r in rows {
        println!(
            "  {:<22}  {:>10}  {:>6}  {}",
            r.strategy.as_str(),
            r.elapsed_ms,
            r.items,
            r.error.as_deref().unwrap_or("ok")
        );
    }
}

pub async fn run_compare(cfg: &FetchDemoConfig, json: bool) -> Result<()> {
    let fetcher = Arc::new(HttpFetcher::new(cfg.transport()).context("build HTTP client")?);
    let rows = compare::run_all(fetcher, &sites::demo_sites(), cfg.max_parallel).await;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("serialize comparison")?
        );
        return Ok(());
    }

    print_comparison(&rows);
    match compare::fastest(&rows) {
        Some(strategy) => println!("Fastest: {}", strategy),
        None => println!("Every strategy failed."),
    }
    Ok(())
}
