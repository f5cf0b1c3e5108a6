//! Simulated latency with Tokio: one awaited fetch, then a fan-out of spawned
//! tasks joined behind a single barrier.

use std::io::Write;
use std::time::Duration;

use futures::future::try_join_all;
use tracing::debug;

use crate::console::Console;
use crate::error::Result;

pub async fn fetch_data(delay: Duration) -> String {
    tokio::time::sleep(delay).await;
    "Data fetched successfully!".to_string()
}

/// Spawns one task per delay and waits for all of them.
///
/// Results come back in spawn order, whatever order the tasks finish in.
pub async fn fan_out(delays: &[Duration]) -> Result<Vec<String>> {
    let handles = delays.iter().copied().enumerate().map(|(i, delay)| {
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!(task = i + 1, ?delay, "task finished");
            format!("Task {}", i + 1)
        })
    });

    let results = try_join_all(handles).await?;
    Ok(results)
}

// =============================================================================
// Section
// =============================================================================

pub async fn demo<W: Write>(
    console: &mut Console<W>,
    fetch_delay: Duration,
    task_delays: &[Duration],
) -> Result<()> {
    console.section("Async/Await")?;

    let result = fetch_data(fetch_delay).await;
    console.line(result)?;

    let results = fan_out(task_delays).await?;
    console.field("All tasks completed", results.join(", "))?;
    console.blank()?;
    Ok(())
}
