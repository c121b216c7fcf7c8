//! The run cycle loop.
//!
//! Both the run control and the re-run control send a [`Trigger`] into one
//! channel; this loop is the only thing that ever fetches. One cycle runs
//! at a time. Triggers that arrive while a cycle is in flight are folded
//! into that cycle, so the last view rendered always belongs to the
//! latest cycle.

use crate::trends::{TrendError, TrendReport};
use crate::view::View;
use futures::channel::mpsc::UnboundedReceiver;
use futures::StreamExt;
use std::future::Future;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The run control.
    Run,
    /// The re-run control shown under a settled view.
    RunAgain,
}

/// Totals reported when the trigger channel closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub cycles: u64,
    pub coalesced: u64,
}

/// Drive run cycles until every trigger sender is dropped.
///
/// `render` sees `Loading` at the start of each cycle and exactly one
/// settled view (report or error) at its end.
pub async fn run_cycles<F, Fut, R>(
    mut triggers: UnboundedReceiver<Trigger>,
    mut fetch: F,
    mut render: R,
) -> RunStats
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<TrendReport, TrendError>>,
    R: FnMut(View),
{
    let mut stats = RunStats::default();

    while let Some(trigger) = triggers.next().await {
        stats.cycles += 1;
        let cycle = stats.cycles;
        info!(cycle, trigger = ?trigger, "running trend query");

        render(View::Loading);
        let outcome = fetch().await;

        // Ok(None) means the channel closed; the outer loop ends on its own.
        while let Ok(Some(extra)) = triggers.try_next() {
            stats.coalesced += 1;
            debug!(cycle, trigger = ?extra, "trigger arrived mid-flight, coalesced");
        }

        match &outcome {
            Ok(report) => info!(
                cycle,
                topics = report.trending_topics.len(),
                record_id = %report.record_id,
                "trend query settled"
            ),
            Err(e) => warn!(cycle, error = %e, "trend query failed"),
        }
        render(View::settled(&outcome));
    }

    debug!(
        cycles = stats.cycles,
        coalesced = stats.coalesced,
        "trigger channel closed"
    );
    stats
}
