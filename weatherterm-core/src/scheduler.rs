//! The periodic report loop.

use std::{future::Future, time::Duration};

use tokio::time;
use tracing::{info, warn};

use crate::{
    error::Error,
    model::{City, Unit},
    provider::WeatherProvider,
    report::{self, FALLBACK_REPORT},
    sink::ReportSink,
};

/// Drive fetch+format+emit cycles until `shutdown` resolves.
///
/// One cycle runs immediately on entry so the consumer sees a report without
/// waiting a full interval. After that the loop races a fixed-interval timer
/// against the shutdown future: the timer runs another cycle, shutdown ends
/// the loop cleanly.
///
/// A failed cycle is fatal: the fallback message is emitted once and the
/// underlying error is returned without retrying.
pub async fn run(
    provider: &dyn WeatherProvider,
    city: &City,
    unit: Unit,
    interval: Duration,
    sink: &mut dyn ReportSink,
    shutdown: impl Future<Output = ()>,
) -> Result<(), Error> {
    tokio::pin!(shutdown);

    cycle(provider, city, unit, sink).await?;

    loop {
        tokio::select! {
            () = &mut shutdown => {
                info!("received shutdown signal, exiting...");
                return Ok(());
            }
            () = time::sleep(interval) => {
                cycle(provider, city, unit, sink).await?;
            }
        }
    }
}

/// One fetch+format+emit cycle.
async fn cycle(
    provider: &dyn WeatherProvider,
    city: &City,
    unit: Unit,
    sink: &mut dyn ReportSink,
) -> Result<(), Error> {
    match provider.report(city, unit).await {
        Ok(weather) => sink.emit(&report::render(&weather)),
        Err(err) => {
            warn!("report cycle failed: {err}");
            sink.emit(FALLBACK_REPORT)?;
            Err(err)
        }
    }
}
