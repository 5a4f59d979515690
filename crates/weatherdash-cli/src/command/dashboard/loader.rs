use std::{
    io,
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use tracing::{debug, warn};
use weatherdash_client::{FetchError, HourlySource};
use weatherdash_core::{HourlySeries, Metric, WindowSpec};
use weatherdash_runtime::Mailbox;

/// A load requested by the dashboard.
///
/// `id` is unique per dashboard session and lets the dashboard discard
/// outcomes that a newer request for the same metric has superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FetchRequest {
    pub(crate) id: u64,
    pub(crate) metric: Metric,
    pub(crate) window: WindowSpec,
}

/// Result of a [`FetchRequest`], delivered to the dashboard's mailbox.
#[derive(Debug)]
pub(crate) struct FetchOutcome {
    pub(crate) request: FetchRequest,
    pub(crate) result: Result<HourlySeries, FetchError>,
}

/// Starts the loader thread and returns the channel that feeds it.
///
/// The thread serves requests one at a time, in order, and stops when the
/// request channel closes or the mailbox is gone.
pub(crate) fn spawn<S>(
    source: S,
    mailbox: Mailbox<FetchOutcome>,
) -> io::Result<Sender<FetchRequest>>
where
    S: HourlySource + Send + 'static,
{
    let (sender, receiver) = mpsc::channel();
    thread::Builder::new()
        .name("weatherdash-loader".to_owned())
        .spawn(move || serve(&source, &receiver, |outcome| mailbox.post(outcome)))?;
    Ok(sender)
}

fn serve<S, F>(source: &S, requests: &Receiver<FetchRequest>, mut deliver: F)
where
    S: HourlySource + ?Sized,
    F: FnMut(FetchOutcome) -> bool,
{
    for request in requests {
        debug!(
            id = request.id,
            metric = request.metric.label(),
            window = %request.window,
            "loading"
        );
        let result = source.fetch_hourly(request.metric, request.window.past_days());
        if let Err(err) = &result {
            warn!(id = request.id, metric = request.metric.label(), %err, "load failed");
        }
        if !deliver(FetchOutcome { request, result }) {
            debug!("dashboard closed, stopping loader");
            break;
        }
    }
}
