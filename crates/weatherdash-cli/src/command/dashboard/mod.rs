use weatherdash_core::Metric;
use weatherdash_runtime::Runtime;

use self::app::DashboardApp;
use crate::command::{MetricArg, source::SourceArg};

mod app;
mod loader;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct DashboardArg {
    /// Metric shown at startup
    #[arg(long, value_enum, default_value_t)]
    metric: MetricArg,
}

pub(crate) fn run(arg: &DashboardArg, source: &SourceArg) -> anyhow::Result<()> {
    let description = source.describe()?;
    let hourly_source = source.open()?;

    let runtime = Runtime::new();
    let requests = loader::spawn(hourly_source, runtime.mailbox())?;
    let mut app = DashboardApp::new(Metric::from(arg.metric), requests, description);
    runtime.run(&mut app)?;

    Ok(())
}
