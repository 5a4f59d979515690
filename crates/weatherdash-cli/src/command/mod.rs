use std::path::PathBuf;

use clap::{Parser, Subcommand};
use weatherdash_core::Metric;

use self::{dashboard::DashboardArg, export::ExportArg, show::ShowArg, source::SourceArg};
use crate::logging;

mod dashboard;
mod export;
mod show;
mod source;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
    #[clap(flatten)]
    source: SourceArg,
    /// Append log records to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Browse temperature, rainfall and wind speed in an interactive dashboard
    Dashboard(#[clap(flatten)] DashboardArg),
    /// Print readings and statistics of one metric
    Show(#[clap(flatten)] ShowArg),
    /// Export readings and statistics of one metric as JSON
    Export(#[clap(flatten)] ExportArg),
}

/// Metric selected on the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum MetricArg {
    #[default]
    #[value(alias = "temp")]
    Temperature,
    #[value(aliases = ["rain", "rainfall"])]
    Precipitation,
    #[value(alias = "wind")]
    WindSpeed,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Temperature => Metric::Temperature,
            MetricArg::Precipitation => Metric::Precipitation,
            MetricArg::WindSpeed => Metric::WindSpeed,
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let mode = args.mode.unwrap_or(Mode::Dashboard(DashboardArg::default()));

    // The dashboard owns the terminal, so it only logs when given a file.
    match (&mode, &args.log_file) {
        (_, Some(path)) => logging::init_file(path)?,
        (Mode::Dashboard(_), None) => {}
        (_, None) => logging::init_stderr()?,
    }

    match mode {
        Mode::Dashboard(arg) => dashboard::run(&arg, &args.source)?,
        Mode::Show(arg) => show::run(&arg, &args.source)?,
        Mode::Export(arg) => export::run(&arg, &args.source)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;
    use weatherdash_core::WindowSpec;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_dashboard_is_default_mode() {
        let args = CommandArgs::try_parse_from(["weatherdash"]).unwrap();
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = CommandArgs::try_parse_from([
            "weatherdash",
            "show",
            "rain",
            "--window",
            "72",
            "--latitude",
            "-33.87",
            "--offline",
            "forecast.json",
        ])
        .unwrap();
        let Some(Mode::Show(show)) = args.mode else {
            panic!("expected show mode");
        };
        assert_eq!(Metric::from(show.metric), Metric::Precipitation);
        assert_eq!(show.window, WindowSpec::LastDDays(3));
        assert_eq!(args.source.describe().unwrap(), "offline: forecast.json");
    }
}
