use std::io::{self, Write};

use anyhow::Context as _;
use tracing::info;
use weatherdash_core::{Metric, MetricReport, NO_READINGS, WindowSpec};

use crate::command::{MetricArg, source::SourceArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ShowArg {
    /// Metric to show
    #[arg(value_enum)]
    pub(crate) metric: MetricArg,
    /// Time window: 20 (last readings), 24, 48, 72 or 168 (hours)
    #[arg(long, short, default_value = "24")]
    pub(crate) window: WindowSpec,
}

pub(crate) fn run(arg: &ShowArg, source: &SourceArg) -> anyhow::Result<()> {
    let metric = Metric::from(arg.metric);
    let source = source.open()?;

    let series = source
        .fetch_hourly(metric, arg.window.past_days())
        .with_context(|| format!("Couldn't load {} data", metric.label().to_lowercase()))?;
    info!(
        metric = metric.label(),
        readings = series.readings.len(),
        "loaded hourly data"
    );

    let report = MetricReport::new(metric, arg.window, &series.readings);
    let mut stdout = io::stdout().lock();
    print_report(&mut stdout, &report).context("Failed to write report to stdout")?;
    Ok(())
}

fn print_report<W>(out: &mut W, report: &MetricReport<'_>) -> io::Result<()>
where
    W: Write,
{
    let metric = report.metric();
    writeln!(out, "{} - {}", metric.series_label(), report.window())?;
    writeln!(out)?;

    writeln!(out, "  {:<20} {:>10}", "Time", metric.unit())?;
    writeln!(out, "  {}", "-".repeat(31))?;
    for row in report.table_rows() {
        writeln!(out, "  {:<20} {:>10}", row.time, row.value)?;
    }
    writeln!(out)?;

    match report.stat_lines() {
        Some(lines) => {
            for line in lines {
                writeln!(out, "  {:<13} {}", format!("{}:", line.label), line.value)?;
            }
        }
        None => writeln!(out, "  {NO_READINGS}")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use weatherdash_core::Reading;

    use super::*;

    fn readings(values: &[f64]) -> Vec<Reading> {
        let start = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        values
            .iter()
            .zip(0..)
            .map(|(&value, hour)| Reading::new(start + chrono::Duration::hours(hour), value))
            .collect()
    }

    fn render(report: &MetricReport<'_>) -> String {
        let mut out = Vec::new();
        print_report(&mut out, report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_prints_table_and_statistics() {
        let series = readings(&[0.0, 0.0, 1.0, 2.0, 2.0]);
        let report = MetricReport::new(Metric::Precipitation, WindowSpec::LastDDays(1), &series);
        let text = render(&report);

        assert!(text.starts_with("Rainfall (mm) - Last 24 hours\n"));
        assert!(text.contains("May 1, 04:00 AM"));
        assert!(text.contains("  Average:      1.00 mm\n"));
        assert!(text.contains("  Most Common:  0, 2 mm\n"));
        assert!(text.contains("  Range:        2.00 mm\n"));
    }

    #[test]
    fn test_empty_window_prints_placeholder() {
        let report = MetricReport::new(Metric::WindSpeed, WindowSpec::LastNReadings(20), &[]);
        let text = render(&report);
        assert!(text.ends_with(&format!("  {NO_READINGS}\n")));
        assert!(!text.contains("Average"));
    }
}
