use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Utc;
use tracing::info;
use weatherdash_core::{Metric, MetricReport, WindowSpec};

use crate::{
    command::{MetricArg, source::SourceArg},
    schema::report::ExportedReport,
    util::Output,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ExportArg {
    /// Metric to export
    #[arg(value_enum)]
    metric: MetricArg,
    /// Time window: 20 (last readings), 24, 48, 72 or 168 (hours)
    #[arg(long, short, default_value = "24")]
    window: WindowSpec,
    /// Output file path (stdout when omitted)
    #[arg(long, short)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ExportArg, source: &SourceArg) -> anyhow::Result<()> {
    let ExportArg {
        metric,
        window,
        output,
    } = arg;
    let metric = Metric::from(*metric);

    let description = source.describe()?;
    let series = source
        .open()?
        .fetch_hourly(metric, window.past_days())
        .with_context(|| format!("Couldn't load {} data", metric.label().to_lowercase()))?;

    let report = MetricReport::new(metric, *window, &series.readings);
    let exported = ExportedReport::new(&report, description, Utc::now());
    Output::save_json(&exported, output.clone())?;

    info!(
        metric = metric.label(),
        readings = exported.readings.len(),
        output = output
            .as_ref()
            .map_or_else(|| "stdout".to_owned(), |p| p.display().to_string()),
        "exported report"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use clap::Parser as _;

    use crate::command::{CommandArgs, Mode};

    const FORECAST: &str = r#"{ "hourly": {
        "time": ["2024-05-01T00:00", "2024-05-01T01:00", "2024-05-01T02:00", "2024-05-01T03:00"],
        "windspeed_10m": [3.0, 5.0, 5.0, 7.0]
    } }"#;

    #[test]
    fn test_exports_offline_data() {
        let dir = env::temp_dir();
        let input = dir.join(format!("weatherdash-export-in-{}.json", process::id()));
        let output = dir.join(format!("weatherdash-export-out-{}.json", process::id()));
        fs::write(&input, FORECAST).unwrap();

        let input_arg = input.display().to_string();
        let output_arg = output.display().to_string();
        let args = CommandArgs::try_parse_from([
            "weatherdash",
            "export",
            "wind",
            "--window",
            "20",
            "--offline",
            input_arg.as_str(),
            "--output",
            output_arg.as_str(),
        ])
        .unwrap();
        let Some(Mode::Export(arg)) = &args.mode else {
            panic!("expected export mode");
        };
        super::run(arg, &args.source).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["metric"], "wind_speed");
        assert_eq!(json["unit"], "km/h");
        assert_eq!(json["window"]["last_n_readings"], 20);
        assert_eq!(json["readings"].as_array().unwrap().len(), 4);
        assert_eq!(json["statistics"]["mean"], 5.0);
        assert_eq!(json["statistics"]["mode"], serde_json::json!([5.0]));
        assert!(json["source"].as_str().unwrap().starts_with("offline: "));

        fs::remove_file(input).unwrap();
        fs::remove_file(output).unwrap();
    }
}
