use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols::{Marker, merge::MergeStrategy},
    widgets::{Axis, Block, Chart, Dataset, GraphType, Widget},
};
use tracing::trace;
use weatherdash_core::{Metric, Sample, WindowSpec, report::format_timestamp};

use crate::ui::widgets::style;

/// Plot data of one metric and window, prepared once per load.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartHandle {
    generation: u64,
    metric: Metric,
    window: WindowSpec,
    points: Vec<(f64, f64)>,
    x_labels: Vec<String>,
    y_bounds: [f64; 2],
}

impl ChartHandle {
    /// Plots `sample` with readings spaced evenly along the x axis.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(metric: Metric, window: WindowSpec, sample: Sample<'_>) -> Self {
        let points = sample
            .values()
            .enumerate()
            .map(|(i, value)| (i as f64, value))
            .collect();
        let readings = sample.readings();
        let x_labels = label_indices(readings.len())
            .into_iter()
            .map(|i| format_timestamp(&readings[i].timestamp))
            .collect();
        Self {
            generation: 0,
            metric,
            window,
            points,
            x_labels,
            y_bounds: value_bounds(sample.values()),
        }
    }

    /// Incremented each time a slot installs a new handle; 0 before that.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    #[must_use]
    pub fn x_labels(&self) -> &[String] {
        &self.x_labels
    }

    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn x_bounds(&self) -> [f64; 2] {
        [0.0, self.points.len().saturating_sub(1).max(1) as f64]
    }

    #[must_use]
    pub fn y_bounds(&self) -> [f64; 2] {
        self.y_bounds
    }
}

/// Indices of the first, middle and last readings.
fn label_indices(len: usize) -> Vec<usize> {
    match len {
        0 => vec![],
        1 => vec![0],
        2 => vec![0, 1],
        _ => vec![0, (len - 1) / 2, len - 1],
    }
}

/// Y range covering all values. Non-negative data starts at zero.
fn value_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        });
    if min > max {
        return [0.0, 1.0];
    }
    let lower = min.min(0.0);
    let upper = if max > lower { max } else { lower + 1.0 };
    [lower, upper]
}

/// Owns the chart currently shown for one metric.
///
/// Installing a new chart disposes the previous one, so at most one chart
/// exists per slot.
#[derive(Debug, Default)]
pub struct ChartSlot {
    current: Option<ChartHandle>,
    generation: u64,
}

impl ChartSlot {
    #[must_use]
    pub fn current(&self) -> Option<&ChartHandle> {
        self.current.as_ref()
    }

    /// Disposes the current chart and installs `next` in its place.
    pub fn replace(&mut self, mut next: ChartHandle) -> &ChartHandle {
        if let Some(old) = self.current.take() {
            trace!(
                metric = old.metric.label(),
                generation = old.generation,
                "disposing chart"
            );
        }
        self.generation += 1;
        next.generation = self.generation;
        self.current.insert(next)
    }
}

/// Line chart of a [`ChartHandle`], or empty axes while nothing is loaded.
#[derive(Debug)]
pub struct MetricChart<'a> {
    pub metric: Metric,
    pub handle: Option<&'a ChartHandle>,
}

impl Widget for MetricChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let series_label = self.metric.series_label();
        let block = Block::bordered()
            .merge_borders(MergeStrategy::Exact)
            .title(series_label.clone());

        let Some(handle) = self.handle else {
            block.render(area, buf);
            return;
        };

        let dataset = Dataset::default()
            .name(series_label)
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(style::metric(self.metric))
            .data(handle.points());
        let [y_min, y_max] = handle.y_bounds();
        let x_axis = Axis::default()
            .bounds(handle.x_bounds())
            .labels(handle.x_labels().iter().map(String::as_str));
        let y_axis = Axis::default()
            .title(self.metric.unit())
            .bounds(handle.y_bounds())
            .labels([
                format!("{y_min:.1}"),
                format!("{:.1}", f64::midpoint(y_min, y_max)),
                format!("{y_max:.1}"),
            ]);
        let chart = Chart::new(vec![dataset])
            .block(block.title_bottom(handle.window.to_string()))
            .x_axis(x_axis)
            .y_axis(y_axis);

        chart.render(area, buf);
    }
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

    fn handle(values: &[f64]) -> ChartHandle {
        let readings = readings(values);
        ChartHandle::new(
            Metric::Temperature,
            WindowSpec::LastDDays(1),
            Sample::new(&readings),
        )
    }

    #[test]
    fn test_handle_points_and_labels() {
        let handle = handle(&[-2.0, 1.0, 3.0, 4.0, 0.5]);
        assert_eq!(handle.points()[1], (1.0, 1.0));
        assert_eq!(handle.x_bounds(), [0.0, 4.0]);
        assert_eq!(handle.y_bounds(), [-2.0, 4.0]);
        assert_eq!(
            handle.x_labels(),
            ["May 1, 12:00 AM", "May 1, 02:00 AM", "May 1, 04:00 AM"]
        );
    }

    #[test]
    fn test_bounds_of_flat_and_empty_data() {
        assert_eq!(handle(&[3.0, 3.0]).y_bounds(), [0.0, 3.0]);
        assert_eq!(handle(&[0.0, 0.0]).y_bounds(), [0.0, 1.0]);
        let empty = handle(&[]);
        assert_eq!(empty.y_bounds(), [0.0, 1.0]);
        assert!(empty.x_labels().is_empty());
        assert_eq!(empty.x_bounds(), [0.0, 1.0]);
    }

    #[test]
    fn test_slot_replaces_previous_chart() {
        let mut slot = ChartSlot::default();
        assert!(slot.current().is_none());

        assert_eq!(slot.replace(handle(&[1.0])).generation(), 1);
        let second = slot.replace(handle(&[1.0, 2.0]));
        assert_eq!(second.generation(), 2);
        assert_eq!(second.points().len(), 2);

        let current = slot.current().unwrap();
        assert_eq!(current.generation(), 2);
        assert_eq!(current.points().len(), 2);
    }

    #[test]
    fn test_renders_title_and_window() {
        let handle = handle(&[1.0, 2.0, 3.0]);
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        MetricChart {
            metric: Metric::Temperature,
            handle: Some(&handle),
        }
        .render(area, &mut buf);

        let text = buf
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        assert!(text.contains("Temperature (°C)"));
        assert!(text.contains("Last 24 hours"));
    }
}
