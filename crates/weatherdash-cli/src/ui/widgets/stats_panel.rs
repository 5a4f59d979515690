use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols::merge::MergeStrategy,
    text::Line,
    widgets::{Block, Paragraph, Widget},
};
use weatherdash_core::{Metric, NO_READINGS, StatLine};

use crate::ui::widgets::style;

/// Statistics of the selected window, or a placeholder when it is empty.
#[derive(Debug)]
pub struct StatsPanel {
    pub metric: Metric,
    pub lines: Option<[StatLine; 6]>,
}

impl StatsPanel {
    /// Height needed to show every line inside the border.
    pub const HEIGHT: u16 = 8;
}

impl Widget for StatsPanel {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let text = match self.lines {
            Some(lines) => lines
                .into_iter()
                .map(|line| {
                    Line::raw(format!("  {:<13} {}", format!("{}:", line.label), line.value))
                })
                .collect(),
            None => vec![Line::styled(format!("  {NO_READINGS}"), style::HINT)],
        };
        Paragraph::new(text)
            .block(
                Block::bordered()
                    .merge_borders(MergeStrategy::Exact)
                    .title(format!("{} statistics", self.metric.label())),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use weatherdash_core::report::stat_lines;
    use weatherdash_stats::summary::SummaryStats;

    use super::*;

    fn render(panel: StatsPanel) -> String {
        let area = Rect::new(0, 0, 40, StatsPanel::HEIGHT);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_shows_all_statistics() {
        let stats = SummaryStats::new([4.0, 8.0, 6.0]).unwrap();
        let text = render(StatsPanel {
            metric: Metric::WindSpeed,
            lines: Some(stat_lines(&stats, Metric::WindSpeed.unit())),
        });
        assert!(text.contains("Wind Speed statistics"));
        assert!(text.contains("Average:      6.00 km/h"));
        assert!(text.contains("Most Common:  N/A km/h"));
        assert!(text.contains("Max:          8.00 km/h"));
    }

    #[test]
    fn test_placeholder_without_readings() {
        let text = render(StatsPanel {
            metric: Metric::Temperature,
            lines: None,
        });
        assert!(text.contains(NO_READINGS));
        assert!(!text.contains("Average"));
    }
}
