use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    symbols::merge::MergeStrategy,
    text::Line,
    widgets::{Block, Cell, Row, StatefulWidget, Table, TableState, Widget},
};
use weatherdash_core::MetricReport;

use crate::ui::widgets::style;

/// Time and value of every reading in the selected window, oldest first.
#[derive(Debug)]
pub struct ReadingTable<'a> {
    pub report: &'a MetricReport<'a>,
    /// Index of the first visible row.
    pub offset: usize,
}

impl Widget for ReadingTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let metric = self.report.metric();
        let header = Row::new([
            Cell::from("Time"),
            Cell::from(Line::from(metric.unit()).right_aligned()),
        ])
        .style(style::HEADER);
        let rows = self.report.table_rows().map(|row| {
            Row::new([
                Cell::from(row.time),
                Cell::from(Line::from(row.value).right_aligned()),
            ])
        });
        let table = Table::new(rows, [Constraint::Length(16), Constraint::Fill(1)])
            .header(header)
            .block(
                Block::bordered()
                    .merge_borders(MergeStrategy::Exact)
                    .title(format!("{} readings", metric.label()))
                    .title_bottom(format!("{} rows", self.report.sample().len())),
            );

        let mut state = TableState::default().with_offset(self.offset);
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
