pub use self::{key_binding_display::*, metric_chart::*, reading_table::*, stats_panel::*};

mod key_binding_display;
mod metric_chart;
mod reading_table;
mod stats_panel;

pub mod style {
    use ratatui::style::{Color, Modifier, Style};
    use weatherdash_core::{DisplayColor, Metric};

    pub const HINT: Style = Style::new().fg(Color::DarkGray);
    pub const ERROR: Style = Style::new().fg(Color::Red);
    pub const HEADER: Style = Style::new().add_modifier(Modifier::BOLD);

    pub const fn metric_color(metric: Metric) -> Color {
        let DisplayColor { r, g, b } = metric.color();
        Color::Rgb(r, g, b)
    }

    pub const fn metric(metric: Metric) -> Style {
        Style::new().fg(metric_color(metric))
    }
}
