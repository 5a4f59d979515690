use std::sync::mpsc::Sender;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Spacing},
    style::Modifier,
    symbols::merge::MergeStrategy,
    text::Line,
    widgets::{Block, Paragraph, Tabs},
};
use tracing::{debug, error, info};
use weatherdash_core::{HourlySeries, Metric, MetricReport, WindowSpec};
use weatherdash_runtime::{App, RenderMode, Runtime};

use crate::{
    command::dashboard::loader::{FetchOutcome, FetchRequest},
    ui::widgets::{
        ChartHandle, ChartSlot, KeyBinding, KeyBindingDisplay, MetricChart, ReadingTable,
        StatsPanel, style,
    },
};

const FRAME_RATE: f64 = 30.0;
const SPINNER_RATE: f64 = 10.0;
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const PAGE_ROWS: usize = 10;
const TABLE_WIDTH: u16 = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scroll {
    Up(usize),
    Down(usize),
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Select(Metric),
    NextMetric,
    PrevMetric,
    NextWindow,
    PrevWindow,
    Reload,
    Scroll(Scroll),
    Quit,
}

impl Action {
    fn from_key_event(event: &KeyEvent) -> Option<Self> {
        match event.code {
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Self::Quit)
            }
            KeyCode::Char('1') => Some(Self::Select(Metric::Temperature)),
            KeyCode::Char('2') => Some(Self::Select(Metric::Precipitation)),
            KeyCode::Char('3') => Some(Self::Select(Metric::WindSpeed)),
            KeyCode::Tab | KeyCode::Right => Some(Self::NextMetric),
            KeyCode::BackTab | KeyCode::Left => Some(Self::PrevMetric),
            KeyCode::Char(']' | 'w') => Some(Self::NextWindow),
            KeyCode::Char('[' | 'W') => Some(Self::PrevWindow),
            KeyCode::Char('r') => Some(Self::Reload),
            KeyCode::Char('k') | KeyCode::Up => Some(Self::Scroll(Scroll::Up(1))),
            KeyCode::Char('j') | KeyCode::Down => Some(Self::Scroll(Scroll::Down(1))),
            KeyCode::PageUp => Some(Self::Scroll(Scroll::Up(PAGE_ROWS))),
            KeyCode::PageDown => Some(Self::Scroll(Scroll::Down(PAGE_ROWS))),
            KeyCode::Char('g') | KeyCode::Home => Some(Self::Scroll(Scroll::Top)),
            KeyCode::Char('G') | KeyCode::End => Some(Self::Scroll(Scroll::Bottom)),
            KeyCode::Char('q') | KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }

    /// Index of the window binding in [`bindings`](Self::bindings).
    const WINDOW_BINDING: usize = 1;

    fn bindings() -> &'static [KeyBinding<'static>] {
        &[
            (&["1-3", "Tab"], "Metric"),
            (&["[", "]"], "Window"),
            (&["↑", "↓", "PgUp", "PgDn"], "Scroll"),
            (&["r"], "Reload"),
            (&["q", "Esc"], "Quit"),
        ]
    }
}

/// Data of one load, kept until a newer load for the metric succeeds.
#[derive(Debug)]
struct Loaded {
    window: WindowSpec,
    series: HourlySeries,
}

/// State of one metric's view.
#[derive(Debug)]
struct MetricView {
    metric: Metric,
    window: WindowSpec,
    loaded: Option<Loaded>,
    pending: Option<FetchRequest>,
    error: Option<String>,
    offset: usize,
    chart: ChartSlot,
}

impl MetricView {
    fn new(metric: Metric) -> Self {
        Self {
            metric,
            window: metric.default_window(),
            loaded: None,
            pending: None,
            error: None,
            offset: 0,
            chart: ChartSlot::default(),
        }
    }

    fn report(&self) -> Option<MetricReport<'_>> {
        self.loaded
            .as_ref()
            .map(|loaded| MetricReport::new(self.metric, loaded.window, &loaded.series.readings))
    }

    fn row_count(&self) -> usize {
        self.report().map_or(0, |report| report.sample().len())
    }

    fn scroll(&mut self, scroll: Scroll) {
        let last = self.row_count().saturating_sub(1);
        let offset = match scroll {
            Scroll::Up(rows) => self.offset.saturating_sub(rows),
            Scroll::Down(rows) => self.offset.saturating_add(rows),
            Scroll::Top => 0,
            Scroll::Bottom => last,
        };
        self.offset = offset.min(last);
    }
}

/// Interactive dashboard with one view per metric.
///
/// Views are loaded when first shown and reloaded when their window
/// changes. Loads run on the loader thread; a view only accepts the outcome
/// of its most recent request.
#[derive(Debug)]
pub(crate) struct DashboardApp {
    active: Metric,
    views: [MetricView; 3],
    requests: Sender<FetchRequest>,
    last_request_id: u64,
    source: String,
    spinner: usize,
    should_exit: bool,
}

impl DashboardApp {
    pub(crate) fn new(initial: Metric, requests: Sender<FetchRequest>, source: String) -> Self {
        Self {
            active: initial,
            views: Metric::ALL.map(MetricView::new),
            requests,
            last_request_id: 0,
            source,
            spinner: 0,
            should_exit: false,
        }
    }

    fn view(&self, metric: Metric) -> &MetricView {
        &self.views[metric.index()]
    }

    fn view_mut(&mut self, metric: Metric) -> &mut MetricView {
        &mut self.views[metric.index()]
    }

    fn is_loading(&self) -> bool {
        self.views.iter().any(|view| view.pending.is_some())
    }

    fn request_load(&mut self, metric: Metric) {
        self.last_request_id += 1;
        let request = FetchRequest {
            id: self.last_request_id,
            metric,
            window: self.view(metric).window,
        };
        let sent = self.requests.send(request).is_ok();

        let view = self.view_mut(metric);
        if sent {
            debug!(
                id = request.id,
                metric = metric.label(),
                window = %request.window,
                "requested load"
            );
            view.pending = Some(request);
            view.error = None;
        } else {
            error!("loader thread is not running");
            view.pending = None;
            view.error = Some("Data loader stopped; restart the dashboard".to_owned());
        }
    }

    fn select(&mut self, metric: Metric) {
        self.active = metric;
        let view = self.view(metric);
        if view.loaded.is_none() && view.pending.is_none() {
            self.request_load(metric);
        }
    }

    fn set_window(&mut self, window: WindowSpec) {
        let metric = self.active;
        let view = self.view_mut(metric);
        if view.window == window {
            return;
        }
        view.window = window;
        view.offset = 0;
        self.request_load(metric);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Select(metric) => self.select(metric),
            Action::NextMetric => self.select(self.active.next()),
            Action::PrevMetric => self.select(self.active.prev()),
            Action::NextWindow => self.set_window(self.view(self.active).window.next()),
            Action::PrevWindow => self.set_window(self.view(self.active).window.prev()),
            Action::Reload => self.request_load(self.active),
            Action::Scroll(scroll) => self.view_mut(self.active).scroll(scroll),
            Action::Quit => self.should_exit = true,
        }
    }

    fn sync_tick_rate(&self, runtime: &mut Runtime<FetchOutcome>) {
        runtime.set_tick_rate(self.is_loading().then_some(SPINNER_RATE));
    }

    fn status_line(&self) -> Line<'_> {
        let view = self.view(self.active);
        if let Some(request) = &view.pending {
            Line::raw(format!(
                "{} Loading {} data ({})...",
                SPINNER_FRAMES[self.spinner],
                request.metric.label().to_lowercase(),
                request.window
            ))
        } else if let Some(error) = &view.error {
            Line::styled(error.as_str(), style::ERROR)
        } else {
            Line::styled(self.source.as_str(), style::HINT)
        }
    }
}

impl App for DashboardApp {
    type Message = FetchOutcome;

    fn init(&mut self, runtime: &mut Runtime<FetchOutcome>) {
        runtime.set_render_mode(RenderMode::throttled_from_rate(FRAME_RATE));
        self.request_load(self.active);
        self.sync_tick_rate(runtime);
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn handle_event(&mut self, runtime: &mut Runtime<FetchOutcome>, event: Event) {
        if let Some(event) = event.as_key_press_event()
            && let Some(action) = Action::from_key_event(&event)
        {
            self.apply(action);
            self.sync_tick_rate(runtime);
        }
    }

    fn handle_message(&mut self, runtime: &mut Runtime<FetchOutcome>, outcome: FetchOutcome) {
        let FetchOutcome { request, result } = outcome;
        let view = self.view_mut(request.metric);
        if view.pending != Some(request) {
            debug!(
                id = request.id,
                metric = request.metric.label(),
                "discarding superseded load"
            );
            return;
        }
        view.pending = None;

        match result {
            Ok(series) => {
                let sample = series.select(request.window);
                let chart = view
                    .chart
                    .replace(ChartHandle::new(request.metric, request.window, sample));
                info!(
                    metric = request.metric.label(),
                    window = %request.window,
                    readings = sample.len(),
                    chart = chart.generation(),
                    "loaded"
                );
                view.loaded = Some(Loaded {
                    window: request.window,
                    series,
                });
                view.error = None;
                view.offset = view.offset.min(view.row_count().saturating_sub(1));
            }
            Err(err) => {
                let err = anyhow::Error::new(err);
                error!(metric = request.metric.label(), "{err:#}");
                view.error = Some(format!(
                    "Couldn't load {} data: {err:#}",
                    request.metric.label().to_lowercase()
                ));
            }
        }
        self.sync_tick_rate(runtime);
    }

    fn draw(&self, frame: &mut Frame) {
        let view = self.view(self.active);

        let [tabs_area, main_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let tabs = Tabs::new(
            Metric::ALL.map(|metric| format!("{} {}", metric.index() + 1, metric.label())),
        )
        .select(self.active.index())
        .highlight_style(style::metric(self.active).add_modifier(Modifier::BOLD))
        .block(Block::bordered().title(" weatherdash "));
        frame.render_widget(tabs, tabs_area);

        let [table_area, right_area] =
            Layout::horizontal([Constraint::Length(TABLE_WIDTH), Constraint::Fill(1)])
                .spacing(Spacing::Overlap(1))
                .areas(main_area);
        let [chart_area, stats_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(StatsPanel::HEIGHT)])
                .spacing(Spacing::Overlap(1))
                .areas(right_area);

        match view.report() {
            Some(report) => {
                frame.render_widget(
                    ReadingTable {
                        report: &report,
                        offset: view.offset,
                    },
                    table_area,
                );
                frame.render_widget(
                    StatsPanel {
                        metric: view.metric,
                        lines: report.stat_lines(),
                    },
                    stats_area,
                );
            }
            None => {
                let placeholder = if view.pending.is_some() {
                    "Loading..."
                } else {
                    "No data loaded, press r to retry"
                };
                frame.render_widget(
                    Paragraph::new(Line::styled(placeholder, style::HINT).centered()).block(
                        Block::bordered()
                            .merge_borders(MergeStrategy::Exact)
                            .title(format!("{} readings", view.metric.label())),
                    ),
                    table_area,
                );
                frame.render_widget(
                    StatsPanel {
                        metric: view.metric,
                        lines: None,
                    },
                    stats_area,
                );
            }
        }
        frame.render_widget(
            MetricChart {
                metric: view.metric,
                handle: view.chart.current(),
            },
            chart_area,
        );

        frame.render_widget(self.status_line().centered(), status_area);
        frame.render_widget(
            KeyBindingDisplay::new(Action::bindings())
                .note(Action::WINDOW_BINDING, view.window.to_string()),
            help_area,
        );
    }

    fn update(&mut self, _runtime: &mut Runtime<FetchOutcome>) {
        self.spinner = (self.spinner + 1) % SPINNER_FRAMES.len();
    }
}
