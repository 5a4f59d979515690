use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Keys and what they do, e.g. `(&["q", "Esc"], "Quit")`.
pub type KeyBinding<'a> = (&'a [&'a str], &'a str);

/// One-line summary of key bindings, with optional annotations after the
/// description, e.g. the currently selected window.
#[derive(Debug)]
pub struct KeyBindingDisplay<'a> {
    bindings: &'a [KeyBinding<'a>],
    notes: Vec<(usize, String)>,
}

impl<'a> KeyBindingDisplay<'a> {
    pub fn new(bindings: &'a [KeyBinding<'a>]) -> Self {
        Self {
            bindings,
            notes: vec![],
        }
    }

    /// Appends `note` in parentheses to the description of binding `index`.
    pub fn note(mut self, index: usize, note: impl Into<String>) -> Self {
        self.notes.push((index, note.into()));
        self
    }

    fn line(&self) -> Line<'_> {
        let mut spans = vec![];
        for (i, (keys, desc)) in self.bindings.iter().copied().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", SEPARATOR_STYLE));
            }
            for (j, key) in keys.iter().copied().enumerate() {
                if j > 0 {
                    spans.push(Span::styled("/", SEPARATOR_STYLE));
                }
                spans.push(Span::styled(key, KEY_STYLE));
            }
            spans.push(Span::raw(": "));
            spans.push(Span::styled(desc, DESCRIPTION_STYLE));
            for (_, note) in self.notes.iter().filter(|(index, _)| *index == i) {
                spans.push(Span::styled(format!(" ({note})"), DESCRIPTION_STYLE));
            }
        }
        Line::from(spans).centered()
    }
}

const KEY_STYLE: Style = Style::new().fg(Color::Cyan);
const SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray);
const DESCRIPTION_STYLE: Style = Style::new().fg(Color::Gray);

impl Widget for KeyBindingDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.line().render(area, buf);
    }
}
