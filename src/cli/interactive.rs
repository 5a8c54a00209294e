//! Terminal prompt used when no connection string is passed on the command line.
use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, List, ListState, Paragraph},
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

/// What the caller should do after an event was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    Continue,
    Quit,
    /// Launch this connection string, trimmed.
    Submit(String),
}

/// State of the interactive prompt: input line, designer toggle, history list.
///
/// Keys: Enter submits the input or copies the highlighted history entry into
/// it, Up/Down move through history, Ctrl+D toggles designer mode, Esc and
/// Ctrl+C quit. Everything else edits the input.
#[derive(Debug, Default)]
pub struct ConnectionPrompt {
    designer: bool,
    input: Input,
    error: Option<String>,
    history: Vec<String>,
    selection: ListState,
}

impl ConnectionPrompt {
    pub fn new(history: Vec<String>, designer: bool) -> Self {
        Self {
            designer,
            history,
            ..Self::default()
        }
    }

    pub fn designer(&self) -> bool {
        self.designer
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.selected()
    }

    /// Show `message` under the input until the next submit.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn handle_event(&mut self, event: &Event) -> PromptAction {
        let Event::Key(key) = event else {
            return PromptAction::Continue;
        };
        if key.kind != KeyEventKind::Press {
            return PromptAction::Continue;
        }
        self.handle_key(*key, event)
    }

    fn handle_key(&mut self, key: KeyEvent, event: &Event) -> PromptAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => PromptAction::Quit,
            KeyCode::Char('c') if ctrl => PromptAction::Quit,
            KeyCode::Char('d') if ctrl => {
                self.designer = !self.designer;
                PromptAction::Continue
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Up => {
                self.select_previous();
                PromptAction::Continue
            }
            KeyCode::Down => {
                self.select_next();
                PromptAction::Continue
            }
            _ => {
                self.selection.select(None);
                self.input.handle_event(event);
                PromptAction::Continue
            }
        }
    }

    fn submit(&mut self) -> PromptAction {
        if let Some(index) = self.selection.selected() {
            if let Some(entry) = self.history.get(index) {
                self.input = Input::new(entry.clone());
            }
            self.selection.select(None);
            return PromptAction::Continue;
        }

        let value = self.input.value().trim();
        if value.is_empty() {
            return PromptAction::Continue;
        }
        self.error = None;
        PromptAction::Submit(value.to_string())
    }

    fn select_previous(&mut self) {
        let Some(last) = self.history.len().checked_sub(1) else {
            return;
        };
        let previous = match self.selection.selected() {
            Some(index) => index.saturating_sub(1),
            None => last,
        };
        self.selection.select(Some(previous));
    }

    fn select_next(&mut self) {
        let Some(last) = self.history.len().checked_sub(1) else {
            return;
        };
        let next = match self.selection.selected() {
            Some(index) => (index + 1).min(last),
            None => 0,
        };
        self.selection.select(Some(next));
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let [input_area, status_area, history_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .areas(frame.area());

        self.render_input(frame, input_area);
        self.render_status(frame, status_area);
        self.render_history(frame, history_area);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let width = area.width.max(3) - 3;
        let scroll = self.input.visual_scroll(width as usize);
        let widget = Paragraph::new(self.input.value())
            .scroll((0, scroll as u16))
            .block(Block::bordered().title("Connection string"));
        frame.render_widget(widget, area);

        let x = self.input.visual_cursor().max(scroll) - scroll + 1;
        frame.set_cursor_position((area.x + x as u16, area.y + 1));
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        if let Some(error) = &self.error {
            lines.push(error.clone().red().into());
        }
        if self.designer {
            lines.push("Ctrl+D: Designer (on)".green().into());
        } else {
            lines.push("Ctrl+D: Designer (off)".into());
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_history(&mut self, frame: &mut Frame, area: Rect) {
        let list = List::new(self.history.clone())
            .block(Block::bordered().title("History"))
            .highlight_style(Style::new().reversed());
        frame.render_stateful_widget(list, area, &mut self.selection);
    }
}
