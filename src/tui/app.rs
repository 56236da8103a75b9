//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::provider::RecordProvider;
use crate::view::chart::ChartModel;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    provider: Box<dyn RecordProvider>,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new App with the given provider.
    pub fn new(provider: Box<dyn RecordProvider>) -> Self {
        let is_live = provider.is_live();
        Self {
            provider,
            state: AppState::new(is_live),
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);

        // Initial data load. Fires once at startup; nothing refreshes
        // implicitly after this.
        self.refresh();

        // Main loop
        loop {
            terminal.draw(|frame| render(frame, &self.state, self.provider.as_ref()))?;

            match events.next() {
                Ok(Event::Tick) => {}
                Ok(Event::Key(key)) => {
                    let rows = self.provider.records().len();
                    match handle_key(&mut self.state, key, rows) {
                        KeyAction::Quit => self.should_quit = true,
                        KeyAction::Refresh => self.refresh(),
                        KeyAction::None => {}
                    }
                }
                Ok(Event::Resize(_)) => {
                    // Relayout happens on the next draw.
                }
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Drop the chart model before the terminal is restored.
        self.state.chart.clear();

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Reloads the dataset and rebuilds the chart on success.
    ///
    /// A failed refresh leaves records and chart untouched; the provider has
    /// already logged the diagnostic, and the UI shows no error state.
    fn refresh(&mut self) {
        if let Some(records) = self.provider.refresh() {
            self.state.chart.replace(ChartModel::from_records(records));
            let count = records.len();
            self.state.clamp_selection(count);
            self.state.last_refresh = Some(chrono::Utc::now().timestamp());
        }
    }
}
