//! TUI Application state and event handling.

use crate::screens;
use crate::state::{DashboardState, Focus};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pricer_risk::scenarios::SweepSeries;
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::time::Duration;

/// What a key press asks the event loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Nothing changed
    Ignored,
    /// Inputs changed; the curve must be recomputed
    Changed,
    /// Only the view changed (focus, information panel)
    Redraw,
    /// Leave the application
    Quit,
}

/// Applies one key press to the dashboard state
pub fn handle_key(state: &mut DashboardState, key: KeyEvent) -> KeyOutcome {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyOutcome::Quit;
    }

    if state.show_info() {
        return match key.code {
            KeyCode::Char('i') | KeyCode::Esc => {
                state.toggle_info();
                KeyOutcome::Redraw
            }
            KeyCode::Char('q') => KeyOutcome::Quit,
            _ => KeyOutcome::Ignored,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyOutcome::Quit,
        KeyCode::Char('i') => {
            state.toggle_info();
            KeyOutcome::Redraw
        }
        KeyCode::Tab => {
            state.move_focus(1);
            KeyOutcome::Redraw
        }
        KeyCode::BackTab => {
            state.move_focus(-1);
            KeyOutcome::Redraw
        }
        KeyCode::Left => adjust(state, -1),
        KeyCode::Right => adjust(state, 1),
        KeyCode::Backspace => changed_if(state.backspace()),
        KeyCode::Char(ch) => changed_if(state.type_char(ch)),
        _ => KeyOutcome::Ignored,
    }
}

fn adjust(state: &mut DashboardState, step: i32) -> KeyOutcome {
    if matches!(state.focus(), Focus::Input(_)) {
        return KeyOutcome::Ignored;
    }
    state.adjust(step);
    KeyOutcome::Changed
}

fn changed_if(changed: bool) -> KeyOutcome {
    if changed {
        KeyOutcome::Changed
    } else {
        KeyOutcome::Ignored
    }
}

/// TUI Application state
pub struct TuiApp {
    /// Dashboard inputs
    state: DashboardState,
    /// Curve for the current inputs; `None` draws the placeholder
    series: Option<SweepSeries>,
    /// Exit flag
    should_quit: bool,
    /// Terminal
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiApp {
    /// Create a new TUI application
    pub fn new() -> Result<Self> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let state = DashboardState::new();
        let series = state.compute();

        Ok(Self {
            state,
            series,
            should_quit: false,
            terminal,
        })
    }

    /// Run the TUI event loop
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true;
        loop {
            if dirty {
                let state = &self.state;
                let series = self.series.as_ref();
                self.terminal.draw(|frame| Self::draw(frame, state, series))?;
                dirty = false;
            }

            if event::poll(Duration::from_millis(250))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        match handle_key(&mut self.state, key) {
                            KeyOutcome::Quit => self.should_quit = true,
                            KeyOutcome::Changed => {
                                self.series = self.state.compute();
                                dirty = true;
                            }
                            KeyOutcome::Redraw => dirty = true,
                            KeyOutcome::Ignored => {}
                        }
                    }
                    Event::Resize(_, _) => dirty = true,
                    _ => {}
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Draw the dashboard
    fn draw(frame: &mut Frame, state: &DashboardState, series: Option<&SweepSeries>) {
        let area = frame.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Selectors
                Constraint::Length(3), // Call/Put tabs
                Constraint::Min(10),   // Chart
                Constraint::Length(3), // Inputs
                Constraint::Length(5), // Range slider
                Constraint::Length(3), // Footer
            ])
            .split(area);

        screens::draw_header(frame, chunks[0]);
        screens::draw_selectors(frame, chunks[1], state);
        screens::draw_tabs(frame, chunks[2], state);
        screens::draw_chart(frame, chunks[3], state, series);
        screens::draw_inputs(frame, chunks[4], state);
        screens::draw_range(frame, chunks[5], state);
        screens::draw_footer(frame, chunks[6]);

        if state.show_info() {
            screens::draw_information(frame, area);
        }
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
