//! Main TUI application state and logic

use crate::config::FRAME_RATE;
use crate::dataset::DataOrder;
use crate::engine::EngineError;
use crate::race::Race;
use crate::ui::panes::{self, RaceState};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    /// The four engines and their pacing
    pub race: Race,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// When the race last advanced
    last_tick: Instant,
}

impl App {
    pub fn new(race: Race) -> Self {
        App {
            race,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_tick: Instant::now(),
        }
    }

    fn frame_interval() -> Duration {
        Duration::from_secs(1) / FRAME_RATE
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Advance at most once per frame, however fast keys arrive
            if self.last_tick.elapsed() >= Self::frame_interval() {
                let was_running = self.race.is_running();
                self.race.tick();
                if was_running && self.race.is_finished() {
                    self.status_message = "All sorts finished".to_string();
                }
                self.last_tick = Instant::now();
            }

            let timeout = Self::frame_interval().saturating_sub(self.last_tick.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn race_state(&self) -> RaceState {
        if self.race.is_finished() {
            RaceState::Finished
        } else if self.race.is_running() {
            RaceState::Running
        } else {
            RaceState::Paused
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(DEFAULT_THEME.bg)),
            size,
        );

        // Header, 2x2 grid of lanes, status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        panes::render_header_pane(frame, main_chunks[0], &self.race);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[1]);

        let mut quadrants = Vec::with_capacity(4);
        for row in rows.iter() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row);
            quadrants.extend(columns.iter().copied());
        }

        // Lanes are in display order: Bubble, Quick / Merge, Radix
        for (lane, area) in self.race.lanes().iter().zip(quadrants) {
            panes::render_lane_pane(frame, area, lane);
        }

        panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.race_state(),
            self.race.steps_per_frame(),
        );
    }

    fn report(&mut self, result: Result<(), EngineError>, message: &str) {
        self.status_message = match result {
            Ok(()) => message.to_string(),
            Err(e) => format!("Error: {}", e),
        };
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                self.race.start_pause();
                self.status_message = if self.race.is_running() {
                    "Running...".to_string()
                } else if self.race.is_finished() {
                    "All sorts finished".to_string()
                } else {
                    "Paused".to_string()
                };
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let result = self.race.reset();
                self.report(result, "Reset with new data");
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let result = self.race.grow();
                let message = format!("n = {}", self.race.config().size);
                self.report(result, &message);
            }
            KeyCode::Char('-') => {
                let result = self.race.shrink();
                let message = format!("n = {}", self.race.config().size);
                self.report(result, &message);
            }
            KeyCode::Char(']') => {
                self.race.speed_up();
                self.status_message =
                    format!("speed = {} steps/s", self.race.config().steps_per_second);
            }
            KeyCode::Char('[') => {
                self.race.speed_down();
                self.status_message =
                    format!("speed = {} steps/s", self.race.config().steps_per_second);
            }
            KeyCode::Char(c @ '1'..='3') => {
                let order = match c {
                    '1' => DataOrder::Random,
                    '2' => DataOrder::Sorted,
                    _ => DataOrder::Reverse,
                };
                let result = self.race.set_order(order);
                self.report(result, &format!("mode = {}", order));
            }
            KeyCode::Enter => {
                // Finish every lane immediately
                self.race.run_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            _ => {}
        }
    }
}
