//! Main TUI application state and logic

use crate::tower::Tower;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Tower,
    Stack,
    Log,
}

impl FocusedPane {
    /// Move focus to the next pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Tower => FocusedPane::Stack,
            FocusedPane::Stack => FocusedPane::Log,
            FocusedPane::Log => FocusedPane::Tower,
        }
    }
}

/// A parsed user command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PushCup(u32),
    PushLid(u32),
    RemoveCup(u32),
    Show,
    Hide,
    Help,
    Quit,
}

/// Parse one command line.
///
/// Accepted forms: `push N` (alias `cup N`), `lid N`, `remove N` (alias
/// `pop N`), `show`, `hide`, `help`, `quit`.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Err(String::from("empty command"));
    };

    let mut numeric_arg = |name: &str| -> Result<u32, String> {
        let Some(arg) = words.next() else {
            return Err(format!("'{}' needs a cup number", name));
        };
        match arg.parse::<u32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(format!("'{}' is not a positive cup number", arg)),
        }
    };

    match keyword {
        "push" | "cup" => Ok(Command::PushCup(numeric_arg(keyword)?)),
        "lid" => Ok(Command::PushLid(numeric_arg(keyword)?)),
        "remove" | "pop" => Ok(Command::RemoveCup(numeric_arg(keyword)?)),
        "show" => Ok(Command::Show),
        "hide" => Ok(Command::Hide),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command '{}'", other)),
    }
}

const HELP_LINES: [&str; 7] = [
    "push N    stack a new cup with identity N",
    "lid N     put a lid on cup N (must be on top)",
    "remove N  take cup N (and its lid) out of the tower",
    "show      make the tower visible",
    "hide      hide the tower",
    "help      this text",
    "quit      leave the simulator",
];

/// The main application state
pub struct App {
    /// The tower being manipulated
    pub tower: Tower,

    /// Command line currently being typed
    pub input: String,

    /// Command history and tower reports
    pub log: Vec<String>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub stack_scroll: usize,
    pub log_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app around the given tower
    pub fn new(tower: Tower) -> Self {
        App {
            tower,
            input: String::new(),
            log: Vec::new(),
            focused_pane: FocusedPane::Tower,
            stack_scroll: 0,
            log_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, command input below, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        // Right column: Stack (top) | Log (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);

        super::panes::render_tower_pane(
            frame,
            columns[0],
            &self.tower,
            self.focused_pane == FocusedPane::Tower,
        );
        super::panes::render_stack_pane(
            frame,
            right_rows[0],
            &self.tower,
            self.focused_pane == FocusedPane::Stack,
            &mut self.stack_scroll,
        );
        super::panes::render_log_pane(
            frame,
            right_rows[1],
            &self.log,
            self.focused_pane == FocusedPane::Log,
            &mut self.log_scroll,
        );
        super::panes::render_input_bar(frame, main_chunks[1], &self.input);
        super::panes::render_status_bar(frame, main_chunks[2], &self.status_message, &self.tower);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.input);
                self.execute_command(&line);
            }
            KeyCode::Esc => {
                self.input.clear();
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Stack => {
                    self.stack_scroll = self.stack_scroll.saturating_sub(1);
                }
                FocusedPane::Log => {
                    self.log_scroll = self.log_scroll.saturating_sub(1);
                }
                FocusedPane::Tower => {}
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Stack => {
                    self.stack_scroll = self.stack_scroll.saturating_add(1);
                }
                FocusedPane::Log => {
                    self.log_scroll = self.log_scroll.saturating_add(1);
                }
                FocusedPane::Tower => {}
            },
            KeyCode::Char('q') if self.input.is_empty() => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    /// Parse and apply one command line, logging the outcome
    pub fn execute_command(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        self.log.push(format!("> {}", line));
        match parse_command(line) {
            Ok(command) => self.apply_command(command),
            Err(message) => {
                self.log.push(message.clone());
                self.status_message = message;
            }
        }
        self.log_scroll = usize::MAX;
    }

    /// Apply an already-parsed command to the tower
    pub fn apply_command(&mut self, command: Command) {
        match command {
            Command::PushCup(n) => {
                self.tower.push_cup(n);
                self.finish_mutation(format!("push {}", n));
            }
            Command::PushLid(n) => {
                self.tower.push_lid(n);
                self.finish_mutation(format!("lid {}", n));
            }
            Command::RemoveCup(n) => {
                self.tower.remove_cup(n);
                self.finish_mutation(format!("remove {}", n));
            }
            Command::Show => {
                self.tower.make_visible();
                self.status_message = String::from("Tower visible");
            }
            Command::Hide => {
                self.tower.make_invisible();
                self.status_message = String::from("Tower hidden");
            }
            Command::Help => {
                for line in HELP_LINES {
                    self.log.push(line.to_string());
                }
                self.status_message = String::from("Help printed");
            }
            Command::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Collect tower reports and reflect the success flag in the status bar
    fn finish_mutation(&mut self, what: String) {
        for message in self.tower.take_messages() {
            self.log.push(message);
        }
        if self.tower.last_operation_ok() {
            self.status_message = format!("ok: {}", what);
        } else {
            self.status_message = format!("failed: {}", what);
        }
    }
}
