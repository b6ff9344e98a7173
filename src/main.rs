// stacktty: Cup Stacking Tower Simulator with Terminal Visualization

mod canvas;
mod tower;
mod ui;

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tower::Tower;
use ui::app::parse_command;
use ui::App;

const TOWER_WIDTH: i32 = 80;
const TOWER_MAX_HEIGHT_CM: i32 = 20;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 || args.get(1).is_some_and(|a| a == "-h" || a == "--help") {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("stacktty");
        eprintln!("Usage: {} [script.txt]", program_name);
        eprintln!();
        eprintln!("Starts an interactive tower; with a script, its commands");
        eprintln!("(one per line, '#' comments) run before the TUI opens.");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {}                    # empty tower", program_name);
        eprintln!("  {} demos/basic.txt    # pre-stacked tower", program_name);
        std::process::exit(1);
    }

    let mut app = App::new(Tower::new(TOWER_WIDTH, TOWER_MAX_HEIGHT_CM));

    // Run the optional command script against the tower first
    if let Some(script) = args.get(1) {
        if !Path::new(script).exists() {
            eprintln!("Error: File '{}' not found", script);
            std::process::exit(1);
        }
        let source = fs::read_to_string(script)?;
        for (number, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match parse_command(line) {
                Ok(command) => {
                    app.log.push(format!("> {}", line));
                    app.apply_command(command);
                }
                Err(message) => {
                    eprintln!("{}: line {}: {}", script, number + 1, message);
                    std::process::exit(1);
                }
            }
        }
        if app.should_quit {
            eprintln!(
                "Script finished: {} element(s), {} cm stacked.",
                app.tower.stack().len(),
                app.tower.stack_height_cm()
            );
            return Ok(());
        }
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
