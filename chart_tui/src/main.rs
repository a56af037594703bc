//! chart_tui - Interactive TUI for editing and querying a type-effectiveness chart

mod app;
mod logging;
mod ui;

use app::App;
use chart_core::ChartConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;

const CONFIG_FILE: &str = "chart.toml";

fn main() -> io::Result<()> {
    let config = match ChartConfig::load_or_default(Path::new(CONFIG_FILE)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Ignoring {}: {}", CONFIG_FILE, e);
            ChartConfig::default()
        }
    };
    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Logging disabled: {}", e);
    }
    log::info!("Starting type chart editor");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if app.is_prompting() {
            app.on_prompt_key(key.code);
            continue;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
            (KeyCode::Tab, _) => app.next_tab(),
            (KeyCode::BackTab, _) => app.prev_tab(),
            (KeyCode::Char('1'), _) => app.set_tab(0),
            (KeyCode::Char('2'), _) => app.set_tab(1),
            (KeyCode::Char('3'), _) => app.set_tab(2),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
            (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.on_left(),
            (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.on_right(),
            (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => app.on_enter(),
            (KeyCode::Char('a'), _) => app.begin_add_type(),
            (KeyCode::Char('d'), _) => app.request_remove(),
            (KeyCode::Char('s'), _) => app.save(),
            (KeyCode::Char('L'), _) => app.load(),
            (KeyCode::Char('R'), _) => app.request_reset(),
            (KeyCode::Char('?'), _) => app.toggle_help(),
            _ => {}
        }
    }

    log::info!("Exiting");
    Ok(())
}
