//! siege_tui - Interactive siege calculator

mod app;
mod cli;
mod error;
mod ui;

use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use error::AppError;
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use siege_core::{default_rules, load_rules, SiegeCalculator};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ (AppError::Siege(_) | AppError::Usage(_))) => {
            tracing::warn!("rejected input: {e:?}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let rules = match &cli.rules {
        Some(path) => {
            tracing::info!("Loading siege rules from {}", path.display());
            load_rules(path)?
        }
        None => default_rules(),
    };
    let calculator = SiegeCalculator::new(rules);

    match cli.command {
        None => run_tui(calculator)?,
        Some(Commands::Calc(args)) => cli::run_calc(&calculator, &args, &mut io::stdout().lock())?,
        Some(Commands::Units) => cli::list_units(&mut io::stdout().lock())?,
    }
    Ok(())
}

fn run_tui(calculator: SiegeCalculator) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(calculator);
    let outcome = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    outcome
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Char('r'), KeyModifiers::CONTROL) => app.reset(),
                    (KeyCode::Char('?'), _) | (KeyCode::F(1), _) => app.toggle_help(),
                    (KeyCode::Tab, _) | (KeyCode::Down, _) => app.on_down(),
                    (KeyCode::BackTab, _) | (KeyCode::Up, _) => app.on_up(),
                    (KeyCode::Left, _) => app.on_left(),
                    (KeyCode::Right, _) => app.on_right(),
                    (KeyCode::PageDown, _) => app.scroll_result(true),
                    (KeyCode::PageUp, _) => app.scroll_result(false),
                    (KeyCode::Backspace, _) => app.on_backspace(),
                    (KeyCode::Enter, _) => app.calculate(),
                    (KeyCode::Char(c), _) => app.on_char(c),
                    _ => {}
                }
            }
        }
    }

    Ok(())
}
