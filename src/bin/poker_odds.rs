use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use poker_odds::calc::{self, CalcForm};
use poker_odds::config::{Command, Settings};
use poker_odds::odds::{HttpTransport, ThreadedOddsService, Transport};
use poker_odds::table::Table;
use poker_odds::tui::cue::{Bell, Cue, Silent};
use poker_odds::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::process::ExitCode;
use std::time::Duration;

fn init_logging(settings: &Settings) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    match settings.open_log_file() {
        Ok(file) => {
            if let Err(e) = simplelog::WriteLogger::init(settings.log_level(), config, file) {
                eprintln!("logging disabled: {e}");
            }
        }
        Err(e) => eprintln!("logging disabled: cannot create {}: {e}", settings.log_file.display()),
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_calc(transport: &HttpTransport, form: &CalcForm) -> ExitCode {
    match transport.post(&form.request()) {
        Ok(response) => {
            for line in calc::report(&response) {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::warn!("calc failed: {e}");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn run_tui(settings: &Settings, transport: HttpTransport) -> io::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "poker-odds needs a real terminal (TTY); use `poker-odds calc` for one-off queries. Version: {}",
            poker_odds::VERSION
        );
        return Ok(());
    }
    let table = Table::new(Box::new(ThreadedOddsService::new(transport)))
        .with_trials(settings.trials)
        .with_scan_order(settings.scan_order);
    let cue: Box<dyn Cue> = if settings.mute { Box::new(Silent) } else { Box::new(Bell) };
    let mut app = AppState::new(table, usize::from(settings.players), cue);

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}

fn main() -> ExitCode {
    let settings = Settings::parse();
    init_logging(&settings);
    log::info!("poker-odds {} using {}", poker_odds::VERSION, settings.endpoint);

    let transport = match HttpTransport::new(settings.endpoint.clone(), settings.timeout()) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match &settings.command {
        Some(Command::Calc { hero, board, opps, players }) => {
            match CalcForm::parse(hero, board, opps, *players, settings.trials) {
                Ok(form) => run_calc(&transport, &form),
                Err(e) => {
                    eprintln!("Error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        None => match run_tui(&settings, transport) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("terminal failure: {e}");
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
    }
}
