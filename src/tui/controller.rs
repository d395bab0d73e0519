use crate::tui::app::{AppState, InputAction, Pointer, Scene};
use crate::tui::geometry::TableGeometry;
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if handle_key(app, key.code) {
                        break;
                    }
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    handle_mouse(app, Rect::new(0, 0, size.width, size.height), mouse);
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Route a key press. Returns true when the user asked to quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if app.help_open() {
        if matches!(code, KeyCode::Esc | KeyCode::Char('?')) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }

    match app.scene {
        Scene::Setup => match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::SetupPrev);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::SetupNext);
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                let _ = app.handle_input(InputAction::SetupInc);
            }
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => {
                let _ = app.handle_input(InputAction::SetupDec);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::SetupApply);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            _ => {}
        },
        Scene::Table => match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::CursorUp);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::CursorDown);
            }
            KeyCode::Left => {
                let _ = app.handle_input(InputAction::CursorLeft);
            }
            KeyCode::Right => {
                let _ = app.handle_input(InputAction::CursorRight);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let _ = app.handle_input(InputAction::PlaceAtCursor);
            }
            KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Backspace => {
                let _ = app.handle_input(InputAction::Undo);
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                let _ = app.handle_input(InputAction::Clear);
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                let _ = app.handle_input(InputAction::ToggleDeck);
            }
            KeyCode::Char('?') => {
                let _ = app.handle_input(InputAction::ToggleHelp);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => {}
        },
    }
    false
}

/// Hit-test a mouse event against the current layout and feed it to the app.
pub fn handle_mouse(app: &mut AppState, area: Rect, mouse: MouseEvent) {
    if app.scene != Scene::Table || app.help_open() {
        return;
    }
    let geometry =
        TableGeometry::compute(area, app.table.selection().num_players(), app.deck_visible());
    let hit = geometry.hit(mouse.column, mouse.row);
    let pointer = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Pointer::Down(hit),
        MouseEventKind::Drag(MouseButton::Left) => Pointer::Move(hit),
        MouseEventKind::Up(MouseButton::Left) => Pointer::Up(hit),
        _ => return,
    };
    let _ = app.pointer(pointer);
}
