use crate::tui::app::{AppState, InputAction};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, MouseButton, MouseEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};
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
                Event::Key(key) => {
                    if handle_key(app, key.code) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse(app, mouse.kind),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            let sounds = app.on_tick();
            if !sounds.is_empty() {
                ring_bell()?;
            }
            last_tick = Instant::now();
        }
    }
    Ok(())
}

fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char(' ') => {
            let _ = app.handle_input(InputAction::Select);
        }
        KeyCode::Enter => {
            let _ = app.handle_input(InputAction::Confirm);
        }
        _ => {}
    }
    false
}

fn handle_mouse(app: &mut AppState, kind: MouseEventKind) {
    if matches!(kind, MouseEventKind::Down(MouseButton::Left)) {
        let _ = app.handle_input(InputAction::Select);
    }
}

// The closest a terminal gets to a card-flip sound.
fn ring_bell() -> io::Result<()> {
    let mut out = io::stdout();
    out.write_all(b"\x07")?;
    out.flush()
}
