pub mod app;
pub mod events;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod selection;
pub mod terminal_guard;
pub mod theme;

use std::io;
use std::time::Duration;

use crossterm::terminal::size as terminal_size;

use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::terminal_guard::setup_terminal;

/// Drive the checklist screen until the user quits.
///
/// One event is processed to completion, then the frame is redrawn from
/// the resulting state. There is no other notification path between the
/// state and the view.
pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let size = terminal_size().unwrap_or((80, 24));
    let mut app = App::new(config, size);
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| render::draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
