//! Event handling for the dashboard TUI.

use super::app::DashApp;
use crate::model::DatasetKind;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Terminal events.
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

/// Event handler: a reader thread feeding a channel, with a tick when idle.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    _tx: mpsc::Sender<Event>,
}

impl Default for EventHandler {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(100);

        let event_tx = tx.clone();
        thread::spawn(move || loop {
            if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if event_tx.send(Event::Key(key)).is_err() {
                            break;
                        }
                    }
                    Ok(CrosstermEvent::Resize(w, h)) => {
                        if event_tx.send(Event::Resize(w, h)).is_err() {
                            break;
                        }
                    }
                    _ => {}
                }
            } else if event_tx.send(Event::Tick).is_err() {
                break;
            }
        });

        Self { rx, _tx: tx }
    }
}

impl EventHandler {
    pub fn next(&self) -> io::Result<Event> {
        self.rx.recv().map_err(io::Error::other)
    }
}

/// Handle key events for the dashboard.
pub fn handle_key_event(app: &mut DashApp, key: KeyEvent) {
    app.clear_status_message();

    // Overlays capture input first
    if app.show_help {
        app.show_help = false;
        return;
    }
    if app.filter_overlay.is_some() {
        handle_filter_overlay_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,

        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Char('1') => app.select_tab(DatasetKind::Recruitment),
        KeyCode::Char('2') => app.select_tab(DatasetKind::Managers),
        KeyCode::Char('3') => app.select_tab(DatasetKind::Turnover),
        KeyCode::Char('4') => app.select_tab(DatasetKind::Salary),

        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('t') => app.toggle_table(),
        KeyCode::Char('f') => app.open_filter_overlay(),
        KeyCode::Char('e') => app.export_active(),
        KeyCode::Char('r') => {
            app.reload();
            app.set_status_message("Datasets reloaded");
        }
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

fn handle_filter_overlay_key(app: &mut DashApp, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('f') => app.close_filter_overlay(),
        KeyCode::Up | KeyCode::Char('k') => app.overlay_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.overlay_cursor_down(),
        KeyCode::Char(' ') => app.overlay_toggle_selected(),
        KeyCode::Char('c') => app.overlay_clear_selection(),
        _ => {}
    }
}
