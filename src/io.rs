use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use tracing::trace;

use crate::events::Event;

/// Converts a crossterm event into a simulation event. Anything without a binding maps to `None`.
///
/// | key              | event            |
/// |------------------|------------------|
/// | `r`              | [`Event::Toggle`] |
/// | `q`, `Ctrl + c`  | [`Event::Quit`]   |
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        CrossTermEvent::Key(key_event) => {
            trace!(?key_event, "key");

            // some platforms report releases too
            if key_event.kind != KeyEventKind::Press {
                return None;
            }

            match key_event {
                KeyEvent {
                    code: KeyCode::Char('q'),
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                } => Some(Event::Quit),
                KeyEvent {
                    code: KeyCode::Char('r'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => Some(Event::Toggle),
                _ => None,
            }
        }
        // the next paint picks up the new size
        CrossTermEvent::Resize(cols, rows) => {
            trace!(cols, rows, "resize");

            None
        }
        _ => None,
    }
}
