//! Edge-triggered translation of raw terminal events.

use crossterm::event::{Event, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::types::GameAction;

/// What the front-end loop should do with one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Action(GameAction),
    Resize { width: u16, height: u16 },
    Quit,
}

/// Translate a terminal event; `None` if it should be ignored.
///
/// Key repeats and releases are dropped: one physical press, one action.
pub fn translate_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if should_quit(*key) {
                Some(InputEvent::Quit)
            } else {
                handle_key_event(*key).map(InputEvent::Action)
            }
        }
        Event::Resize(width, height) => Some(InputEvent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}
