/// Events consumed by the token field update loop.
///
/// Raw terminal input is classified into these events by the view
/// surface (see [`ViewLayout`](crate::view::ViewLayout)) or directly by
/// the host, then fed through [`update`](crate::update).
use crossterm::event::KeyCode;

/// Key classification for the token field.
///
/// Only Tab and Backspace drive transitions; everything else is lumped
/// into `Other` so the update match stays exhaustive. Ordinary text
/// editing is the entry field's own business and arrives as
/// [`Event::TextChanged`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Backspace,
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Tab => Key::Tab,
            KeyCode::Backspace => Key::Backspace,
            _ => Key::Other,
        }
    }
}

/// Messages processed by [`update`](crate::update).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The widget container was activated; focus should move to the
    /// text entry.
    RequestFocus,

    /// The host finished executing a focus effect.
    FocusGranted,

    /// The text entry lost focus with the given contents.
    Blurred(String),

    /// A key went down while the entry was focused.
    KeyPressed(Key),

    /// The delete affordance of the token holding this value was
    /// activated.
    RemoveItem(String),

    /// The entry contents changed to the given text.
    TextChanged(String),
}

impl Event {
    /// Classify a raw key code into a key-press event.
    pub fn from_key(code: KeyCode) -> Self {
        Event::KeyPressed(Key::from(code))
    }
}
