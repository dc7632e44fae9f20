//! A multi-value token input widget for Ratatui terminal interfaces.
//!
//! The widget lets a user type multiple discrete values (tags, email
//! addresses, ...) into a single input surface. Typed or pasted text is
//! split on configurable separators, deduplicated, and each committed
//! value is rendered as a removable token followed by an auto-growing
//! text entry bound to the value currently being typed.
//!
//! State management follows the Model-Update-View pattern from Elm:
//! [`update`] consumes an [`Event`] together with the current [`State`]
//! and the host-owned item list and returns replacements plus an
//! [`Effect`] for the host runtime to execute. [`TokenField`] renders
//! the widget and hands back a [`ViewLayout`] that translates raw input
//! coordinates into widget events.

pub mod config;
pub mod effect;
pub mod event;
pub mod state;
pub mod update;
pub mod view;

pub use config::{ConfigError, UpdateConfig};
pub use effect::{Effect, EffectRunner, FocusTarget};
pub use event::{Event, Key};
pub use state::State;
pub use update::{update, Update};
pub use view::{TokenField, TokenStyles, ViewConfig, ViewLayout};

#[cfg(test)]
mod update_tests;
