/// Update function for the token field.
///
/// Central state machine of the widget: every event goes through
/// [`update`], which consumes the current state and the host-owned item
/// list and returns replacements plus the effect to execute. The
/// function is pure, so transitions can be tested without a terminal.
use crate::config::UpdateConfig;
use crate::effect::Effect;
use crate::event::{Event, Key};
use crate::state::State;
use std::collections::HashSet;

/// Result of one update cycle.
///
/// `items` is a replacement for the host's committed list, never a
/// mutation of it. Between update calls it contains no duplicates and
/// no empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub state: State,
    pub items: Vec<String>,
    pub effect: Effect,
}

impl Update {
    fn unchanged(state: State, items: Vec<String>) -> Self {
        Self {
            state,
            items,
            effect: Effect::None,
        }
    }

    fn refocus(state: State, items: Vec<String>) -> Self {
        let effect = Effect::Focus(state.element_id.clone());
        Self {
            state,
            items,
            effect,
        }
    }
}

/// Process one event and return the replacement state, item list, and
/// effect.
pub fn update(config: &UpdateConfig, event: Event, mut state: State, mut items: Vec<String>) -> Update {
    match event {
        Event::RequestFocus => Update::refocus(state, items),

        Event::FocusGranted => Update::unchanged(state, items),

        Event::KeyPressed(Key::Tab) => {
            if state.pending_text.is_empty() {
                return Update::unchanged(state, items);
            }

            items.push(std::mem::take(&mut state.pending_text));
            let items = dedupe(items);
            Update::refocus(state, items)
        }

        Event::KeyPressed(Key::Backspace) => {
            // Backspace inside non-empty pending text is ordinary
            // editing, handled by the entry field itself.
            if !state.pending_text.is_empty() {
                return Update::unchanged(state, items);
            }

            match items.pop() {
                Some(last) => {
                    state.pending_text = last;
                    Update::refocus(state, items)
                }
                None => Update::unchanged(state, items),
            }
        }

        Event::KeyPressed(Key::Other) => Update::unchanged(state, items),

        Event::TextChanged(text) => {
            let mut pieces = config.split(&text);

            // The last piece stays uncommitted; everything before it is
            // a candidate item.
            state.pending_text = pieces.pop().unwrap_or_default().to_string();
            items.extend(
                pieces
                    .into_iter()
                    .filter(|piece| !piece.is_empty())
                    .map(str::to_string),
            );

            let items = dedupe(items);
            Update::refocus(state, items)
        }

        Event::RemoveItem(value) => {
            items.retain(|item| item != &value);
            Update::unchanged(state, items)
        }

        Event::Blurred(text) => {
            if text.is_empty() {
                return Update::unchanged(state, items);
            }

            state.pending_text.clear();
            items.push(text);
            Update::unchanged(state, dedupe(items))
        }
    }
}

/// Drop later duplicates in a single pass, keeping the first occurrence
/// of each value and the original relative order.
pub(crate) fn dedupe(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
