//! Tests for the update state machine through its public interface.

use crate::config::{ConfigError, UpdateConfig};
use crate::effect::Effect;
use crate::event::{Event, Key};
use crate::state::State;
use crate::update::update;
use crossterm::event::KeyCode;

fn config() -> UpdateConfig {
    UpdateConfig::new(&[",", " ", "\t", "\n"]).expect("separator config should build")
}

fn items(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn state_with(pending: &str) -> State {
    let mut state = State::new("recipients");
    state.pending_text = pending.to_string();
    state
}

#[test]
fn request_focus_only_emits_focus_effect() {
    let result = update(&config(), Event::RequestFocus, state_with(""), items(&["one"]));

    assert_eq!(result.state, state_with(""));
    assert_eq!(result.items, items(&["one"]));
    assert_eq!(result.effect, Effect::Focus("recipients".to_string()));
}

#[test]
fn focus_granted_is_a_noop() {
    let result = update(&config(), Event::FocusGranted, state_with("typing"), items(&["one"]));

    assert_eq!(result.state, state_with("typing"));
    assert_eq!(result.items, items(&["one"]));
    assert_eq!(result.effect, Effect::None);
}

#[test]
fn tab_commits_pending_text() {
    let result = update(&config(), Event::KeyPressed(Key::Tab), state_with("two"), items(&["one"]));

    assert_eq!(result.state.pending_text, "");
    assert_eq!(result.items, items(&["one", "two"]));
    assert_eq!(result.effect, Effect::Focus("recipients".to_string()));
}

#[test]
fn tab_with_empty_pending_text_is_a_noop() {
    let result = update(&config(), Event::KeyPressed(Key::Tab), state_with(""), items(&["one"]));

    assert_eq!(result.state.pending_text, "");
    assert_eq!(result.items, items(&["one"]));
    assert_eq!(result.effect, Effect::None);
}

#[test]
fn tab_commit_drops_duplicate_of_existing_item() {
    let result = update(&config(), Event::KeyPressed(Key::Tab), state_with("one"), items(&["one", "two"]));

    assert_eq!(result.state.pending_text, "");
    assert_eq!(result.items, items(&["one", "two"]));
}

#[test]
fn backspace_pops_last_item_into_pending_text() {
    let result = update(
        &config(),
        Event::KeyPressed(Key::Backspace),
        state_with(""),
        items(&["first", "previous"]),
    );

    assert_eq!(result.state.pending_text, "previous");
    assert_eq!(result.items, items(&["first"]));
    assert_eq!(result.effect, Effect::Focus("recipients".to_string()));
}

#[test]
fn backspace_with_no_items_is_a_noop() {
    let result = update(&config(), Event::KeyPressed(Key::Backspace), state_with(""), items(&[]));

    assert_eq!(result.state.pending_text, "");
    assert!(result.items.is_empty());
    assert_eq!(result.effect, Effect::None);
}

#[test]
fn backspace_with_pending_text_is_a_noop() {
    let result = update(
        &config(),
        Event::KeyPressed(Key::Backspace),
        state_with("typing"),
        items(&["one"]),
    );

    assert_eq!(result.state.pending_text, "typing");
    assert_eq!(result.items, items(&["one"]));
    assert_eq!(result.effect, Effect::None);
}

#[test]
fn other_keys_are_noops() {
    let result = update(
        &config(),
        Event::from_key(KeyCode::Char('a')),
        state_with("typing"),
        items(&["one"]),
    );

    assert_eq!(result.state.pending_text, "typing");
    assert_eq!(result.items, items(&["one"]));
    assert_eq!(result.effect, Effect::None);
}

#[test]
fn key_classification_from_key_codes() {
    assert_eq!(Key::from(KeyCode::Tab), Key::Tab);
    assert_eq!(Key::from(KeyCode::Backspace), Key::Backspace);
    assert_eq!(Key::from(KeyCode::Enter), Key::Other);
    assert_eq!(Key::from(KeyCode::Char('x')), Key::Other);
    assert_eq!(Key::from(KeyCode::Esc), Key::Other);
}

#[test]
fn text_changed_splits_on_all_separators_in_one_pass() {
    let pasted = "one two\tthree\nfour, five,six,,,seven eight\n\n\neight\nnine";
    let result = update(
        &config(),
        Event::TextChanged(pasted.to_string()),
        state_with(""),
        items(&["previous"]),
    );

    assert_eq!(result.state.pending_text, "nine");
    assert_eq!(
        result.items,
        items(&["previous", "one", "two", "three", "four", "five", "six", "seven", "eight"]),
    );
    assert_eq!(result.effect, Effect::Focus("recipients".to_string()));
}

#[test]
fn text_changed_without_separator_only_updates_pending_text() {
    let result = update(
        &config(),
        Event::TextChanged("typ".to_string()),
        state_with("ty"),
        items(&["one"]),
    );

    assert_eq!(result.state.pending_text, "typ");
    assert_eq!(result.items, items(&["one"]));
    assert_eq!(result.effect, Effect::Focus("recipients".to_string()));
}

#[test]
fn text_changed_with_trailing_separator_commits_and_clears() {
    let result = update(
        &config(),
        Event::TextChanged("alpha,".to_string()),
        state_with("alpha"),
        items(&[]),
    );

    assert_eq!(result.state.pending_text, "");
    assert_eq!(result.items, items(&["alpha"]));
}

#[test]
fn text_changed_empty_text_clears_pending_text() {
    let result = update(&config(), Event::TextChanged(String::new()), state_with("ty"), items(&["one"]));

    assert_eq!(result.state.pending_text, "");
    assert_eq!(result.items, items(&["one"]));
}

#[test]
fn remove_item_drops_all_equal_values_and_keeps_pending_text() {
    let result = update(
        &config(),
        Event::RemoveItem("two".to_string()),
        state_with("typing"),
        items(&["one", "two", "three"]),
    );

    assert_eq!(result.state.pending_text, "typing");
    assert_eq!(result.items, items(&["one", "three"]));
    assert_eq!(result.effect, Effect::None);
}

#[test]
fn remove_item_for_absent_value_is_a_noop() {
    let result = update(
        &config(),
        Event::RemoveItem("missing".to_string()),
        state_with(""),
        items(&["one", "two"]),
    );

    assert_eq!(result.items, items(&["one", "two"]));
    assert_eq!(result.effect, Effect::None);
}

#[test]
fn blur_commits_non_empty_text_without_effect() {
    let result = update(
        &config(),
        Event::Blurred("halfway".to_string()),
        state_with("halfway"),
        items(&[]),
    );

    assert_eq!(result.state.pending_text, "");
    assert_eq!(result.items, items(&["halfway"]));
    assert_eq!(result.effect, Effect::None);
}

#[test]
fn blur_with_empty_text_is_a_noop() {
    let result = update(&config(), Event::Blurred(String::new()), state_with(""), items(&["one"]));

    assert_eq!(result.state.pending_text, "");
    assert_eq!(result.items, items(&["one"]));
    assert_eq!(result.effect, Effect::None);
}

#[test]
fn dedupe_keeps_first_occurrence_and_order() {
    let deduped = crate::update::dedupe(items(&[
        "previous", "one", "two", "three", "four", "five", "six", "seven", "eight", "eight", "nine",
    ]));

    assert_eq!(
        deduped,
        items(&["previous", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine"]),
    );
}

#[test]
fn config_rejects_empty_separator_list() {
    let separators: [&str; 0] = [];
    assert!(matches!(
        UpdateConfig::new(&separators),
        Err(ConfigError::NoSeparators)
    ));
}

#[test]
fn config_rejects_empty_separator_literal() {
    assert!(matches!(
        UpdateConfig::new(&[",", ""]),
        Err(ConfigError::EmptySeparator)
    ));
}

#[test]
fn separators_with_regex_metacharacters_are_taken_literally() {
    let config = UpdateConfig::new(&["."]).expect("dot separator should build");
    let result = update(
        &config,
        Event::TextChanged("ab.cd".to_string()),
        state_with(""),
        items(&[]),
    );

    assert_eq!(result.state.pending_text, "cd");
    assert_eq!(result.items, items(&["ab"]));
}

#[test]
fn multi_character_separators_split_as_a_unit() {
    let config = UpdateConfig::new(&[", ", ";"]).expect("config should build");
    let result = update(
        &config,
        Event::TextChanged("one, two;three".to_string()),
        state_with(""),
        items(&[]),
    );

    assert_eq!(result.state.pending_text, "three");
    assert_eq!(result.items, items(&["one", "two"]));
}
