//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. Lower-case pointer and touch keys act
//! on the hero, upper-case keys on the review strip.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::{AppMsg, Region};
use super::shortcut::is_admin_chord;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    if is_admin_chord(key) {
        return Some(AppMsg::AdminShortcut);
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.key {
            KeyCode::Char('c') => Some(AppMsg::Quit),
            _ => None,
        };
    }

    match key.key {
        KeyCode::Char('q') | KeyCode::Esc => Some(AppMsg::Quit),
        KeyCode::Char(digit @ '1'..='9') => slide_index(digit).map(AppMsg::GoToSlide),
        KeyCode::Enter => Some(AppMsg::ActivateCta),
        KeyCode::Char('f') => Some(AppMsg::LeaveReview),
        KeyCode::Tab => Some(AppMsg::CycleFocus),
        KeyCode::Char('p') => Some(AppMsg::TogglePointer(Region::Hero)),
        KeyCode::Char('P') => Some(AppMsg::TogglePointer(Region::Reviews)),
        KeyCode::Char('t') => Some(AppMsg::ToggleTouch(Region::Hero)),
        KeyCode::Char('T') => Some(AppMsg::ToggleTouch(Region::Reviews)),
        KeyCode::Char('m') => Some(AppMsg::ToggleReducedMotion),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

/// Zero-based slide index for a digit key (`'1'` is slide 0).
fn slide_index(digit: char) -> Option<usize> {
    digit
        .to_digit(10)
        .and_then(|value| value.checked_sub(1))
        .and_then(|value| usize::try_from(value).ok())
}
