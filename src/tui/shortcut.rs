//! Global admin shortcut.
//!
//! Ctrl+Shift+A navigates to the admin login from anywhere in the preview.
//! The listener is process-wide: it is installed when the application mounts
//! and removed when the returned [`ShortcutGuard`] is dropped at teardown.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bubbletea_rs::event::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

use crate::hero::ADMIN_LOGIN_PATH;

/// Navigation side effect run when the shortcut fires. Receives the target
/// location.
pub type Navigate = Arc<dyn Fn(&str) + Send + Sync>;

/// Installed listener tagged with the generation of the install that
/// placed it.
struct Installed {
    generation: u64,
    navigate: Navigate,
}

static LISTENER: Mutex<Option<Installed>> = Mutex::new(None);
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(0);

fn listener() -> MutexGuard<'static, Option<Installed>> {
    LISTENER.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Keeps the admin shortcut installed; removes it on drop.
///
/// A guard only removes the listener its own install placed. Dropping a
/// guard whose listener was already replaced leaves the newer one alone.
#[must_use = "the shortcut is removed as soon as the guard is dropped"]
pub struct ShortcutGuard {
    generation: u64,
}

impl fmt::Debug for ShortcutGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutGuard")
            .field("generation", &self.generation)
            .finish()
    }
}

impl Drop for ShortcutGuard {
    fn drop(&mut self) {
        let mut slot = listener();
        if slot
            .as_ref()
            .is_some_and(|installed| installed.generation == self.generation)
        {
            *slot = None;
            tracing::debug!(generation = self.generation, "admin shortcut removed");
        } else {
            tracing::debug!(
                generation = self.generation,
                "stale admin shortcut guard dropped"
            );
        }
    }
}

/// Installs `navigate` as the admin shortcut listener, replacing any
/// previous one.
pub fn install(navigate: Navigate) -> ShortcutGuard {
    let generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);
    *listener() = Some(Installed {
        generation,
        navigate,
    });
    tracing::debug!(generation, "admin shortcut installed");
    ShortcutGuard { generation }
}

/// Returns `true` while a listener is installed.
#[must_use]
pub fn is_installed() -> bool {
    listener().is_some()
}

/// Returns `true` when `key` is Ctrl+Shift+A.
///
/// Terminals that do not report Shift still deliver an upper-case `A`.
#[must_use]
pub fn is_admin_chord(key: &KeyMsg) -> bool {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }
    match key.key {
        KeyCode::Char('A') => true,
        KeyCode::Char('a') => key.modifiers.contains(KeyModifiers::SHIFT),
        _ => false,
    }
}

/// Runs the installed listener with the admin login location.
///
/// Returns `false` when no listener is installed.
pub fn trigger() -> bool {
    let Some(navigate) = listener()
        .as_ref()
        .map(|installed| Arc::clone(&installed.navigate))
    else {
        return false;
    };
    navigate(ADMIN_LOGIN_PATH);
    true
}
