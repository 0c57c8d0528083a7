//! Multi-source pause gate shared by both rotation engines.
//!
//! Automatic advancement is suspended while any interaction source holds the
//! gate. Sources are tracked as a set so that releasing one source never
//! clears a hold owned by another.

use std::collections::HashSet;

/// Interaction sources that can hold a [`PauseGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoldSource {
    /// Pointer hovering over the component.
    Pointer,
    /// Keyboard focus inside the component.
    Focus,
    /// Active touch on the component.
    Touch,
}

/// Outcome of a hold or release, reporting whether the paused state flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateChange {
    /// The gate was open and is now held.
    Paused,
    /// The last hold was released.
    Resumed,
    /// The paused state did not change.
    Unchanged,
}

/// Set of active hold sources; paused while non-empty.
#[derive(Debug, Clone, Default)]
pub struct PauseGate {
    holds: HashSet<HoldSource>,
}

impl PauseGate {
    /// Creates an open gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while any source holds the gate.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        !self.holds.is_empty()
    }

    /// Returns `true` when `source` currently holds the gate.
    #[must_use]
    pub fn is_held_by(&self, source: HoldSource) -> bool {
        self.holds.contains(&source)
    }

    /// Adds a hold for `source`. Holding twice from the same source is a
    /// single hold.
    pub fn hold(&mut self, source: HoldSource) -> GateChange {
        let was_paused = self.is_paused();
        self.holds.insert(source);
        self.change_from(was_paused)
    }

    /// Releases the hold owned by `source`, leaving other sources intact.
    pub fn release(&mut self, source: HoldSource) -> GateChange {
        let was_paused = self.is_paused();
        self.holds.remove(&source);
        self.change_from(was_paused)
    }

    /// Holds or releases `source` depending on `held`.
    pub fn set_held(&mut self, source: HoldSource, held: bool) -> GateChange {
        if held {
            self.hold(source)
        } else {
            self.release(source)
        }
    }

    fn change_from(&self, was_paused: bool) -> GateChange {
        match (was_paused, self.is_paused()) {
            (false, true) => GateChange::Paused,
            (true, false) => GateChange::Resumed,
            _ => GateChange::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{GateChange, HoldSource, PauseGate};

    #[rstest]
    fn new_gate_is_open() {
        let gate = PauseGate::new();
        assert!(!gate.is_paused(), "fresh gate should not be paused");
    }

    #[rstest]
    fn double_hold_then_single_release_resumes() {
        let mut gate = PauseGate::new();

        assert_eq!(gate.set_held(HoldSource::Pointer, true), GateChange::Paused);
        assert_eq!(
            gate.set_held(HoldSource::Pointer, true),
            GateChange::Unchanged
        );
        assert_eq!(
            gate.set_held(HoldSource::Pointer, false),
            GateChange::Resumed
        );

        assert!(!gate.is_paused(), "gate should not stay stuck paused");
    }

    #[rstest]
    fn releasing_one_source_keeps_other_hold() {
        let mut gate = PauseGate::new();
        gate.hold(HoldSource::Pointer);
        gate.hold(HoldSource::Touch);

        let change = gate.release(HoldSource::Pointer);

        assert_eq!(change, GateChange::Unchanged);
        assert!(gate.is_paused(), "touch hold should keep the gate paused");
        assert!(gate.is_held_by(HoldSource::Touch));
        assert!(!gate.is_held_by(HoldSource::Pointer));
    }

    #[rstest]
    #[case::pointer(HoldSource::Pointer)]
    #[case::focus(HoldSource::Focus)]
    #[case::touch(HoldSource::Touch)]
    fn releasing_unheld_source_is_unchanged(#[case] source: HoldSource) {
        let mut gate = PauseGate::new();
        assert_eq!(gate.release(source), GateChange::Unchanged);
        assert!(!gate.is_paused());
    }
}
