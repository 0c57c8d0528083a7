//! Support code for hero slide rotation BDD tests.

pub(crate) mod state;

pub(crate) use state::RotationState;
