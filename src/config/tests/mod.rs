//! Unit tests for configuration loading and precedence.

mod helpers;
mod precedence;
