//! Deadline bookkeeping for one logical periodic timer.
//!
//! A [`Cadence`] never sleeps by itself. The host event loop asks each
//! engine for its next deadline, sleeps until the earliest one, then lets the
//! engine fire whatever is due. Cancelling a timer is clearing its deadline,
//! so a disarmed cadence can never produce a late tick against stale state.

use std::time::Duration;

use tokio::time::Instant;

/// Shortest period any cadence will run with.
///
/// Also the floor of the inner-image period, and the value non-positive
/// configured intervals are clamped to.
pub const MIN_INTERVAL: Duration = Duration::from_millis(2000);

/// Clamps a configured interval to [`MIN_INTERVAL`].
#[must_use]
pub fn clamp_interval(interval: Duration) -> Duration {
    interval.max(MIN_INTERVAL)
}

/// Period of the inner-image timer for a given slide interval:
/// `max(2000ms, floor(interval / 2))` in whole milliseconds.
#[must_use]
pub fn inner_period(interval: Duration) -> Duration {
    let half_millis = interval.as_millis().div_euclid(2);
    let half = Duration::from_millis(u64::try_from(half_millis).unwrap_or(u64::MAX));
    half.max(MIN_INTERVAL)
}

/// Returns the earlier of two optional deadlines.
#[must_use]
pub fn earliest(first: Option<Instant>, second: Option<Instant>) -> Option<Instant> {
    match (first, second) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (deadline @ Some(_), None) | (None, deadline @ Some(_)) => deadline,
        (None, None) => None,
    }
}

/// One logical periodic timer: a fixed period and an optional next deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cadence {
    period: Duration,
    deadline: Option<Instant>,
}

impl Cadence {
    /// Creates a disarmed cadence. The period is clamped to
    /// [`MIN_INTERVAL`].
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period: clamp_interval(period),
            deadline: None,
        }
    }

    /// Returns the period between fires.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Returns the next deadline, or `None` when disarmed.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` while a deadline is scheduled.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// (Re)starts the cadence so that it next fires one period after `now`.
    ///
    /// Replaces any pending deadline, so re-arming never leaves two
    /// deadlines for the same timer.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    /// Cancels the pending deadline, if any.
    pub const fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` when the cadence is armed and its deadline has passed.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| deadline <= now)
    }

    /// Consumes a due deadline and schedules the next one on the original
    /// grid, skipping any periods that elapsed strictly before `now`.
    ///
    /// A grid point equal to `now` is still due, so a caller looping on
    /// `fire` sees it on the next iteration.
    ///
    /// Returns `true` when a deadline was consumed.
    pub fn fire(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline.filter(|deadline| *deadline <= now) else {
            return false;
        };

        let mut next = deadline + self.period;
        while next < now {
            next += self.period;
        }
        self.deadline = Some(next);
        true
    }
}
