//! The clock abstraction: a monotonic ordinal paired with wall-clock time.
//!
//! Every record in the registry is stamped with a [`Moment`]. The ordinal
//! is the authoritative component (analogous to a block height); the
//! wall-clock millis are an approximation for human consumption.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Assumed fixed ordinal-to-time ratio, in milliseconds per ordinal unit.
///
/// Used to derive advisory wall-clock estimates from ordinal deadlines.
/// The real ratio can drift, so derived values are never authoritative.
pub const MILLIS_PER_ORDINAL: i64 = 5_000;

/// A dual ordinal/wall-clock timestamp pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Moment {
    /// Monotonic call-ordering counter (height).
    pub ordinal: u64,
    /// Approximate wall-clock time in Unix milliseconds.
    pub unix_millis: i64,
}

impl Moment {
    /// Create a moment from its parts.
    pub const fn new(ordinal: u64, unix_millis: i64) -> Self {
        Self {
            ordinal,
            unix_millis,
        }
    }

    /// Project the advisory wall-clock time of a future ordinal, assuming
    /// the fixed [`MILLIS_PER_ORDINAL`] ratio holds from now on.
    ///
    /// Widened to `i128` internally; ordinals far enough out to exceed
    /// the `i64` millis range clamp to `i64::MAX` rather than wrapping.
    pub fn projected_millis(&self, target_ordinal: u64) -> i64 {
        let delta = target_ordinal.saturating_sub(self.ordinal) as i128;
        let projected = self.unix_millis as i128 + delta * MILLIS_PER_ORDINAL as i128;
        projected.clamp(i64::MIN as i128, i64::MAX as i128) as i64
    }
}

/// Read-only source of the current [`Moment`].
///
/// Implementations must be monotonic in the ordinal: two successive reads
/// never observe a decreasing value.
pub trait Clock: Send + Sync {
    /// The current moment.
    fn now(&self) -> Moment;
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> Moment {
        (**self).now()
    }
}

/// Clock backed by the system wall clock.
///
/// The ordinal is derived from elapsed wall-clock time since construction,
/// quantized by [`MILLIS_PER_ORDINAL`].
#[derive(Debug)]
pub struct SystemClock {
    genesis_millis: i64,
}

impl SystemClock {
    /// Create a system clock anchored at the current time (ordinal 0).
    pub fn new() -> Self {
        Self {
            genesis_millis: unix_millis(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Moment {
        let millis = unix_millis();
        let elapsed = (millis - self.genesis_millis).max(0);
        Moment {
            ordinal: (elapsed / MILLIS_PER_ORDINAL) as u64,
            unix_millis: millis,
        }
    }
}

/// Manually driven clock for tests and for embedders that track an
/// external height.
#[derive(Debug, Default)]
pub struct ManualClock {
    ordinal: AtomicU64,
    unix_millis: AtomicI64,
}

impl ManualClock {
    /// Create a manual clock starting at the given moment.
    pub fn starting_at(moment: Moment) -> Self {
        Self {
            ordinal: AtomicU64::new(moment.ordinal),
            unix_millis: AtomicI64::new(moment.unix_millis),
        }
    }

    /// Set the current moment. The ordinal must not move backwards;
    /// callers are responsible for monotonicity.
    pub fn set(&self, moment: Moment) {
        self.ordinal.store(moment.ordinal, Ordering::SeqCst);
        self.unix_millis.store(moment.unix_millis, Ordering::SeqCst);
    }

    /// Advance the ordinal by `n`, moving wall-clock time along at the
    /// assumed fixed ratio.
    pub fn advance(&self, n: u64) {
        self.ordinal.fetch_add(n, Ordering::SeqCst);
        self.unix_millis
            .fetch_add(n as i64 * MILLIS_PER_ORDINAL, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Moment {
        Moment {
            ordinal: self.ordinal.load(Ordering::SeqCst),
            unix_millis: self.unix_millis.load(Ordering::SeqCst),
        }
    }
}

/// Get current wall-clock time in Unix milliseconds.
fn unix_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}
