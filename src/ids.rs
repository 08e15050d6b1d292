// 🔢 Student identifiers - explicit generator owned by the registry
//
// Ids are plain integers shown to the user and typed back in, so they stay
// short: the random generator starts somewhere in the five-digit range and
// counts up from there.

use tracing::error;

/// Lowest random starting point (inclusive)
pub const RANDOM_START_MIN: u64 = 10_000;

/// Highest random starting point (inclusive)
pub const RANDOM_START_MAX: u64 = 99_999;

/// Source of student ids.
///
/// Every id handed out by one source must differ from every other id it has
/// handed out. `None` means the source has nothing unique left to give.
pub trait IdSource {
    fn next_id(&mut self) -> Option<u64>;
}

/// Monotonic counter
#[derive(Debug, Clone)]
pub struct SequentialIds {
    /// `None` once `u64::MAX` has been issued
    next: Option<u64>,
}

impl SequentialIds {
    /// Deterministic sequence starting at `start`
    pub fn starting_at(start: u64) -> Self {
        SequentialIds { next: Some(start) }
    }

    /// Random five-digit starting point, taken from a v4 UUID
    pub fn random() -> Self {
        let span = (RANDOM_START_MAX - RANDOM_START_MIN + 1) as u128;
        let offset = (uuid::Uuid::new_v4().as_u128() % span) as u64;
        Self::starting_at(RANDOM_START_MIN + offset)
    }

    /// Id the next call to `next_id` will return, `None` when exhausted
    pub fn peek(&self) -> Option<u64> {
        self.next
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::random()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> Option<u64> {
        let Some(id) = self.next else {
            error!("student id space exhausted");
            return None;
        };
        self.next = id.checked_add(1);
        Some(id)
    }
}
