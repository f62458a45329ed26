use std::time::{Duration, Instant};

/// Wall-clock cutoff for one move decision.
///
/// Created once per turn and passed by value into every search call. Checking
/// it is a single clock read, cheap enough to do at every node.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    budget: Option<Duration>,
}

impl Deadline {
    /// Deadline `budget` from now
    pub fn new(budget: Duration) -> Self {
        Self::starting_at(Instant::now(), budget)
    }

    pub fn starting_at(start: Instant, budget: Duration) -> Self {
        Self {
            start,
            budget: Some(budget),
        }
    }

    /// A deadline that never expires
    pub fn unbounded() -> Self {
        Self {
            start: Instant::now(),
            budget: None,
        }
    }

    #[inline]
    pub fn expired(&self) -> bool {
        match self.budget {
            Some(budget) => self.start.elapsed() >= budget,
            None => false,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
