//! Single-slot announce channel between a player and the match runner.

use std::sync::Arc;

use parking_lot::Mutex;

#[derive(Debug)]
struct SlotState<A> {
    latest: Option<A>,
    announcements: usize,
    closed: bool,
}

/// Holds the most recent action a player announced for the current turn.
///
/// Cloning yields another handle to the same slot. Each `put` overwrites the
/// previous value; once the runner calls [`ActionSlot::close`] further puts
/// are dropped, so announcements after the deadline never count.
#[derive(Debug)]
pub struct ActionSlot<A> {
    inner: Arc<Mutex<SlotState<A>>>,
}

impl<A> Clone for ActionSlot<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: Copy> Default for ActionSlot<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Copy> ActionSlot<A> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SlotState {
                latest: None,
                announcements: 0,
                closed: false,
            })),
        }
    }

    /// Announce `action`. Returns `false` if the slot is already closed.
    pub fn put(&self, action: A) -> bool {
        let mut state = self.inner.lock();
        if state.closed {
            return false;
        }
        state.latest = Some(action);
        state.announcements += 1;
        true
    }

    /// The authoritative action: the last one accepted
    pub fn latest(&self) -> Option<A> {
        self.inner.lock().latest
    }

    /// Number of accepted announcements
    pub fn announcements(&self) -> usize {
        self.inner.lock().announcements
    }

    pub fn close(&self) {
        self.inner.lock().closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().closed
    }
}
