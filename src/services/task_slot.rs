//! Single-flight task ownership.
//!
//! A [`TaskSlot`] owns at most one spawned task. Installing a new task aborts the previous
//! one, so only the latest intent ever has live work behind it. [`Debouncer`] builds a
//! cancellable delayed action on top of a slot.

use std::future::Future;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::AbortHandle;

struct SlotEntry {
    session: u64,
    handle: AbortHandle,
}

/// Holds one task handle, tagged with the session that started it
#[derive(Default)]
pub struct TaskSlot {
    current: Mutex<Option<SlotEntry>>,
}

impl TaskSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns `task` on the current runtime and installs it for `session`
    pub fn spawn<F>(&self, session: u64, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(task);
        self.install(session, handle.abort_handle());
    }

    /// Installs `handle` for `session`, aborting the task it replaces.
    ///
    /// When the slot already belongs to a newer session the incoming task is the stale one
    /// and is aborted instead.
    pub fn install(&self, session: u64, handle: AbortHandle) {
        let mut current = self.current.lock();

        if let Some(entry) = current.as_ref() {
            if entry.session > session {
                handle.abort();
                return;
            }
        }

        if let Some(previous) = current.replace(SlotEntry { session, handle }) {
            previous.handle.abort();
        }
    }

    /// Aborts the held task if it belongs to a session older than `session`.
    ///
    /// Returns whether a task was aborted. Aborting an already finished task is a no-op.
    pub fn cancel_before(&self, session: u64) -> bool {
        let mut current = self.current.lock();
        match current.as_ref() {
            Some(entry) if entry.session < session => {
                if let Some(entry) = current.take() {
                    entry.handle.abort();
                }
                true
            }
            _ => false,
        }
    }

    /// Session of the held task while it is still running
    pub fn running_session(&self) -> Option<u64> {
        self.current
            .lock()
            .as_ref()
            .filter(|entry| !entry.handle.is_finished())
            .map(|entry| entry.session)
    }
}

impl Drop for TaskSlot {
    fn drop(&mut self) {
        if let Some(entry) = self.current.get_mut().take() {
            entry.handle.abort();
        }
    }
}

/// Delays an action until input has been quiet for a fixed interval.
///
/// Each `schedule` replaces and cancels the pending one.
pub struct Debouncer {
    delay: Duration,
    slot: TaskSlot,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            slot: TaskSlot::new(),
        }
    }

    /// Runs `action` once the delay elapses, unless superseded first
    pub fn schedule<F>(&self, session: u64, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        self.slot.spawn(session, async move {
            tokio::time::sleep(delay).await;
            action.await;
        });
    }

    pub fn cancel_before(&self, session: u64) -> bool {
        self.slot.cancel_before(session)
    }

    /// Whether an action is still waiting out its delay
    pub fn is_pending(&self) -> bool {
        self.slot.running_session().is_some()
    }
}
