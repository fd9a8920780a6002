//! Deterministic frame scheduler.
//!
//! [`ManualScheduler`] queues callbacks like a browser frame loop, but frames
//! only happen when the caller says so. Callbacks requested while a frame is
//! being processed run on the following frame.

use std::cell::{Cell, RefCell};

use crate::error::SchedulerError;
use crate::frame::{FrameCallback, FrameHandle, FrameScheduler};

/// Scheduler driven by explicit [`ManualScheduler::advance_to`] calls.
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<Vec<(FrameHandle, FrameCallback)>>,
    next_id: Cell<i32>,
    requested: Cell<usize>,
    cancelled: RefCell<Vec<FrameHandle>>,
    cancel_calls: RefCell<Vec<FrameHandle>>,
    fail: Cell<bool>,
}

impl ManualScheduler {
    /// Empty scheduler; handles start at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver one frame at `timestamp` to every callback queued so far.
    /// Returns how many callbacks ran.
    pub fn advance_to(&self, timestamp: f64) -> usize {
        let due = std::mem::take(&mut *self.queue.borrow_mut());
        let fired = due.len();
        for (_, callback) in due {
            callback(timestamp);
        }
        fired
    }

    /// Make every later `request_frame` fail with [`SchedulerError::Unavailable`].
    pub fn fail_requests(&self, fail: bool) {
        self.fail.set(fail);
    }

    /// Total successful `request_frame` calls.
    pub fn requested(&self) -> usize {
        self.requested.get()
    }

    /// Callbacks waiting for the next frame.
    pub fn pending_count(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Handles passed to `cancel_frame` that were still pending, in order.
    pub fn cancelled(&self) -> Vec<FrameHandle> {
        self.cancelled.borrow().clone()
    }

    /// Every `cancel_frame` call, in order, including repeats and handles
    /// that were no longer pending.
    pub fn cancel_calls(&self) -> Vec<FrameHandle> {
        self.cancel_calls.borrow().clone()
    }

    /// How many times `cancel_frame` was called with `handle`.
    pub fn cancel_calls_for(&self, handle: FrameHandle) -> usize {
        self.cancel_calls.borrow().iter().filter(|h| **h == handle).count()
    }

    /// Handles waiting for the next frame, in request order.
    pub fn pending_handles(&self) -> Vec<FrameHandle> {
        self.queue.borrow().iter().map(|(h, _)| *h).collect()
    }

    /// Whether `handle` is still waiting to fire.
    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.queue.borrow().iter().any(|(h, _)| *h == handle)
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Result<FrameHandle, SchedulerError> {
        if self.fail.get() {
            return Err(SchedulerError::Unavailable("manual scheduler set to fail".into()));
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.requested.set(self.requested.get() + 1);

        let handle = FrameHandle(id);
        self.queue.borrow_mut().push((handle, callback));
        Ok(handle)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.cancel_calls.borrow_mut().push(handle);
        let mut queue = self.queue.borrow_mut();
        if let Some(pos) = queue.iter().position(|(h, _)| *h == handle) {
            queue.remove(pos);
            self.cancelled.borrow_mut().push(handle);
        }
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("pending", &self.pending_count())
            .field("requested", &self.requested.get())
            .field("cancelled", &self.cancelled.borrow().len())
            .field("cancel_calls", &self.cancel_calls.borrow().len())
            .finish()
    }
}
