//! Per-frame scheduling seam.
//!
//! A host provides "run this before the next repaint" plus cancellation. In
//! the browser that is `requestAnimationFrame` / `cancelAnimationFrame`; in
//! tests it is [`crate::testing::ManualScheduler`].

use crate::error::SchedulerError;

/// Callback invoked with the frame timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Opaque id of a scheduled frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Host primitive for deferring work to the next rendered frame.
///
/// Implementations must not invoke the callback synchronously from
/// `request_frame`, and a cancelled callback must never run.
pub trait FrameScheduler {
    /// Queue `callback` for the next frame.
    fn request_frame(&self, callback: FrameCallback) -> Result<FrameHandle, SchedulerError>;

    /// Drop a pending request. Unknown or already-fired handles are ignored.
    fn cancel_frame(&self, handle: FrameHandle);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for std::rc::Rc<S> {
    fn request_frame(&self, callback: FrameCallback) -> Result<FrameHandle, SchedulerError> {
        (**self).request_frame(callback)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        (**self).cancel_frame(handle)
    }
}
