//! `requestAnimationFrame`-backed frame scheduler.

use countup::{FrameCallback, FrameHandle, FrameScheduler, SchedulerError};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Schedules count-up frames on the browser's repaint loop.
///
/// Each request wraps its callback in a one-shot closure that JS frees after
/// it runs. A request cancelled before it fires keeps its closure allocated,
/// one per cancelled frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Result<FrameHandle, SchedulerError> {
        let window =
            web_sys::window().ok_or_else(|| SchedulerError::Unavailable("no window".into()))?;

        let closure = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        window
            .request_animation_frame(closure.unchecked_ref())
            .map(FrameHandle)
            .map_err(|err| SchedulerError::Unavailable(format!("{err:?}")))
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.cancel_animation_frame(handle.0) {
            tracing::warn!(handle = handle.0, error = ?err, "cancelAnimationFrame failed");
        }
    }
}
