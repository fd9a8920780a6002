//! Cancellable count-up state machine.
//!
//! One [`CountUpAnimator`] owns the animation of one displayed number. It
//! reacts to two inputs, `active` and `target`, and owns at most one pending
//! frame request. Every exit from a run (deactivation, a new target, dispose
//! or drop) cancels that request before anything else happens, so a frame
//! callback from an old run never publishes.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::AnimationConfig;
use crate::frame::{FrameHandle, FrameScheduler};
use crate::progress::frame_value;

/// Externally visible phase of an animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// No run in flight. Initial state, and the state after deactivation.
    Idle,
    /// A run is waiting for (or processing) frames.
    Running,
    /// The last run completed and published its exact target.
    Done,
    /// Torn down; all further input is ignored.
    Disposed,
}

#[derive(Debug)]
struct RunState {
    state: AnimationState,
    active: bool,
    target: u32,
    display: u32,
    start: Option<f64>,
    pending: Option<FrameHandle>,
    /// Bumped whenever a run ends; frame callbacks carry the value they were
    /// scheduled under.
    generation: u64,
}

struct Shared<S> {
    scheduler: S,
    config: AnimationConfig,
    publish: Box<dyn Fn(u32)>,
    run: RefCell<RunState>,
}

/// Drives a displayed integer from 0 to its target over
/// [`AnimationConfig::duration_ms`] once activated.
///
/// Single-threaded: the animator and its frame callbacks share state through
/// `Rc`, matching the browser's one-thread frame loop.
pub struct CountUpAnimator<S: FrameScheduler + 'static> {
    shared: Rc<Shared<S>>,
}

impl<S: FrameScheduler + 'static> CountUpAnimator<S> {
    /// Create an idle animator showing 0. `publish` receives every new
    /// displayed value.
    pub fn new(
        scheduler: S,
        config: AnimationConfig,
        target: u32,
        publish: impl Fn(u32) + 'static,
    ) -> Self {
        Self {
            shared: Rc::new(Shared {
                scheduler,
                config,
                publish: Box::new(publish),
                run: RefCell::new(RunState {
                    state: AnimationState::Idle,
                    active: false,
                    target,
                    display: 0,
                    start: None,
                    pending: None,
                    generation: 0,
                }),
            }),
        }
    }

    /// Feed the visibility signal.
    ///
    /// false -> true starts a fresh run from 0. true -> false cancels the
    /// run in flight and leaves the displayed value where it stopped.
    pub fn set_active(&self, active: bool) {
        {
            let mut run = self.shared.run.borrow_mut();
            if run.state == AnimationState::Disposed || run.active == active {
                return;
            }
            run.active = active;
        }

        if active {
            tracing::debug!("count-up activated");
            self.restart();
        } else {
            tracing::debug!("count-up deactivated");
            self.stop(AnimationState::Idle);
        }
    }

    /// Change the value to count toward.
    ///
    /// While active this cancels the current run and starts a new one from 0.
    pub fn set_target(&self, target: u32) {
        let active = {
            let mut run = self.shared.run.borrow_mut();
            if run.state == AnimationState::Disposed || run.target == target {
                return;
            }
            run.target = target;
            run.active
        };

        tracing::debug!(goal = target, "count-up target changed");
        if active {
            self.restart();
        } else {
            self.stop(AnimationState::Idle);
        }
    }

    /// Tear down: cancel any pending frame and ignore all later input.
    /// Idempotent; also runs on drop.
    pub fn dispose(&self) {
        if self.state() == AnimationState::Disposed {
            return;
        }
        self.stop(AnimationState::Disposed);
    }

    /// Last published value.
    pub fn display_value(&self) -> u32 {
        self.shared.run.borrow().display
    }

    /// Value the current or next run counts toward.
    pub fn target(&self) -> u32 {
        self.shared.run.borrow().target
    }

    /// Current visibility input.
    pub fn is_active(&self) -> bool {
        self.shared.run.borrow().active
    }

    /// Current phase.
    pub fn state(&self) -> AnimationState {
        self.shared.run.borrow().state
    }

    /// Config this animator was built with.
    pub fn config(&self) -> &AnimationConfig {
        &self.shared.config
    }

    fn restart(&self) {
        self.stop(AnimationState::Running);
        let generation = {
            let mut run = self.shared.run.borrow_mut();
            run.start = None;
            run.display = 0;
            tracing::debug!(goal = run.target, generation = run.generation, "count-up run started");
            run.generation
        };
        schedule(&self.shared, generation);
    }

    /// End the current run (if any) and enter `next`.
    fn stop(&self, next: AnimationState) {
        let pending = {
            let mut run = self.shared.run.borrow_mut();
            run.generation += 1;
            run.state = next;
            run.pending.take()
        };
        if let Some(handle) = pending {
            tracing::debug!(handle = handle.0, "count-up frame cancelled");
            self.shared.scheduler.cancel_frame(handle);
        }
    }
}

impl<S: FrameScheduler + 'static> Drop for CountUpAnimator<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<S: FrameScheduler + 'static> std::fmt::Debug for CountUpAnimator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountUpAnimator")
            .field("config", &self.shared.config)
            .field("run", &self.shared.run.borrow())
            .finish()
    }
}

/// Request the next frame for run `generation`.
fn schedule<S: FrameScheduler + 'static>(shared: &Rc<Shared<S>>, generation: u64) {
    let weak: Weak<Shared<S>> = Rc::downgrade(shared);
    let requested = shared.scheduler.request_frame(Box::new(move |timestamp| {
        if let Some(shared) = weak.upgrade() {
            on_frame(&shared, generation, timestamp);
        }
    }));

    match requested {
        Ok(handle) => {
            let mut run = shared.run.borrow_mut();
            if run.generation == generation && run.state == AnimationState::Running {
                run.pending = Some(handle);
            } else {
                drop(run);
                shared.scheduler.cancel_frame(handle);
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "frame scheduling failed; jumping to target");
            let target = {
                let mut run = shared.run.borrow_mut();
                if run.generation != generation || run.state != AnimationState::Running {
                    return;
                }
                run.state = AnimationState::Done;
                run.display = run.target;
                run.target
            };
            (shared.publish)(target);
        }
    }
}

fn on_frame<S: FrameScheduler + 'static>(shared: &Rc<Shared<S>>, generation: u64, timestamp: f64) {
    let (value, finished) = {
        let mut run = shared.run.borrow_mut();
        if run.generation != generation || run.state != AnimationState::Running {
            return;
        }
        run.pending = None;

        let start = *run.start.get_or_insert(timestamp);
        let frame = frame_value(run.target, timestamp - start, shared.config.duration_ms);
        run.display = run.display.max(frame.value);
        if frame.finished {
            run.state = AnimationState::Done;
        }
        (run.display, frame.finished)
    };

    tracing::trace!(value, finished, "count-up frame");
    (shared.publish)(value);

    if finished {
        tracing::debug!(value, "count-up run completed");
    } else {
        schedule(shared, generation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ManualScheduler;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    type Published = Rc<RefCell<Vec<u32>>>;

    fn animator(target: u32) -> (CountUpAnimator<Rc<ManualScheduler>>, Rc<ManualScheduler>, Published) {
        let scheduler = Rc::new(ManualScheduler::new());
        let published: Published = Rc::new(RefCell::new(Vec::new()));
        let sink = published.clone();
        let animator = CountUpAnimator::new(
            scheduler.clone(),
            AnimationConfig::default(),
            target,
            move |v| sink.borrow_mut().push(v),
        );
        (animator, scheduler, published)
    }

    #[test]
    fn idle_until_activated() {
        let (animator, scheduler, published) = animator(83);
        scheduler.advance_to(0.0);
        assert_eq!(animator.state(), AnimationState::Idle);
        assert_eq!(scheduler.requested(), 0);
        assert!(published.borrow().is_empty());
    }

    #[test]
    fn activation_schedules_one_frame() {
        let (animator, scheduler, _) = animator(83);
        animator.set_active(true);
        assert_eq!(animator.state(), AnimationState::Running);
        assert_eq!(scheduler.pending_count(), 1);

        animator.set_active(true);
        assert_eq!(scheduler.pending_count(), 1);
        assert_eq!(scheduler.requested(), 1);
    }

    #[test]
    fn completes_with_exact_target_and_stops_scheduling() {
        let (animator, scheduler, published) = animator(83);
        animator.set_active(true);
        for t in [100.0, 600.0, 2100.0] {
            scheduler.advance_to(t);
        }
        assert_eq!(*published.borrow(), vec![0, 20, 83]);
        assert_eq!(animator.state(), AnimationState::Done);
        assert_eq!(animator.display_value(), 83);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn deactivation_cancels_pending_frame() {
        let (animator, scheduler, published) = animator(41);
        animator.set_active(true);
        scheduler.advance_to(0.0);
        animator.set_active(false);

        assert_eq!(scheduler.cancelled().len(), 1);
        assert_eq!(scheduler.pending_count(), 0);
        scheduler.advance_to(500.0);
        assert_eq!(*published.borrow(), vec![0]);
        assert_eq!(animator.state(), AnimationState::Idle);
    }

    #[test]
    fn target_change_while_active_restarts_from_zero() {
        let (animator, scheduler, published) = animator(80);
        animator.set_active(true);
        scheduler.advance_to(0.0);
        scheduler.advance_to(1000.0);
        animator.set_target(20);

        assert_eq!(animator.display_value(), 0);
        assert_eq!(scheduler.cancelled().len(), 1);
        scheduler.advance_to(5000.0);
        scheduler.advance_to(6000.0);
        scheduler.advance_to(7000.0);
        assert_eq!(*published.borrow(), vec![0, 40, 0, 10, 20]);
    }

    #[test]
    fn target_change_while_inactive_is_recorded_only() {
        let (animator, scheduler, published) = animator(80);
        animator.set_target(30);
        assert_eq!(animator.target(), 30);
        assert_eq!(scheduler.requested(), 0);
        assert!(published.borrow().is_empty());
    }

    #[test]
    fn same_target_is_noop() {
        let (animator, scheduler, _) = animator(80);
        animator.set_active(true);
        animator.set_target(80);
        assert!(scheduler.cancelled().is_empty());
        assert_eq!(scheduler.requested(), 1);
    }

    #[test]
    fn target_change_after_done_runs_again() {
        let (animator, scheduler, published) = animator(10);
        animator.set_active(true);
        scheduler.advance_to(0.0);
        scheduler.advance_to(2000.0);
        assert_eq!(animator.state(), AnimationState::Done);

        animator.set_target(20);
        assert_eq!(animator.state(), AnimationState::Running);
        scheduler.advance_to(3000.0);
        scheduler.advance_to(5000.0);
        assert_eq!(*published.borrow(), vec![0, 10, 0, 20]);
    }

    #[test]
    fn dispose_is_idempotent_and_cancels_once() {
        let (animator, scheduler, _) = animator(55);
        animator.set_active(true);
        scheduler.advance_to(0.0);
        let pending = scheduler.pending_handles();
        assert_eq!(pending.len(), 1);

        animator.dispose();
        animator.dispose();
        drop(animator);

        assert_eq!(scheduler.cancel_calls_for(pending[0]), 1);
        assert_eq!(scheduler.cancel_calls().len(), 1);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn disposed_animator_ignores_input() {
        let (animator, scheduler, published) = animator(55);
        animator.dispose();
        animator.set_active(true);
        animator.set_target(10);
        scheduler.advance_to(0.0);
        assert_eq!(animator.state(), AnimationState::Disposed);
        assert_eq!(scheduler.requested(), 0);
        assert!(published.borrow().is_empty());
    }

    #[test]
    fn scheduler_failure_jumps_to_target() {
        let (animator, scheduler, published) = animator(71);
        scheduler.fail_requests(true);
        animator.set_active(true);
        assert_eq!(animator.state(), AnimationState::Done);
        assert_eq!(*published.borrow(), vec![71]);
    }

    #[test]
    fn publish_reentering_animator_does_not_leave_stale_frame() {
        let scheduler = Rc::new(ManualScheduler::new());
        let slot: Rc<RefCell<Option<Rc<CountUpAnimator<Rc<ManualScheduler>>>>>> =
            Rc::new(RefCell::new(None));
        let hook = slot.clone();
        let animator = Rc::new(CountUpAnimator::new(
            scheduler.clone(),
            AnimationConfig::default(),
            50,
            move |v| {
                if v >= 25 {
                    if let Some(a) = hook.borrow().as_ref() {
                        a.set_active(false);
                    }
                }
            },
        ));
        *slot.borrow_mut() = Some(animator.clone());

        animator.set_active(true);
        scheduler.advance_to(0.0);
        scheduler.advance_to(1000.0);

        assert_eq!(animator.state(), AnimationState::Idle);
        assert_eq!(scheduler.pending_count(), 0);
        slot.borrow_mut().take();
    }
}
