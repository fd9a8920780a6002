//! Frame math for one count-up run.
//!
//! `value = floor(target * min(elapsed / duration, 1))`, with the final frame
//! (elapsed >= duration) pinned to exactly `target`.

use std::iter::FusedIterator;

/// Value to publish for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameValue {
    /// Displayed integer for this frame.
    pub value: u32,
    /// True on the completing frame; no further frames are scheduled.
    pub finished: bool,
}

/// Compute the displayed value `elapsed_ms` into a run of `duration_ms`.
///
/// Negative or NaN elapsed time counts as zero.
pub fn frame_value(target: u32, elapsed_ms: f64, duration_ms: u32) -> FrameValue {
    let elapsed = elapsed_ms.max(0.0);
    let duration = f64::from(duration_ms);

    if elapsed >= duration {
        return FrameValue {
            value: target,
            finished: true,
        };
    }

    let fraction = (elapsed / duration).min(1.0);
    let value = (f64::from(target) * fraction).floor() as u32;
    FrameValue {
        value: value.min(target),
        finished: false,
    }
}

/// Lazy, terminating sequence of displayed values for one run.
///
/// The first timestamp becomes the run's start. The sequence ends after the
/// completing frame, or when the timestamps run out.
pub fn count_up<I>(target: u32, is_active: bool, duration_ms: u32, timestamps: I) -> CountUpFrames<I::IntoIter>
where
    I: IntoIterator<Item = f64>,
{
    CountUpFrames {
        timestamps: timestamps.into_iter(),
        target,
        duration_ms,
        start: None,
        last: 0,
        done: !is_active,
    }
}

/// Iterator returned by [`count_up`].
#[derive(Debug, Clone)]
pub struct CountUpFrames<I> {
    timestamps: I,
    target: u32,
    duration_ms: u32,
    start: Option<f64>,
    last: u32,
    done: bool,
}

impl<I> CountUpFrames<I> {
    /// Timestamp of the first frame, once one was seen.
    pub fn start_timestamp(&self) -> Option<f64> {
        self.start
    }
}

impl<I: Iterator<Item = f64>> Iterator for CountUpFrames<I> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.done {
            return None;
        }
        let Some(timestamp) = self.timestamps.next() else {
            self.done = true;
            return None;
        };

        let start = *self.start.get_or_insert(timestamp);
        let frame = frame_value(self.target, timestamp - start, self.duration_ms);
        self.last = self.last.max(frame.value);
        self.done = frame.finished;
        Some(self.last)
    }
}

impl<I: Iterator<Item = f64>> FusedIterator for CountUpFrames<I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn floors_intermediate_frames() {
        assert_eq!(frame_value(83, 500.0, 2000).value, 20);
        assert_eq!(frame_value(83, 1000.0, 2000).value, 41);
        assert_eq!(frame_value(83, 1500.0, 2000).value, 62);
        assert!(!frame_value(83, 1999.9, 2000).finished);
    }

    #[test]
    fn completing_frame_is_exact_target() {
        assert_eq!(
            frame_value(83, 2000.0, 2000),
            FrameValue {
                value: 83,
                finished: true
            }
        );
        assert_eq!(frame_value(7, 5000.0, 2000).value, 7);
    }

    #[test]
    fn negative_and_nan_elapsed_count_as_start() {
        assert_eq!(frame_value(50, -16.0, 2000).value, 0);
        assert_eq!(frame_value(50, f64::NAN, 2000).value, 0);
    }

    #[test]
    fn zero_target_finishes_at_zero() {
        let frames: Vec<u32> = count_up(0, true, 2000, [0.0, 1000.0, 2000.0, 3000.0]).collect();
        assert_eq!(frames, vec![0, 0, 0]);
    }

    #[test]
    fn sequence_uses_first_timestamp_as_start() {
        let mut frames = count_up(100, true, 1000, [5000.0, 5250.0, 6000.0]);
        assert_eq!(frames.next(), Some(0));
        assert_eq!(frames.start_timestamp(), Some(5000.0));
        assert_eq!(frames.next(), Some(25));
        assert_eq!(frames.next(), Some(100));
        assert_eq!(frames.next(), None);
    }

    #[test]
    fn inactive_sequence_is_empty() {
        assert_eq!(count_up(55, false, 2000, [0.0, 16.0]).count(), 0);
    }

    #[test]
    fn stops_when_timestamps_run_out() {
        let frames: Vec<u32> = count_up(55, true, 2000, [0.0, 1000.0]).collect();
        assert_eq!(frames, vec![0, 27]);
    }

    #[test]
    fn out_of_order_timestamps_never_decrease_value() {
        let frames: Vec<u32> = count_up(100, true, 1000, [0.0, 600.0, 300.0, 900.0]).collect();
        assert_eq!(frames, vec![0, 60, 60, 90]);
    }

    #[test]
    fn non_decreasing_for_every_target() {
        let timestamps: Vec<f64> = (0..=130).map(|i| f64::from(i) * 16.67).collect();
        for target in 0..=100 {
            let frames: Vec<u32> = count_up(target, true, 2000, timestamps.clone()).collect();
            assert!(frames.windows(2).all(|w| w[0] <= w[1]), "target {target}");
            assert_eq!(frames.last().copied(), Some(target), "target {target}");
        }
    }
}
