//! Progress reporting for Monte Carlo runs.
//!
//! The driver calls a single [`ProgressSink`] synchronously between trials.
//! A sink that blocks delays every remaining trial, so sinks should hand
//! work off quickly (push to a channel, emit an event) rather than wait.
//!
//! Returning [`Progress::Cancel`] stops the run at the next trial boundary.

/// What the driver should do after a progress report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    Continue,
    Cancel,
}

/// Receives `(completed, total)` at a fixed cadence.
pub trait ProgressSink {
    fn report(&mut self, completed: u32, total: u32) -> Progress;
}

impl<F> ProgressSink for F
where
    F: FnMut(u32, u32) -> Progress,
{
    fn report(&mut self, completed: u32, total: u32) -> Progress {
        self(completed, total)
    }
}

/// Sink that writes each checkpoint to the `log` facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn report(&mut self, completed: u32, total: u32) -> Progress {
        log::info!(
            "Simulated {}/{} matches ({:.0}%)",
            completed,
            total,
            f64::from(completed) / f64::from(total.max(1)) * 100.0
        );
        Progress::Continue
    }
}

/// When to report: every `total / steps` trials (at least every trial),
/// and always on the last one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressCadence {
    total: u32,
    interval: u32,
}

impl ProgressCadence {
    pub fn new(total: u32, steps: u32) -> Self {
        Self {
            total,
            interval: (total / steps.max(1)).max(1),
        }
    }

    /// Trials between checkpoints.
    #[must_use]
    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Should `completed` trials trigger a report?
    #[must_use]
    pub fn is_checkpoint(&self, completed: u32) -> bool {
        completed > 0 && (completed % self.interval == 0 || completed == self.total)
    }
}

/// Forwards checkpoints to an optional sink, dropping any that would go
/// backwards. Once the sink cancels it is never called again.
pub(crate) struct ProgressReporter<'a> {
    sink: Option<&'a mut dyn ProgressSink>,
    total: u32,
    last: u32,
    cancelled: bool,
}

impl<'a> ProgressReporter<'a> {
    pub(crate) fn new(sink: Option<&'a mut dyn ProgressSink>, total: u32) -> Self {
        Self {
            sink,
            total,
            last: 0,
            cancelled: false,
        }
    }

    pub(crate) fn checkpoint(&mut self, completed: u32) -> Progress {
        if self.cancelled {
            return Progress::Cancel;
        }
        if completed <= self.last {
            return Progress::Continue;
        }
        self.last = completed;
        log::trace!("progress {}/{}", completed, self.total);

        let progress = match self.sink.as_mut() {
            Some(sink) => sink.report(completed, self.total),
            None => Progress::Continue,
        };
        if progress == Progress::Cancel {
            self.cancelled = true;
        }
        progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cadence_tenths() {
        let cadence = ProgressCadence::new(1000, 10);
        assert_eq!(cadence.interval(), 100);

        let checkpoints: Vec<_> = (1..=1000).filter(|&d| cadence.is_checkpoint(d)).collect();
        assert_eq!(checkpoints.len(), 10);
        assert_eq!(checkpoints[0], 100);
        assert_eq!(*checkpoints.last().unwrap(), 1000);
    }

    #[test]
    fn test_cadence_small_runs_report_every_trial() {
        let cadence = ProgressCadence::new(5, 10);
        assert_eq!(cadence.interval(), 1);
        assert!((1..=5).all(|d| cadence.is_checkpoint(d)));
    }

    #[test]
    fn test_cadence_always_reports_last() {
        let cadence = ProgressCadence::new(1005, 10);
        assert!(cadence.is_checkpoint(1005));
        assert!(!cadence.is_checkpoint(1004));
    }

    #[test]
    fn test_cadence_zero_steps() {
        let cadence = ProgressCadence::new(50, 0);
        assert_eq!(cadence.interval(), 50);
        assert!(cadence.is_checkpoint(50));
    }

    #[test]
    fn test_reporter_is_monotonic() {
        let mut seen = Vec::new();
        let mut sink = |done: u32, _total: u32| {
            seen.push(done);
            Progress::Continue
        };

        let mut reporter = ProgressReporter::new(Some(&mut sink), 400);
        reporter.checkpoint(200);
        reporter.checkpoint(100);
        reporter.checkpoint(300);
        reporter.checkpoint(300);
        reporter.checkpoint(400);
        drop(reporter);

        assert_eq!(seen, vec![200, 300, 400]);
    }

    #[test]
    fn test_reporter_stops_after_cancel() {
        let mut calls = Vec::new();
        let mut sink = |done: u32, _total: u32| {
            calls.push(done);
            Progress::Cancel
        };

        let mut reporter = ProgressReporter::new(Some(&mut sink), 1000);
        assert_eq!(reporter.checkpoint(100), Progress::Cancel);
        assert_eq!(reporter.checkpoint(200), Progress::Cancel);
        assert_eq!(reporter.checkpoint(1000), Progress::Cancel);
        drop(reporter);

        assert_eq!(calls, vec![100]);
    }

    #[test]
    fn test_closure_can_cancel() {
        let mut sink = |done: u32, _total: u32| {
            if done >= 2 {
                Progress::Cancel
            } else {
                Progress::Continue
            }
        };

        assert_eq!(sink.report(1, 10), Progress::Continue);
        assert_eq!(sink.report(2, 10), Progress::Cancel);
    }
}
