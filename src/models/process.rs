//! Process (simulated job) model.
//!
//! A process is one simulated job: it becomes schedulable at its arrival
//! tick, needs `burst_time` ticks of CPU, and accumulates timing metrics
//! as the scheduler that owns it dispatches it.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | finish - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//!
//! Metrics are only authoritative once the process has finished.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

/// A simulated process and its accumulated metrics.
///
/// Created once per run from parsed input, mutated only by the scheduler
/// running it, and read-only afterwards.
///
/// # Time Representation
/// All times are integer ticks relative to the start of the simulation (t=0).
/// Unset times (`start_time`, `finish_time`, `response_time`) are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process name.
    pub name: String,
    /// Tick at which the process becomes schedulable.
    pub arrival_time: i64,
    /// Total CPU ticks required.
    pub burst_time: i64,
    /// CPU ticks still owed. Never increases; reaches 0 exactly once.
    pub remaining_burst_time: i64,
    /// Tick of first dispatch.
    pub start_time: Option<i64>,
    /// Tick at which the remaining burst reached 0.
    pub finish_time: Option<i64>,
    /// Ticks spent ready but not running (valid once finished).
    pub waiting_time: i64,
    /// Ticks from arrival to completion (valid once finished).
    pub turnaround_time: i64,
    /// Ticks from arrival to first dispatch.
    pub response_time: Option<i64>,
}

impl Process {
    /// Creates a new, never-dispatched process.
    pub fn new(name: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            name: name.into(),
            arrival_time,
            burst_time,
            remaining_burst_time: burst_time,
            start_time: None,
            finish_time: None,
            waiting_time: 0,
            turnaround_time: 0,
            response_time: None,
        }
    }

    /// Records the first dispatch. Later calls are ignored.
    pub fn set_start_time(&mut self, time: i64) {
        debug_assert!(
            time >= self.arrival_time,
            "process {} dispatched at {time} before arrival {}",
            self.name,
            self.arrival_time
        );
        if self.start_time.is_none() {
            self.start_time = Some(time);
        }
    }

    /// Records completion and recomputes the derived metrics.
    pub fn set_finish_time(&mut self, time: i64) {
        debug_assert_eq!(
            self.remaining_burst_time, 0,
            "process {} finished with burst left",
            self.name
        );
        self.finish_time = Some(time);
        self.update_metrics(time);
    }

    /// Recomputes turnaround, waiting and response time as of `current_time`.
    pub fn update_metrics(&mut self, current_time: i64) {
        self.turnaround_time = current_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
        if let Some(start) = self.start_time {
            self.response_time = Some(start - self.arrival_time);
        }
    }

    /// Consumes up to `ticks` of remaining burst. Returns the ticks actually used.
    pub fn execute(&mut self, ticks: i64) -> i64 {
        let used = ticks.clamp(0, self.remaining_burst_time);
        self.remaining_burst_time -= used;
        used
    }

    /// Whether the process has completed its burst.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finish_time.is_some()
    }

    /// Whether the process is schedulable at `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Ticks of CPU received so far.
    #[inline]
    pub fn executed_ticks(&self) -> i64 {
        self.burst_time - self.remaining_burst_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_process_is_unset() {
        let p = Process::new("P1", 3, 5);
        assert_eq!(p.name, "P1");
        assert_eq!(p.remaining_burst_time, 5);
        assert_eq!(p.start_time, None);
        assert_eq!(p.finish_time, None);
        assert_eq!(p.response_time, None);
        assert!(!p.is_finished());
        assert_eq!(p.executed_ticks(), 0);
    }

    #[test]
    fn test_start_time_set_once() {
        let mut p = Process::new("P1", 0, 5);
        p.set_start_time(2);
        p.set_start_time(4);
        assert_eq!(p.start_time, Some(2));
    }

    #[test]
    fn test_finish_updates_metrics() {
        let mut p = Process::new("P1", 2, 4);
        p.set_start_time(5);
        p.execute(4);
        p.set_finish_time(11);

        assert_eq!(p.finish_time, Some(11));
        assert_eq!(p.turnaround_time, 9);
        assert_eq!(p.waiting_time, 5);
        assert_eq!(p.response_time, Some(3));
        assert!(p.is_finished());
    }

    #[test]
    fn test_execute_clamps_to_remaining() {
        let mut p = Process::new("P1", 0, 3);
        assert_eq!(p.execute(2), 2);
        assert_eq!(p.execute(5), 1);
        assert_eq!(p.remaining_burst_time, 0);
        assert_eq!(p.execute(1), 0);
        assert_eq!(p.executed_ticks(), 3);
    }

    #[test]
    fn test_has_arrived() {
        let p = Process::new("P1", 4, 1);
        assert!(!p.has_arrived(3));
        assert!(p.has_arrived(4));
        assert!(p.has_arrived(10));
    }
}
