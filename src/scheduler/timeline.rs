//! Per-tick event buffering and arrival admission.
//!
//! Policies record events in whatever order their control flow produces
//! them (a finish detected mid-slice, arrivals discovered while a span
//! runs). The [`Timeline`] buckets them by tick and flushes each bucket
//! in a fixed sub-order:
//!
//! 1. arrivals (in admission order)
//! 2. selection
//! 3. finish
//! 4. idle
//!
//! Buckets are created on first use, so memory follows the number of
//! events rather than the horizon. Tick `run_for` only ever holds finish
//! events landing exactly on the horizon.

use std::collections::{BTreeMap, VecDeque};

use crate::models::{Event, EventLog, Process};

#[derive(Debug, Default, Clone)]
struct TickEvents {
    arrivals: Vec<String>,
    selected: Option<(String, i64)>,
    finished: Option<String>,
    idle: bool,
}

/// Event buffer covering ticks `[0, run_for]`.
#[derive(Debug, Clone)]
pub struct Timeline {
    run_for: i64,
    ticks: BTreeMap<i64, TickEvents>,
}

impl Timeline {
    /// Creates an empty timeline for a run of `run_for` ticks.
    pub fn new(run_for: i64) -> Self {
        Self {
            run_for,
            ticks: BTreeMap::new(),
        }
    }

    /// Simulation horizon.
    #[inline]
    pub fn run_for(&self) -> i64 {
        self.run_for
    }

    fn slot(&mut self, time: i64) -> &mut TickEvents {
        debug_assert!(
            (0..=self.run_for).contains(&time),
            "tick {time} outside [0, {}]",
            self.run_for
        );
        self.ticks.entry(time).or_default()
    }

    /// Number of ticks holding at least one event.
    pub fn occupied_ticks(&self) -> usize {
        self.ticks.len()
    }

    /// Records an arrival.
    pub fn arrived(&mut self, time: i64, process: &str) {
        self.slot(time).arrivals.push(process.to_string());
    }

    /// Records a dispatch with `burst` ticks remaining.
    pub fn selected(&mut self, time: i64, process: &str, burst: i64) {
        let slot = self.slot(time);
        debug_assert!(slot.selected.is_none(), "two selections at tick {time}");
        slot.selected = Some((process.to_string(), burst));
    }

    /// Records a completion.
    pub fn finished(&mut self, time: i64, process: &str) {
        let slot = self.slot(time);
        debug_assert!(slot.finished.is_none(), "two finishes at tick {time}");
        slot.finished = Some(process.to_string());
    }

    /// Records an idle tick.
    pub fn idle(&mut self, time: i64) {
        let slot = self.slot(time);
        debug_assert!(slot.selected.is_none(), "idle and selection at tick {time}");
        slot.idle = true;
    }

    /// Flushes every bucket, in tick order, into an event log.
    pub fn into_log(self) -> EventLog {
        let mut log = EventLog::new();
        for (time, tick) in self.ticks {
            for process in tick.arrivals {
                log.push(Event::arrived(time, process));
            }
            if let Some((process, burst)) = tick.selected {
                log.push(Event::selected(time, process, burst));
            }
            if let Some(process) = tick.finished {
                log.push(Event::finished(time, process));
            }
            if tick.idle {
                log.push(Event::idle(time));
            }
        }
        log
    }
}

/// Processes that have not arrived yet, ordered by `(arrival_time, input index)`.
#[derive(Debug, Clone)]
pub struct ArrivalQueue {
    pending: VecDeque<usize>,
}

impl ArrivalQueue {
    /// Builds the queue from the input order (stable on equal arrival times).
    pub fn new(processes: &[Process]) -> Self {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| processes[i].arrival_time);
        Self {
            pending: order.into(),
        }
    }

    /// Pops every process with `arrival_time <= time`, logging each as arrived.
    ///
    /// Returns the admitted indices in arrival order. Nothing is admitted at
    /// or past the horizon.
    pub fn admit(
        &mut self,
        processes: &[Process],
        time: i64,
        timeline: &mut Timeline,
    ) -> Vec<usize> {
        let mut admitted = Vec::new();
        if time >= timeline.run_for() {
            return admitted;
        }
        while let Some(&idx) = self.pending.front() {
            if !processes[idx].has_arrived(time) {
                break;
            }
            self.pending.pop_front();
            timeline.arrived(time, &processes[idx].name);
            admitted.push(idx);
        }
        admitted
    }

    /// Whether every process has been admitted.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
