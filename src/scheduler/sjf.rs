//! Preemptive Shortest Job First (shortest remaining time first).
//!
//! # Algorithm
//!
//! Every tick:
//! 1. Admit arrivals into the ready set.
//! 2. Pick the minimum of `(remaining_burst_time, name)`.
//! 3. Log a selection only if the pick differs from the process that ran last tick.
//! 4. Run it for one tick; finish it at `now + 1` or put it back with its new key.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use log::{debug, trace};

use super::timeline::{ArrivalQueue, Timeline};
use super::Scheduler;
use crate::config::Algorithm;
use crate::models::{EventLog, Process};

/// Ready-set ordering key: shortest remaining burst, then name, then input index.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ReadyKey {
    remaining: i64,
    name: String,
    index: usize,
}

impl ReadyKey {
    fn of(process: &Process, index: usize) -> Self {
        Self {
            remaining: process.remaining_burst_time,
            name: process.name.clone(),
            index,
        }
    }
}

impl Ord for ReadyKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.remaining
            .cmp(&other.remaining)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for ReadyKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest-remaining-time-first scheduler, re-evaluated every tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct SjfScheduler;

impl SjfScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for SjfScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn schedule(&mut self, processes: &mut [Process], run_for: i64) -> EventLog {
        let mut timeline = Timeline::new(run_for);
        let mut arrivals = ArrivalQueue::new(processes);
        // BinaryHeap is a max-heap; Reverse turns it into a min-heap on ReadyKey.
        let mut ready: BinaryHeap<Reverse<ReadyKey>> = BinaryHeap::new();
        let mut last: Option<usize> = None;

        for now in 0..run_for {
            for idx in arrivals.admit(processes, now, &mut timeline) {
                ready.push(Reverse(ReadyKey::of(&processes[idx], idx)));
            }

            let Some(Reverse(key)) = ready.pop() else {
                trace!("t={now} idle");
                timeline.idle(now);
                continue;
            };
            let idx = key.index;

            if last != Some(idx) {
                let process = &mut processes[idx];
                if process.start_time.is_none() {
                    process.set_start_time(now);
                    let response = now - process.arrival_time;
                    process.response_time =
                        Some(process.response_time.map_or(response, |r| r.max(response)));
                }
                timeline.selected(now, &process.name, process.remaining_burst_time);
                match last {
                    Some(prev) => debug!(
                        "t={now} {} preempts {} (remaining {})",
                        processes[idx].name, processes[prev].name, key.remaining
                    ),
                    None => debug!("t={now} dispatch {}", processes[idx].name),
                }
            }
            last = Some(idx);

            let process = &mut processes[idx];
            process.execute(1);
            if process.remaining_burst_time == 0 {
                process.set_finish_time(now + 1);
                timeline.finished(now + 1, &process.name);
                debug!("t={} {} finished", now + 1, process.name);
                last = None;
            } else {
                ready.push(Reverse(ReadyKey::of(process, idx)));
            }
        }

        timeline.into_log()
    }
}
