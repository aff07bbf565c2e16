//! Round-Robin scheduler.
//!
//! # Algorithm
//!
//! 1. Admit arrivals to the tail of a FIFO ready queue before any dispatch decision.
//! 2. Dispatch the head for `min(quantum, remaining)` ticks, one tick at a time,
//!    admitting arrivals after every tick.
//! 3. If the burst is done, finish the process at that tick; otherwise requeue it
//!    at the tail, behind anything that arrived during its slice.
//!
//! Every dispatch logs a selection, including a process requeued onto an
//! otherwise empty queue.

use std::collections::VecDeque;

use log::{debug, trace};

use super::timeline::{ArrivalQueue, Timeline};
use super::Scheduler;
use crate::config::Algorithm;
use crate::models::{EventLog, Process};

/// Preemptive time-slicing scheduler with a fixed quantum.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: i64,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given time slice (must be positive).
    pub fn new(quantum: i64) -> Self {
        debug_assert!(quantum > 0, "quantum must be positive, got {quantum}");
        Self { quantum }
    }

    /// Time slice in ticks.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Scheduler for RoundRobinScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Rr
    }

    fn schedule(&mut self, processes: &mut [Process], run_for: i64) -> EventLog {
        let mut timeline = Timeline::new(run_for);
        let mut arrivals = ArrivalQueue::new(processes);
        let mut ready: VecDeque<usize> = VecDeque::new();
        let mut now = 0;

        while now < run_for {
            ready.extend(arrivals.admit(processes, now, &mut timeline));

            let Some(idx) = ready.pop_front() else {
                trace!("t={now} idle");
                timeline.idle(now);
                now += 1;
                continue;
            };

            let process = &mut processes[idx];
            process.set_start_time(now);
            timeline.selected(now, &process.name, process.remaining_burst_time);

            let slice = self
                .quantum
                .min(process.remaining_burst_time)
                .min(run_for - now);
            debug!("t={now} dispatch {} for {slice} ticks", process.name);

            for _ in 0..slice {
                processes[idx].execute(1);
                now += 1;
                ready.extend(arrivals.admit(processes, now, &mut timeline));
            }

            let process = &mut processes[idx];
            if process.remaining_burst_time == 0 {
                process.set_finish_time(now);
                timeline.finished(now, &process.name);
                debug!("t={now} {} finished", process.name);
            } else {
                debug!(
                    "t={now} requeue {} with {} ticks left",
                    process.name, process.remaining_burst_time
                );
                ready.push_back(idx);
            }
        }

        timeline.into_log()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventKind;

    #[test]
    fn test_two_processes_alternate() {
        let mut procs = vec![Process::new("P1", 0, 4), Process::new("P2", 0, 2)];
        let log = RoundRobinScheduler::new(2).schedule(&mut procs, 6);
        assert_eq!(
            log.lines(),
            vec![
                "Time 0 : P1 arrived",
                "Time 0 : P2 arrived",
                "Time 0 : P1 selected (burst 4)",
                "Time 2 : P2 selected (burst 2)",
                "Time 4 : P1 selected (burst 2)",
                "Time 4 : P2 finished",
                "Time 6 : P1 finished",
            ]
        );
        assert_eq!(log.finish_order(), vec!["P2", "P1"]);
        assert_eq!(procs[0].waiting_time, 2);
        assert_eq!(procs[1].waiting_time, 2);
        assert_eq!(procs[1].response_time, Some(2));
    }

    #[test]
    fn test_arrival_during_slice_goes_ahead_of_requeue() {
        // B arrives while A runs; A is requeued behind B.
        let mut procs = vec![Process::new("A", 0, 5), Process::new("B", 1, 2)];
        let log = RoundRobinScheduler::new(3).schedule(&mut procs, 10);
        assert_eq!(log.selections(), vec![(0, "A"), (3, "B"), (5, "A")]);
        assert_eq!(procs[1].finish_time, Some(5));
        assert_eq!(procs[0].finish_time, Some(7));
    }

    #[test]
    fn test_arrival_at_slice_end_goes_ahead_of_requeue() {
        let mut procs = vec![Process::new("A", 0, 4), Process::new("B", 2, 1)];
        let log = RoundRobinScheduler::new(2).schedule(&mut procs, 8);
        assert_eq!(log.selections(), vec![(0, "A"), (2, "B"), (3, "A")]);
    }

    #[test]
    fn test_lone_process_reselected_each_quantum() {
        let mut procs = vec![Process::new("P1", 0, 5)];
        let log = RoundRobinScheduler::new(2).schedule(&mut procs, 8);
        assert_eq!(log.selections(), vec![(0, "P1"), (2, "P1"), (4, "P1")]);
        assert_eq!(procs[0].finish_time, Some(5));
        assert_eq!(log.idle_count(), 3);
    }

    #[test]
    fn test_no_slice_exceeds_quantum() {
        let quantum = 3;
        let mut procs = vec![
            Process::new("A", 0, 7),
            Process::new("B", 1, 4),
            Process::new("C", 2, 9),
            Process::new("D", 6, 2),
        ];
        let log = RoundRobinScheduler::new(quantum).schedule(&mut procs, 40);

        // Each slice lasts until the next selection or the holder's finish.
        let mut holder: Option<(i64, &str)> = None;
        for event in &log.events {
            match &event.kind {
                EventKind::Selected { process, .. } => {
                    if let Some((start, _)) = holder {
                        assert!(event.time - start <= quantum);
                    }
                    holder = Some((event.time, process.as_str()));
                }
                EventKind::Finished { process } => {
                    if let Some((start, name)) = holder {
                        if name == process {
                            assert!(event.time - start <= quantum);
                            holder = None;
                        }
                    }
                }
                _ => {}
            }
        }
        assert!(procs.iter().all(Process::is_finished));
    }

    #[test]
    fn test_slice_truncated_at_horizon() {
        let mut procs = vec![Process::new("P1", 0, 10)];
        let log = RoundRobinScheduler::new(4).schedule(&mut procs, 6);
        assert_eq!(log.selections(), vec![(0, "P1"), (4, "P1")]);
        assert_eq!(procs[0].remaining_burst_time, 4);
        assert_eq!(procs[0].finish_time, None);
        assert!(log.events.iter().all(|e| e.time < 6));
    }

    #[test]
    fn test_idle_until_arrival() {
        let mut procs = vec![Process::new("P1", 3, 1)];
        let log = RoundRobinScheduler::new(2).schedule(&mut procs, 5);
        assert_eq!(
            log.lines(),
            vec![
                "Time 0 : Idle",
                "Time 1 : Idle",
                "Time 2 : Idle",
                "Time 3 : P1 arrived",
                "Time 3 : P1 selected (burst 1)",
                "Time 4 : P1 finished",
                "Time 4 : Idle",
            ]
        );
    }
}
