//! First-Come First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Admit every process with `arrival_time <= now` to a FIFO ready queue.
//! 2. Dispatch the head for its whole remaining burst, admitting arrivals
//!    tick by tick while it runs so they keep their real timestamps.
//! 3. Mark it finished when the burst hits zero; idle one tick if nothing is ready.
//!
//! A span that would run past `run_for` stops at the horizon and leaves the
//! process unfinished.

use std::collections::VecDeque;

use log::{debug, trace};

use super::timeline::{ArrivalQueue, Timeline};
use super::Scheduler;
use crate::config::Algorithm;
use crate::models::{EventLog, Process};

/// Non-preemptive, arrival-ordered scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct FifoScheduler;

impl FifoScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for FifoScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
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
            debug!(
                "t={now} dispatch {} for {} ticks",
                process.name, process.remaining_burst_time
            );

            let span_end = (now + process.remaining_burst_time).min(run_for);
            while now < span_end {
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
                    "t={now} horizon reached, {} left with {} ticks",
                    process.name, process.remaining_burst_time
                );
            }
        }

        timeline.into_log()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(processes: &mut [Process], run_for: i64) -> Vec<String> {
        FifoScheduler::new().schedule(processes, run_for).lines()
    }

    #[test]
    fn test_single_process() {
        let mut procs = vec![Process::new("P1", 0, 5)];
        let lines = run(&mut procs, 5);
        assert_eq!(
            lines,
            vec![
                "Time 0 : P1 arrived",
                "Time 0 : P1 selected (burst 5)",
                "Time 5 : P1 finished",
            ]
        );
        assert_eq!(procs[0].waiting_time, 0);
        assert_eq!(procs[0].response_time, Some(0));
        assert_eq!(procs[0].turnaround_time, 5);
    }

    #[test]
    fn test_arrivals_during_span_keep_timestamps() {
        let mut procs = vec![
            Process::new("A", 0, 3),
            Process::new("B", 1, 2),
            Process::new("C", 2, 1),
        ];
        let lines = run(&mut procs, 10);
        assert_eq!(
            lines,
            vec![
                "Time 0 : A arrived",
                "Time 0 : A selected (burst 3)",
                "Time 1 : B arrived",
                "Time 2 : C arrived",
                "Time 3 : B selected (burst 2)",
                "Time 3 : A finished",
                "Time 5 : C selected (burst 1)",
                "Time 5 : B finished",
                "Time 6 : C finished",
                "Time 6 : Idle",
                "Time 7 : Idle",
                "Time 8 : Idle",
                "Time 9 : Idle",
            ]
        );
        assert_eq!(procs[1].waiting_time, 2);
        assert_eq!(procs[2].waiting_time, 3);
        assert_eq!(procs[2].response_time, Some(3));
    }

    #[test]
    fn test_orders_by_arrival_not_input() {
        let mut procs = vec![Process::new("late", 2, 1), Process::new("early", 0, 1)];
        let log = FifoScheduler::new().schedule(&mut procs, 5);
        assert_eq!(log.finish_order(), vec!["early", "late"]);
    }

    #[test]
    fn test_equal_arrivals_keep_input_order() {
        let mut procs = vec![Process::new("X", 0, 2), Process::new("Y", 0, 2)];
        let log = FifoScheduler::new().schedule(&mut procs, 4);
        assert_eq!(log.selections(), vec![(0, "X"), (2, "Y")]);
    }

    #[test]
    fn test_gap_before_first_arrival() {
        let mut procs = vec![Process::new("P1", 2, 1)];
        let lines = run(&mut procs, 4);
        assert_eq!(
            lines,
            vec![
                "Time 0 : Idle",
                "Time 1 : Idle",
                "Time 2 : P1 arrived",
                "Time 2 : P1 selected (burst 1)",
                "Time 3 : P1 finished",
                "Time 3 : Idle",
            ]
        );
    }

    #[test]
    fn test_span_truncated_at_horizon() {
        let mut procs = vec![Process::new("short", 0, 2), Process::new("long", 0, 10)];
        let log = FifoScheduler::new().schedule(&mut procs, 6);
        assert_eq!(log.finish_order(), vec!["short"]);
        assert_eq!(procs[1].finish_time, None);
        assert_eq!(procs[1].remaining_burst_time, 6);
        assert_eq!(procs[1].start_time, Some(2));
        assert!(log.events.iter().all(|e| e.time <= 6));
    }

    #[test]
    fn test_each_process_selected_once() {
        let mut procs = vec![
            Process::new("A", 0, 4),
            Process::new("B", 1, 3),
            Process::new("C", 1, 2),
        ];
        let log = FifoScheduler::new().schedule(&mut procs, 20);
        for p in &procs {
            let selections = log
                .selections()
                .into_iter()
                .filter(|(_, name)| *name == p.name)
                .count();
            assert_eq!(selections, 1, "{} selected more than once", p.name);
            assert!(p.waiting_time >= 0);
            assert_eq!(p.finish_time.unwrap() - p.start_time.unwrap(), p.burst_time);
        }
    }
}
