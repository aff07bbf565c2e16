//! Lottery scheduler.
//!
//! Each tick, every arrived and unfinished process holds
//! `max(1, 10 - remaining_burst_time)` tickets, so jobs close to completion
//! are favoured (a randomized approximation of SJF). A ticket is drawn
//! uniformly from `[1, total]` and the active list is walked in input order,
//! accumulating tickets until the running sum reaches the draw.
//!
//! The random source is injected, so a seeded generator makes runs
//! reproducible.
//!
//! # Reference
//! Waldspurger & Weihl (1994), "Lottery Scheduling: Flexible Proportional-Share
//! Resource Management", OSDI '94

use std::fmt;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::timeline::{ArrivalQueue, Timeline};
use super::Scheduler;
use crate::config::Algorithm;
use crate::models::{EventLog, Process};

/// Remaining burst at or above which a process holds a single ticket.
pub const TICKET_CEILING: i64 = 10;

/// Tickets held by a process for the current draw.
#[inline]
pub fn tickets_for(process: &Process) -> i64 {
    (TICKET_CEILING - process.remaining_burst_time).max(1)
}

/// Walks `(index, tickets)` pairs until the cumulative sum reaches `draw`.
fn pick_winner(weights: impl IntoIterator<Item = (usize, i64)>, draw: i64) -> Option<usize> {
    let mut cumulative = 0;
    for (idx, tickets) in weights {
        cumulative += tickets;
        if cumulative >= draw {
            return Some(idx);
        }
    }
    None
}

/// Probabilistic, preemptive scheduler re-drawn every tick.
pub struct LotteryScheduler<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> LotteryScheduler<R> {
    /// Creates a scheduler drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl LotteryScheduler<StdRng> {
    /// Reproducible scheduler seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Scheduler seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl<R: Rng> fmt::Debug for LotteryScheduler<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LotteryScheduler")
            .field("ticket_ceiling", &TICKET_CEILING)
            .finish_non_exhaustive()
    }
}

impl<R: Rng + Send> Scheduler for LotteryScheduler<R> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lottery
    }

    fn schedule(&mut self, processes: &mut [Process], run_for: i64) -> EventLog {
        let mut timeline = Timeline::new(run_for);
        let mut arrivals = ArrivalQueue::new(processes);
        // Arrived, unfinished processes, kept in input order.
        let mut active: Vec<usize> = Vec::new();
        let mut last: Option<usize> = None;

        for now in 0..run_for {
            for idx in arrivals.admit(processes, now, &mut timeline) {
                let pos = active.binary_search(&idx).unwrap_or_else(|pos| pos);
                active.insert(pos, idx);
            }

            let total: i64 = active.iter().map(|&i| tickets_for(&processes[i])).sum();
            if total == 0 {
                trace!("t={now} idle");
                timeline.idle(now);
                continue;
            }

            let draw = self.rng.random_range(1..=total);
            let weights = active.iter().map(|&i| (i, tickets_for(&processes[i])));
            let Some(idx) = pick_winner(weights, draw) else {
                debug_assert!(false, "draw {draw} exceeded {total} tickets");
                timeline.idle(now);
                continue;
            };
            trace!("t={now} draw {draw}/{total} -> {}", processes[idx].name);

            let process = &mut processes[idx];
            debug_assert!(process.remaining_burst_time > 0);
            if last != Some(idx) {
                if process.start_time.is_none() {
                    process.set_start_time(now);
                    process.response_time.get_or_insert(0);
                }
                timeline.selected(now, &process.name, process.remaining_burst_time);
                debug!(
                    "t={now} {} wins with {} of {total} tickets",
                    process.name,
                    tickets_for(process)
                );
            }
            last = Some(idx);

            process.execute(1);
            if process.remaining_burst_time == 0 {
                process.set_finish_time(now + 1);
                timeline.finished(now + 1, &process.name);
                debug!("t={} {} finished", now + 1, process.name);
                active.retain(|&i| i != idx);
                last = None;
            }
        }

        timeline.into_log()
    }
}
