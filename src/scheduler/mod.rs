//! Scheduling policies and run metrics.
//!
//! Every policy advances a logical clock over `[0, run_for)`, mutates the
//! processes it is handed in place, and returns the event trace.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | [`FifoScheduler`] | no | arrival order |
//! | [`RoundRobinScheduler`] | quantum expiry | FIFO ready queue |
//! | [`SjfScheduler`] | every tick | shortest remaining burst, then name |
//! | [`LotteryScheduler`] | every tick | random draw, tickets `max(1, 10 - remaining)` |
//!
//! # KPI
//!
//! [`SimulationKpi`] aggregates waiting, turnaround, and response times,
//! plus utilization, over a finished run.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Waldspurger & Weihl (1994), "Lottery Scheduling: Flexible Proportional-Share
//!   Resource Management"

mod fifo;
mod kpi;
mod lottery;
mod round_robin;
mod sjf;
mod timeline;

pub use fifo::FifoScheduler;
pub use kpi::SimulationKpi;
pub use lottery::{tickets_for, LotteryScheduler, TICKET_CEILING};
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;
pub use timeline::{ArrivalQueue, Timeline};

use std::fmt::Debug;

use crate::config::Algorithm;
use crate::models::{EventLog, Process};

/// A CPU scheduling policy.
///
/// Implementations own `processes` exclusively for the duration of the run
/// and record `start_time`, `finish_time`, and the derived metrics on them.
/// Input is assumed valid (see [`crate::validation`]).
pub trait Scheduler: Send + Debug {
    /// Policy implemented by this scheduler.
    fn algorithm(&self) -> Algorithm;

    /// Runs the policy for `run_for` ticks and returns the event trace.
    fn schedule(&mut self, processes: &mut [Process], run_for: i64) -> EventLog;

    /// Policy name (e.g., "Round-Robin").
    fn name(&self) -> &'static str {
        self.algorithm().description()
    }
}
