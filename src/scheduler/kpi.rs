//! Run quality metrics (KPIs).
//!
//! Aggregates per-process timing into the standard CPU scheduling
//! criteria after a run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion Rate | finished / total |
//! | Avg Waiting | mean(turnaround - burst) over finished processes |
//! | Avg Turnaround | mean(finish - arrival) over finished processes |
//! | Avg Response | mean(first dispatch - arrival) over finished processes |
//! | Utilization | busy ticks / run_for |
//! | Makespan | latest finish time |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Run performance indicators.
///
/// All time values are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Processes that completed within the horizon.
    pub finished: usize,
    /// Processes still owing burst at the horizon.
    pub unfinished: usize,
    /// Fraction of processes that finished (0.0..1.0).
    pub completion_rate: f64,
    /// Mean waiting time of finished processes.
    pub avg_waiting_time: f64,
    /// Mean turnaround time of finished processes.
    pub avg_turnaround_time: f64,
    /// Mean response time of finished processes.
    pub avg_response_time: f64,
    /// Ticks the CPU spent running some process.
    pub busy_ticks: i64,
    /// `busy_ticks / run_for` (0.0..1.0).
    pub cpu_utilization: f64,
    /// Latest finish time (0 if nothing finished).
    pub makespan: i64,
}

impl SimulationKpi {
    /// Computes KPIs from the processes of a completed run.
    ///
    /// # Arguments
    /// * `processes` - Processes after the scheduler has run.
    /// * `run_for` - Simulated horizon in ticks.
    pub fn calculate(processes: &[Process], run_for: i64) -> Self {
        let mut finished: usize = 0;
        let mut total_waiting: f64 = 0.0;
        let mut total_turnaround: f64 = 0.0;
        let mut total_response: f64 = 0.0;
        let mut makespan: i64 = 0;
        let mut busy_ticks: i64 = 0;

        for p in processes {
            busy_ticks += p.executed_ticks();

            if let Some(finish) = p.finish_time {
                finished += 1;
                makespan = makespan.max(finish);
                total_waiting += p.waiting_time as f64;
                total_turnaround += p.turnaround_time as f64;
                total_response += p.response_time.unwrap_or(0) as f64;
            }
        }

        let mean = |total: f64| {
            if finished == 0 {
                0.0
            } else {
                total / finished as f64
            }
        };

        let completion_rate = if processes.is_empty() {
            1.0
        } else {
            finished as f64 / processes.len() as f64
        };

        let cpu_utilization = if run_for <= 0 {
            0.0
        } else {
            busy_ticks as f64 / run_for as f64
        };

        Self {
            finished,
            unfinished: processes.len() - finished,
            completion_rate,
            avg_waiting_time: mean(total_waiting),
            avg_turnaround_time: mean(total_turnaround),
            avg_response_time: mean(total_response),
            busy_ticks,
            cpu_utilization,
            makespan,
        }
    }

    /// Whether every process finished within the horizon.
    pub fn all_finished(&self) -> bool {
        self.unfinished == 0
    }
}
