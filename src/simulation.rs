//! Runs one simulation end to end.
//!
//! # Pipeline
//!
//! 1. Validate the processes and configuration, collecting every problem.
//! 2. Build the policy named by the configuration.
//! 3. Run it over `[0, run_for)` and return the processes with the trace.

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::{Algorithm, SimulationConfig};
use crate::models::{EventLog, Process};
use crate::scheduler::{
    FifoScheduler, LotteryScheduler, RoundRobinScheduler, Scheduler, SimulationKpi, SjfScheduler,
};
use crate::validation::{validate_input, ValidationError};

/// Result of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Configuration the run used.
    pub config: SimulationConfig,
    /// Processes in input order, with metrics filled in.
    pub processes: Vec<Process>,
    /// Ordered event trace.
    pub log: EventLog,
}

impl SimulationOutcome {
    /// Aggregate metrics of the run.
    pub fn kpi(&self) -> SimulationKpi {
        SimulationKpi::calculate(&self.processes, self.config.run_for)
    }

    /// Looks up a process by name.
    pub fn process(&self, name: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.name == name)
    }
}

/// Builds the scheduler for `config`.
///
/// Round-Robin falls back to a quantum of 1 when none is configured;
/// [`simulate`] rejects that case before getting here.
pub fn build_scheduler(config: &SimulationConfig) -> Box<dyn Scheduler> {
    match config.algorithm {
        Algorithm::Fcfs => Box::new(FifoScheduler::new()),
        Algorithm::Rr => Box::new(RoundRobinScheduler::new(config.quantum.unwrap_or(1))),
        Algorithm::Sjf => Box::new(SjfScheduler::new()),
        Algorithm::Lottery => match config.seed {
            Some(seed) => Box::new(LotteryScheduler::seeded(seed)),
            None => Box::new(LotteryScheduler::from_entropy()),
        },
    }
}

/// Validates the input, then runs the configured policy on `processes`.
///
/// # Returns
/// The outcome, or every validation error found.
pub fn simulate(
    config: &SimulationConfig,
    mut processes: Vec<Process>,
) -> Result<SimulationOutcome, Vec<ValidationError>> {
    validate_input(&processes, config)?;

    let mut scheduler = build_scheduler(config);
    info!(
        "simulating {} processes for {} ticks using {}",
        processes.len(),
        config.run_for,
        scheduler.name()
    );
    let log = scheduler.schedule(&mut processes, config.run_for);

    let outcome = SimulationOutcome {
        config: config.clone(),
        processes,
        log,
    };
    let kpi = outcome.kpi();
    info!(
        "{} of {} processes finished, utilization {:.2}",
        kpi.finished,
        outcome.processes.len(),
        kpi.cpu_utilization
    );

    Ok(outcome)
}
