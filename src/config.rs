//! Simulation configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scheduling policy to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// First-Come First-Served (non-preemptive).
    #[default]
    Fcfs,
    /// Round-Robin with a fixed quantum.
    Rr,
    /// Preemptive Shortest Job First (shortest remaining time).
    Sjf,
    /// Ticket-weighted lottery.
    Lottery,
}

impl Algorithm {
    /// All supported policies.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Rr,
        Algorithm::Sjf,
        Algorithm::Lottery,
    ];

    /// Short name used in input files (`fcfs`, `rr`, `sjf`, `lottery`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Rr => "rr",
            Algorithm::Sjf => "sjf",
            Algorithm::Lottery => "lottery",
        }
    }

    /// Human-readable policy name, as printed in reports.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-Come First-Served",
            Algorithm::Rr => "Round-Robin",
            Algorithm::Sjf => "Preemptive Shortest Job First",
            Algorithm::Lottery => "Lottery",
        }
    }

    /// Whether the policy needs a quantum.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, Algorithm::Rr)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an algorithm name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scheduling algorithm '{0}'")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Algorithm::Fcfs),
            "rr" => Ok(Algorithm::Rr),
            "sjf" => Ok(Algorithm::Sjf),
            "lottery" => Ok(Algorithm::Lottery),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Parameters of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Policy to simulate.
    pub algorithm: Algorithm,
    /// Number of ticks to simulate, `[0, run_for)`.
    pub run_for: i64,
    /// Round-Robin time slice. Required iff `algorithm == Rr`.
    pub quantum: Option<i64>,
    /// Seed for the lottery draw. `None` = OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Fcfs,
            run_for: 0,
            quantum: None,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Creates a configuration for `algorithm` over `run_for` ticks.
    pub fn new(algorithm: Algorithm, run_for: i64) -> Self {
        Self {
            algorithm,
            run_for,
            ..Default::default()
        }
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Sets the lottery seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
