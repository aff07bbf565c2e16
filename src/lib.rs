//! Discrete-tick CPU scheduling simulator.
//!
//! Simulates a single CPU over a fixed horizon of integer ticks under one of
//! four policies, recording an event trace and per-process timing metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Event`, `EventKind`, `EventLog`
//! - **`scheduler`**: Policies (`FifoScheduler`, `RoundRobinScheduler`,
//!   `SjfScheduler`, `LotteryScheduler`) behind the `Scheduler` trait, plus
//!   `SimulationKpi`
//! - **`config`**: `Algorithm` and `SimulationConfig`
//! - **`validation`**: Input integrity checks (duplicate names, bad bursts, missing quantum)
//! - **`input`**: Parser for the line-oriented `.in` format
//! - **`report`**: `.out` text report and per-tick Gantt rows
//! - **`simulation`**: Validate, build the policy, run it
//!
//! # Example
//!
//! ```
//! use u_procsched::{simulate, Algorithm, Process, SimulationConfig};
//!
//! let config = SimulationConfig::new(Algorithm::Rr, 6).with_quantum(2);
//! let processes = vec![Process::new("P1", 0, 4), Process::new("P2", 0, 2)];
//! let outcome = simulate(&config, processes).unwrap();
//! assert_eq!(outcome.log.finish_order(), vec!["P2", "P1"]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-9

pub mod config;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod validation;

pub use config::{Algorithm, SimulationConfig};
pub use models::{Event, EventKind, EventLog, Process};
pub use scheduler::{Scheduler, SimulationKpi};
pub use simulation::{simulate, SimulationOutcome};
