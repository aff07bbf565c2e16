//! Simulation domain models.
//!
//! Provides the data types a run produces and mutates: the simulated
//! processes and the ordered event trace.
//!
//! # Domain Mappings
//!
//! | u-procsched | Operating system | Batch queue |
//! |-------------|------------------|-------------|
//! | Process | Thread / task | Job |
//! | Event | Context switch record | Job log line |
//! | EventLog | Scheduler trace | Queue history |

mod event;
mod process;

pub use event::{Event, EventKind, EventLog};
pub use process::Process;
