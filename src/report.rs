//! Text report and Gantt rows for a finished run.
//!
//! The report layout:
//!
//! ```text
//! 2 processes
//! Using Round-Robin
//! Quantum 2
//!
//! Time 0 : P1 arrived
//! ...
//! Finished at time 6
//!
//! P1 wait 2 turnaround 6 response 0
//! P2 did not finish
//! ```

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::config::Algorithm;
use crate::models::{EventKind, EventLog};
use crate::simulation::SimulationOutcome;

/// Renders the `.out` report for `outcome`.
pub fn render_report(outcome: &SimulationOutcome) -> String {
    let config = &outcome.config;
    let mut out = String::new();

    let _ = writeln!(out, "{} processes", outcome.processes.len());
    let _ = writeln!(out, "Using {}", config.algorithm.description());
    if config.algorithm == Algorithm::Rr {
        if let Some(q) = config.quantum {
            let _ = writeln!(out, "Quantum {q}");
        }
    }
    out.push('\n');

    for event in &outcome.log.events {
        let _ = writeln!(out, "{event}");
    }
    let _ = writeln!(out, "Finished at time {}", config.run_for);
    out.push('\n');

    for p in &outcome.processes {
        match p.finish_time {
            Some(_) => {
                let _ = writeln!(
                    out,
                    "{} wait {} turnaround {} response {}",
                    p.name,
                    p.waiting_time,
                    p.turnaround_time,
                    p.response_time.unwrap_or_default()
                );
            }
            None => {
                let _ = writeln!(out, "{} did not finish", p.name);
            }
        }
    }

    out
}

/// Report path for an input file: `jobs.in` becomes `jobs.out`; any other
/// name gets `.out` appended.
pub fn output_path(input: &Path) -> PathBuf {
    if input.extension().is_some_and(|ext| ext == "in") {
        input.with_extension("out")
    } else {
        let mut name = input.as_os_str().to_owned();
        name.push(".out");
        PathBuf::from(name)
    }
}

/// Process holding the CPU during each tick of `[0, run_for)`; `None` is idle.
///
/// Reconstructed from selection, finish and idle events, so it works for any
/// policy's log.
pub fn gantt(log: &EventLog, run_for: i64) -> Vec<Option<String>> {
    let mut rows = Vec::with_capacity(run_for.max(0) as usize);
    let mut running: Option<&str> = None;
    let mut events = log.events.iter().peekable();

    for tick in 0..run_for {
        while let Some(event) = events.next_if(|e| e.time <= tick) {
            match &event.kind {
                EventKind::Selected { process, .. } => running = Some(process.as_str()),
                EventKind::Finished { process } if running == Some(process.as_str()) => {
                    running = None
                }
                EventKind::Idle => running = None,
                _ => {}
            }
        }
        rows.push(running.map(str::to_string));
    }

    rows
}
