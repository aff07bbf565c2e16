//! `u-procsched <input file>`
//!
//! Parses the input file, runs the simulation and writes the report next to
//! it (`jobs.in` -> `jobs.out`). Set `RUST_LOG=debug` to trace dispatch
//! decisions.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::{env, fs};

use env_logger::Builder;
use log::{error, info};

use u_procsched::input::read_input_file;
use u_procsched::report::{output_path, render_report};
use u_procsched::simulate;

fn run(input: &Path) -> Result<PathBuf, String> {
    let parsed = read_input_file(input).map_err(|e| e.to_string())?;

    let outcome = simulate(&parsed.config, parsed.processes).map_err(|errors| {
        errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    })?;

    let kpi = outcome.kpi();
    info!(
        "avg wait {:.2}, avg turnaround {:.2}, avg response {:.2}, makespan {}",
        kpi.avg_waiting_time, kpi.avg_turnaround_time, kpi.avg_response_time, kpi.makespan
    );

    let output = output_path(input);
    fs::write(&output, render_report(&outcome))
        .map_err(|e| format!("cannot write '{}': {e}", output.display()))?;
    Ok(output)
}

fn main() -> ExitCode {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args: Vec<String> = env::args().collect();
    let [_, input] = args.as_slice() else {
        eprintln!("Usage: u-procsched <input file>");
        return ExitCode::FAILURE;
    };

    match run(Path::new(input)) {
        Ok(output) => {
            info!("report written to {}", output.display());
            ExitCode::SUCCESS
        }
        Err(message) => {
            error!("{message}");
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}
