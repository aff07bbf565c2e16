//! Parser for the line-oriented simulation input format.
//!
//! ```text
//! processcount 2
//! runfor 10
//! use rr
//! quantum 2
//! process name P1 arrival 0 burst 5
//! process name P2 arrival 1 burst 3
//! end
//! ```
//!
//! Tokens are whitespace-separated and `#` starts a comment. Blank lines and
//! unknown directives are skipped; anything after `end` is ignored. A
//! `quantum` line is only kept when an earlier `use` line selected
//! Round-Robin.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::config::{Algorithm, SimulationConfig, UnknownAlgorithm};
use crate::models::Process;

/// Input parsing error.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("cannot read input file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Missing parameter for '{0}'")]
    MissingParameter(&'static str),

    #[error("Missing 'quantum' parameter when use is 'rr'")]
    MissingQuantum,

    #[error("line {line}: {source}")]
    UnknownAlgorithm {
        line: usize,
        source: UnknownAlgorithm,
    },

    #[error("line {line}: invalid process specification")]
    InvalidProcess { line: usize },

    #[error("line {line}: '{directive}' expects a value")]
    MissingValue { line: usize, directive: String },

    #[error("line {line}: invalid integer '{value}' for '{directive}'")]
    InvalidInteger {
        line: usize,
        directive: String,
        value: String,
    },

    #[error("Number of processes ({found}) does not match 'processcount' ({expected})")]
    CountMismatch { expected: usize, found: usize },
}

/// Processes and run parameters read from an input file.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInput {
    /// Processes in file order.
    pub processes: Vec<Process>,
    /// Run parameters (no seed; the file format has none).
    pub config: SimulationConfig,
}

/// Reads and parses the input file at `path`.
pub fn read_input_file(path: impl AsRef<Path>) -> Result<ParsedInput, ParseError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_input(&text)
}

/// Parses input text.
pub fn parse_input(text: &str) -> Result<ParsedInput, ParseError> {
    let mut process_count: Option<usize> = None;
    let mut run_for: Option<i64> = None;
    let mut algorithm: Option<Algorithm> = None;
    let mut quantum: Option<i64> = None;
    let mut processes = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let content = raw.split('#').next().unwrap_or_default();
        let tokens: Vec<&str> = content.split_whitespace().collect();
        let Some(&directive) = tokens.first() else {
            continue;
        };

        match directive {
            "processcount" => process_count = Some(parse_value(&tokens, line)?),
            "runfor" => run_for = Some(parse_value(&tokens, line)?),
            "use" => {
                let name = value_token(&tokens, line)?;
                let algo = name
                    .parse()
                    .map_err(|source| ParseError::UnknownAlgorithm { line, source })?;
                algorithm = Some(algo);
            }
            "quantum" => {
                let value = parse_value(&tokens, line)?;
                if algorithm.is_some_and(|a| a.requires_quantum()) {
                    quantum = Some(value);
                }
            }
            "process" => processes.push(parse_process(&tokens, line)?),
            "end" => break,
            _ => {}
        }
    }

    let process_count = process_count.ok_or(ParseError::MissingParameter("processcount"))?;
    let run_for = run_for.ok_or(ParseError::MissingParameter("runfor"))?;
    let algorithm = algorithm.ok_or(ParseError::MissingParameter("use"))?;

    if algorithm.requires_quantum() && quantum.is_none() {
        return Err(ParseError::MissingQuantum);
    }

    if processes.len() != process_count {
        return Err(ParseError::CountMismatch {
            expected: process_count,
            found: processes.len(),
        });
    }

    let mut config = SimulationConfig::new(algorithm, run_for);
    config.quantum = quantum.filter(|_| algorithm.requires_quantum());

    Ok(ParsedInput { processes, config })
}

fn value_token<'a>(tokens: &[&'a str], line: usize) -> Result<&'a str, ParseError> {
    tokens.get(1).copied().ok_or_else(|| ParseError::MissingValue {
        line,
        directive: tokens[0].to_string(),
    })
}

fn parse_value<T: FromStr>(tokens: &[&str], line: usize) -> Result<T, ParseError> {
    let value = value_token(tokens, line)?;
    parse_int(value, tokens[0], line)
}

fn parse_int<T: FromStr>(value: &str, directive: &str, line: usize) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidInteger {
        line,
        directive: directive.to_string(),
        value: value.to_string(),
    })
}

/// `process name <name> arrival <int> burst <int>`
fn parse_process(tokens: &[&str], line: usize) -> Result<Process, ParseError> {
    match tokens {
        ["process", "name", name, "arrival", arrival, "burst", burst, ..] => {
            let arrival = parse_int(arrival, "arrival", line)?;
            let burst = parse_int(burst, "burst", line)?;
            Ok(Process::new(*name, arrival, burst))
        }
        _ => Err(ParseError::InvalidProcess { line }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RR_INPUT: &str = "\
processcount 2   # two jobs
runfor 10
use rr
quantum 2

process name P1 arrival 0 burst 5
process name P2 arrival 1 burst 3
end
process name ignored arrival 0 burst 1
";

    #[test]
    fn test_parse_rr_input() {
        let parsed = parse_input(RR_INPUT).unwrap();
        assert_eq!(parsed.config.algorithm, Algorithm::Rr);
        assert_eq!(parsed.config.run_for, 10);
        assert_eq!(parsed.config.quantum, Some(2));
        assert_eq!(parsed.config.seed, None);
        assert_eq!(
            parsed.processes,
            vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)]
        );
    }

    #[test]
    fn test_quantum_dropped_for_other_policies() {
        let text = "processcount 1\nrunfor 5\nuse SJF\nquantum 3\nprocess name A arrival 0 burst 2\n";
        let parsed = parse_input(text).unwrap();
        assert_eq!(parsed.config.algorithm, Algorithm::Sjf);
        assert_eq!(parsed.config.quantum, None);
    }

    #[test]
    fn test_quantum_before_use_is_dropped() {
        let text = "processcount 1\nrunfor 5\nquantum 3\nuse rr\nprocess name A arrival 0 burst 2\n";
        assert!(matches!(
            parse_input(text).unwrap_err(),
            ParseError::MissingQuantum
        ));

        let text = "processcount 1\nrunfor 5\nquantum 3\nuse rr\nquantum 4\nprocess name A arrival 0 burst 2\n";
        assert_eq!(parse_input(text).unwrap().config.quantum, Some(4));
    }

    #[test]
    fn test_unknown_directive_ignored() {
        let text = "processcount 1\nrunfor 5\nuse fcfs\nverbose yes\nprocess name A arrival 0 burst 2\n";
        assert!(parse_input(text).is_ok());
    }

    #[test]
    fn test_missing_parameters() {
        let err = parse_input("runfor 5\nuse fcfs\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingParameter("processcount")));
        assert_eq!(err.to_string(), "Missing parameter for 'processcount'");

        let err = parse_input("processcount 0\nuse fcfs\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingParameter("runfor")));

        let err = parse_input("processcount 0\nrunfor 5\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingParameter("use")));
    }

    #[test]
    fn test_missing_quantum_for_rr() {
        let text = "processcount 1\nrunfor 5\nuse rr\nprocess name A arrival 0 burst 2\n";
        assert!(matches!(
            parse_input(text).unwrap_err(),
            ParseError::MissingQuantum
        ));
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = parse_input("processcount 0\nrunfor 5\nuse edf\n").unwrap_err();
        assert!(matches!(err, ParseError::UnknownAlgorithm { line: 3, .. }));
        assert_eq!(err.to_string(), "line 3: unknown scheduling algorithm 'edf'");
    }

    #[test]
    fn test_malformed_process_line() {
        let text = "processcount 1\nrunfor 5\nuse fcfs\nprocess name A burst 2 arrival 0\n";
        assert!(matches!(
            parse_input(text).unwrap_err(),
            ParseError::InvalidProcess { line: 4 }
        ));

        let text = "processcount 1\nrunfor 5\nuse fcfs\nprocess name A\n";
        assert!(matches!(
            parse_input(text).unwrap_err(),
            ParseError::InvalidProcess { line: 4 }
        ));
    }

    #[test]
    fn test_invalid_integers() {
        let err = parse_input("processcount two\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidInteger { line: 1, ref value, .. } if value == "two"
        ));

        let text = "processcount 1\nrunfor 5\nuse fcfs\nprocess name A arrival x burst 2\n";
        let err = parse_input(text).unwrap_err();
        assert_eq!(err.to_string(), "line 4: invalid integer 'x' for 'arrival'");

        let err = parse_input("runfor\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingValue { line: 1, .. }));
    }

    #[test]
    fn test_count_mismatch() {
        let text = "processcount 3\nrunfor 5\nuse lottery\nprocess name A arrival 0 burst 2\n";
        assert!(matches!(
            parse_input(text).unwrap_err(),
            ParseError::CountMismatch {
                expected: 3,
                found: 1
            }
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_input_file("/nonexistent/dir/sample.in").unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
        assert!(err.to_string().contains("sample.in"));
    }
}
