//! Event trace model.
//!
//! A simulation run produces an ordered log of events, one per
//! (tick, event) pair. Each event renders to a single trace line:
//!
//! ```text
//! Time 0 : P1 arrived
//! Time 0 : P1 selected (burst 5)
//! Time 5 : P1 finished
//! Time 6 : Idle
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened at a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// Process became schedulable.
    Arrived { process: String },
    /// Process was dispatched with `burst` ticks still owed.
    Selected { process: String, burst: i64 },
    /// Process completed its burst.
    Finished { process: String },
    /// No process was ready.
    Idle,
}

/// A timestamped event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Tick at which the event occurred.
    pub time: i64,
    /// Event payload.
    pub kind: EventKind,
}

impl Event {
    /// Creates an arrival event.
    pub fn arrived(time: i64, process: impl Into<String>) -> Self {
        Self {
            time,
            kind: EventKind::Arrived {
                process: process.into(),
            },
        }
    }

    /// Creates a selection event.
    pub fn selected(time: i64, process: impl Into<String>, burst: i64) -> Self {
        Self {
            time,
            kind: EventKind::Selected {
                process: process.into(),
                burst,
            },
        }
    }

    /// Creates a finish event.
    pub fn finished(time: i64, process: impl Into<String>) -> Self {
        Self {
            time,
            kind: EventKind::Finished {
                process: process.into(),
            },
        }
    }

    /// Creates an idle event.
    pub fn idle(time: i64) -> Self {
        Self {
            time,
            kind: EventKind::Idle,
        }
    }

    /// Name of the process the event is about (`None` for idle).
    pub fn process(&self) -> Option<&str> {
        match &self.kind {
            EventKind::Arrived { process }
            | EventKind::Selected { process, .. }
            | EventKind::Finished { process } => Some(process),
            EventKind::Idle => None,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self.kind, EventKind::Idle)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            EventKind::Arrived { process } => write!(f, "Time {} : {process} arrived", self.time),
            EventKind::Selected { process, burst } => {
                write!(f, "Time {} : {process} selected (burst {burst})", self.time)
            }
            EventKind::Finished { process } => {
                write!(f, "Time {} : {process} finished", self.time)
            }
            EventKind::Idle => write!(f, "Time {} : Idle", self.time),
        }
    }
}

/// Ordered event trace of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    /// Events in chronological order.
    pub events: Vec<Event>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn push(&mut self, event: Event) {
        debug_assert!(
            self.events.last().map_or(true, |last| last.time <= event.time),
            "event {event} logged out of order"
        );
        self.events.push(event);
    }

    /// Rendered trace lines, one per event.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Events that occurred at `time`.
    pub fn events_at(&self, time: i64) -> Vec<&Event> {
        self.events.iter().filter(|e| e.time == time).collect()
    }

    /// Events concerning a given process.
    pub fn events_for(&self, process: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.process() == Some(process))
            .collect()
    }

    /// `(time, process)` of every dispatch, in order.
    pub fn selections(&self) -> Vec<(i64, &str)> {
        self.events
            .iter()
            .filter_map(|e| match &e.kind {
                EventKind::Selected { process, .. } => Some((e.time, process.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Process names in the order they finished.
    pub fn finish_order(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match &e.kind {
                EventKind::Finished { process } => Some(process.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of idle ticks.
    pub fn idle_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_idle()).count()
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl fmt::Display for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            writeln!(f, "{event}")?;
        }
        Ok(())
    }
}
