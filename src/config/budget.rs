use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

/// Resource limits for one proof run. Every limit is always enforced; the
/// search stops with the first one that trips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceBudget {
    /// Maximum number of clause pairs taken from the frontier
    pub max_iterations: usize,
    /// Maximum number of clauses in the set, inputs included
    pub max_clauses: usize,
    /// Wall-clock limit, measured from the start of the search
    pub max_duration: Option<Duration>,
}

impl ResourceBudget {
    pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;
    pub const DEFAULT_MAX_CLAUSES: usize = 2_000;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_max_clauses(mut self, max_clauses: usize) -> Self {
        self.max_clauses = max_clauses;
        self
    }

    pub fn with_max_duration(mut self, max_duration: Duration) -> Self {
        self.max_duration = Some(max_duration);
        self
    }

    pub fn without_deadline(mut self) -> Self {
        self.max_duration = None;
        self
    }
}

impl Default for ResourceBudget {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            max_clauses: Self::DEFAULT_MAX_CLAUSES,
            max_duration: Some(Duration::from_secs(10)),
        }
    }
}

/// Point in time after which a search must stop.
///
/// Checked between pairs and inside the factoring and resolvent loops of a
/// single pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// A deadline that never expires.
    pub fn never() -> Self {
        Self { at: None }
    }

    /// `limit` after `started`; no deadline without a limit or when the sum
    /// is not representable.
    pub fn after(started: Instant, limit: Option<Duration>) -> Self {
        Self { at: limit.and_then(|limit| started.checked_add(limit)) }
    }

    pub fn is_expired(&self) -> bool {
        match self.at {
            Some(at) => Instant::now() >= at,
            None => false,
        }
    }
}

impl ResourceBudget {
    /// The wall-clock deadline of a run started at `started`.
    pub fn deadline_from(&self, started: Instant) -> Deadline {
        Deadline::after(started, self.max_duration)
    }
}

/// Which budget limit stopped a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitKind {
    Iterations,
    Clauses,
    Time,
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LimitKind::Iterations => "max_iterations",
            LimitKind::Clauses => "max_clauses",
            LimitKind::Time => "max_seconds",
        };
        f.write_str(name)
    }
}
