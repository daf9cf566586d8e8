//! Boot self-check of the sonar engines.
//!
//! Four known answers are run through the engine before a game starts: an
//! empty and an occupied ping, then two counting scans. Any mismatch or error
//! puts the system in `FAULT`.

use std::fmt;

use qsonar_engine::SonarEngine;
use serde::Serialize;
use tracing::{info, warn};

/// Overall result of the self-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// Every check returned its expected value.
    Nominal,
    /// At least one check failed.
    Fault,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Nominal => f.write_str("NOMINAL"),
            Status::Fault => f.write_str("FAULT"),
        }
    }
}

/// One known-answer check.
#[derive(Debug, Clone, Serialize)]
pub struct Check {
    /// Human-readable label, e.g. `SINGLE PING (WATER)`.
    pub label: &'static str,
    /// Expected engine output.
    pub expected: u8,
    /// Observed engine output, absent if the engine failed.
    pub observed: Option<u8>,
    /// Engine error message, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Check {
    /// Whether the observed value matches.
    pub fn passed(&self) -> bool {
        self.observed == Some(self.expected)
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.observed, &self.error) {
            (Some(v), _) => write!(f, "{}: {} (EXPECT {})", self.label, v, self.expected),
            (None, Some(e)) => write!(f, "{}: ERROR {} (EXPECT {})", self.label, e, self.expected),
            (None, None) => write!(f, "{}: - (EXPECT {})", self.label, self.expected),
        }
    }
}

/// All checks plus the overall status.
#[derive(Debug, Clone, Serialize)]
pub struct SelfCheckReport {
    pub status: Status,
    pub checks: Vec<Check>,
}

impl SelfCheckReport {
    /// Whether every check passed.
    pub fn is_nominal(&self) -> bool {
        self.status == Status::Nominal
    }
}

enum Probe {
    Ping(bool),
    Scan([bool; 4]),
}

const CHECKS: [(&str, Probe, u8); 4] = [
    ("SINGLE PING (WATER)", Probe::Ping(false), 0),
    ("SINGLE PING (SHIP)", Probe::Ping(true), 1),
    (
        "COUNTING SCAN (2 SHIPS)",
        Probe::Scan([false, true, false, true]),
        2,
    ),
    (
        "COUNTING SCAN (3 SHIPS)",
        Probe::Scan([true, true, true, false]),
        3,
    ),
];

/// Run the four known-answer checks against `engine`.
///
/// Engine failures are recorded in the report rather than returned, so the
/// report is always complete.
pub async fn run(engine: &SonarEngine) -> SelfCheckReport {
    let mut checks = Vec::with_capacity(CHECKS.len());

    for (label, probe, expected) in &CHECKS {
        let outcome = match probe {
            Probe::Ping(present) => engine.ping(*present).await,
            Probe::Scan(targets) => engine.count_scan(targets).await,
        };
        let check = match outcome {
            Ok(v) => Check {
                label: *label,
                expected: *expected,
                observed: Some(v),
                error: None,
            },
            Err(e) => Check {
                label: *label,
                expected: *expected,
                observed: None,
                error: Some(e.to_string()),
            },
        };
        if !check.passed() {
            warn!(%check, "self-check mismatch");
        }
        checks.push(check);
    }

    let status = if checks.iter().all(Check::passed) {
        Status::Nominal
    } else {
        Status::Fault
    };
    info!(%status, "engine self-check complete");

    SelfCheckReport { status, checks }
}
