//! Shared deterministic types for the navigation core.
//!
//! These types define stable contracts between the environment, the decision
//! automaton and the driver. They carry no references to I/O and serialize to
//! a stable shape for trace files.

use serde::{Deserialize, Serialize};

use crate::core::signal::Bit;

/// One move option offered from a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate<P> {
    /// Room name or direction name, used for reporting only.
    pub label: String,
    pub destination: P,
    /// Bounded candidates must pass the environment's range check to be accepted.
    pub bounded: bool,
}

/// Result of one automaton step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum StepOutcome<P> {
    /// A candidate was accepted; `position` is the destination.
    Moved { position: P, cursor: usize },
    /// Every candidate was examined and none was accepted.
    Stayed { position: P, cursor: usize },
    /// The signal ran out before the scan completed.
    Stalled { position: P, cursor: usize },
}

impl<P> StepOutcome<P> {
    pub fn position(&self) -> &P {
        match self {
            StepOutcome::Moved { position, .. }
            | StepOutcome::Stayed { position, .. }
            | StepOutcome::Stalled { position, .. } => position,
        }
    }

    pub fn cursor(&self) -> usize {
        match self {
            StepOutcome::Moved { cursor, .. }
            | StepOutcome::Stayed { cursor, .. }
            | StepOutcome::Stalled { cursor, .. } => *cursor,
        }
    }

    pub fn is_moved(&self) -> bool {
        matches!(self, StepOutcome::Moved { .. })
    }

    pub fn is_stalled(&self) -> bool {
        matches!(self, StepOutcome::Stalled { .. })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StepOutcome::Moved { .. } => "moved",
            StepOutcome::Stayed { .. } => "stayed",
            StepOutcome::Stalled { .. } => "stalled",
        }
    }
}

/// How a single examined candidate was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    Declined,
    /// Answered "yes" but the destination is out of range.
    OffLimits,
}

/// One candidate examination: the bit read at `cursor` and what it decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query<P> {
    pub cursor: usize,
    pub candidate: String,
    pub destination: P,
    pub bit: Bit,
    pub verdict: Verdict,
}

/// Full result of one step: the outcome plus the queries that led to it.
///
/// `queries.len()` always equals the number of bits the step consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision<P> {
    pub outcome: StepOutcome<P>,
    pub queries: Vec<Query<P>>,
}
