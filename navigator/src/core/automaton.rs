//! Single-step decision automaton.
//!
//! Maps `(position, cursor)` to the next `(position, cursor)` by scanning the
//! environment's candidates in order and spending one signal bit per
//! candidate examined:
//!
//! - a `yes` bit commits to the candidate and ends the scan, unless the
//!   candidate is bounded and out of range, in which case the bit is spent and
//!   the scan continues;
//! - a `no` bit rejects the candidate and the scan continues;
//! - running out of signal before a candidate can be tested ends the scan as
//!   `Stalled` without charging for the untested candidate.

use crate::core::environment::Environment;
use crate::core::signal::ControlSignal;
use crate::core::types::{Decision, Query, StepOutcome, Verdict};
use crate::error::NavError;

/// Run one step from `position` with `cursor` bits already consumed.
///
/// Returns an error only for a sample outside `{0, 1}`.
pub fn decide<E: Environment>(
    env: &E,
    position: &E::Position,
    signal: &ControlSignal,
    cursor: usize,
) -> Result<Decision<E::Position>, NavError> {
    let mut cursor = cursor;
    let mut queries = Vec::new();

    for candidate in env.candidates(position) {
        if cursor >= signal.len() {
            return Ok(Decision {
                outcome: StepOutcome::Stalled {
                    position: position.clone(),
                    cursor,
                },
                queries,
            });
        }

        let bit = signal.peek(cursor)?;
        let read_at = cursor;
        cursor += 1;

        let verdict = if !bit.is_yes() {
            Verdict::Declined
        } else if candidate.bounded && !env.is_in_bounds(&candidate.destination) {
            Verdict::OffLimits
        } else {
            Verdict::Accepted
        };

        queries.push(Query {
            cursor: read_at,
            candidate: candidate.label,
            destination: candidate.destination.clone(),
            bit,
            verdict,
        });

        if verdict == Verdict::Accepted {
            return Ok(Decision {
                outcome: StepOutcome::Moved {
                    position: candidate.destination,
                    cursor,
                },
                queries,
            });
        }
    }

    Ok(Decision {
        outcome: StepOutcome::Stayed {
            position: position.clone(),
            cursor,
        },
        queries,
    })
}
