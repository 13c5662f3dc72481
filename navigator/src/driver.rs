//! Navigation driver: runs the automaton step by step over a whole signal.
//!
//! The driver owns every side effect of a run (observer publishing, pacing,
//! logging, cancellation). The automaton it calls stays pure.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::automaton::decide;
use crate::core::environment::Environment;
use crate::core::signal::ControlSignal;
use crate::core::types::{Query, StepOutcome, Verdict};
use crate::error::NavError;
use crate::io::pacing::Pacer;

/// Termination test applied to the cursor before each step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinalStep {
    /// Continue while `cursor <= len`. Performs one trailing no-op step once
    /// the signal is fully consumed.
    #[default]
    Inclusive,
    /// Continue while `cursor < len`.
    Exclusive,
}

impl FinalStep {
    pub fn continues(self, cursor: usize, len: usize) -> bool {
        match self {
            FinalStep::Inclusive => cursor <= len,
            FinalStep::Exclusive => cursor < len,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriveOptions {
    /// Delay after each published position. Zero skips pacing.
    pub pace: Duration,
    pub final_step: FinalStep,
}

/// Receives the subject's position after every driver step.
///
/// Step 0 is the start position. An error means the observer is gone; the
/// driver stops the run instead of failing it.
pub trait Observer<P> {
    fn publish(&mut self, position: &P, step_index: usize) -> Result<()>;
}

impl<P, F> Observer<P> for F
where
    F: FnMut(&P, usize) -> Result<()>,
{
    fn publish(&mut self, position: &P, step_index: usize) -> Result<()> {
        self(position, step_index)
    }
}

/// Cooperative cancellation flag shared with whoever may stop the run.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Reason why `navigate` stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    SignalExhausted,
    Cancelled,
    ObserverClosed,
}

impl StopReason {
    pub fn as_str(self) -> &'static str {
        match self {
            StopReason::SignalExhausted => "signal_exhausted",
            StopReason::Cancelled => "cancelled",
            StopReason::ObserverClosed => "observer_closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord<P> {
    /// 1-indexed; step 0 is the start position.
    pub index: usize,
    pub outcome: StepOutcome<P>,
    pub queries: Vec<Query<P>>,
}

/// Everything a run did, in order. Valid even when the run was cut short.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTrace<P> {
    pub start: P,
    pub steps: Vec<StepRecord<P>>,
    pub final_position: P,
    /// Driver loop counter; exceeds `signal_len` by one after a stall.
    pub final_cursor: usize,
    pub signal_len: usize,
    pub stop: StopReason,
}

impl<P> NavigationTrace<P> {
    /// Signal bits actually read during the run.
    pub fn bits_consumed(&self) -> usize {
        self.steps.iter().map(|step| step.queries.len()).sum()
    }

    /// Positions in publish order, starting with the start position.
    pub fn positions(&self) -> impl Iterator<Item = &P> {
        std::iter::once(&self.start).chain(self.steps.iter().map(|step| step.outcome.position()))
    }
}

/// Inputs for a single run.
pub struct NavigationRequest<'a, E: Environment> {
    pub env: &'a E,
    pub start: E::Position,
    pub signal: &'a ControlSignal,
    pub options: &'a DriveOptions,
}

/// Drive the subject from `request.start` until the signal is exhausted, the
/// run is cancelled, or the observer closes.
///
/// Fails on an unknown start position, on a signal sample outside `{0, 1}`,
/// and on a position that offers no candidates.
pub fn navigate<E, O, T>(
    request: &NavigationRequest<'_, E>,
    observer: &mut O,
    pacer: &T,
    cancel: &CancelToken,
) -> Result<NavigationTrace<E::Position>>
where
    E: Environment,
    O: Observer<E::Position>,
    T: Pacer,
{
    let env = request.env;
    let signal = request.signal;
    let len = signal.len();
    if !env.contains(&request.start) {
        return Err(NavError::configuration(format!(
            "unknown start position {}",
            request.start
        ))
        .into());
    }

    info!(start = %request.start, signal_len = len, "navigation started");
    let mut position = request.start.clone();
    let mut cursor = 0usize;
    let mut steps: Vec<StepRecord<E::Position>> = Vec::new();

    let stop = if publish(observer, &position, 0) {
        pacer.pause(request.options.pace);
        loop {
            if cancel.is_cancelled() {
                break StopReason::Cancelled;
            }
            if !request.options.final_step.continues(cursor, len) {
                break StopReason::SignalExhausted;
            }

            let index = steps.len() + 1;
            let decision = decide(env, &position, signal, cursor)
                .with_context(|| format!("step {index} from {position}"))?;
            log_queries(index, &position, &decision.queries);

            match &decision.outcome {
                StepOutcome::Moved {
                    position: next,
                    cursor: next_cursor,
                }
                | StepOutcome::Stayed {
                    position: next,
                    cursor: next_cursor,
                } => {
                    if decision.queries.is_empty() {
                        return Err(NavError::configuration(format!(
                            "position {position} offers no candidates"
                        ))
                        .into());
                    }
                    position = next.clone();
                    cursor = *next_cursor;
                }
                StepOutcome::Stalled {
                    cursor: stalled_at,
                    ..
                } => {
                    // Exhaustion counts as one virtual step so the loop always ends.
                    cursor = stalled_at + 1;
                }
            }
            debug!(
                step = index,
                outcome = decision.outcome.kind(),
                position = %position,
                cursor,
                "step finished"
            );

            steps.push(StepRecord {
                index,
                outcome: decision.outcome,
                queries: decision.queries,
            });

            if !publish(observer, &position, index) {
                break StopReason::ObserverClosed;
            }
            pacer.pause(request.options.pace);
        }
    } else {
        StopReason::ObserverClosed
    };

    info!(
        steps = steps.len(),
        position = %position,
        cursor,
        stop = stop.as_str(),
        "navigation stopped"
    );
    Ok(NavigationTrace {
        start: request.start.clone(),
        steps,
        final_position: position,
        final_cursor: cursor,
        signal_len: len,
        stop,
    })
}

fn publish<P: std::fmt::Display, O: Observer<P>>(
    observer: &mut O,
    position: &P,
    step_index: usize,
) -> bool {
    match observer.publish(position, step_index) {
        Ok(()) => true,
        Err(err) => {
            let message = format!("{err:#}");
            warn!(step = step_index, position = %position, error = %message, "observer failed; stopping run");
            false
        }
    }
}

fn log_queries<P: std::fmt::Display>(index: usize, position: &P, queries: &[Query<P>]) {
    for query in queries {
        debug!(
            step = index,
            cursor = query.cursor + 1,
            position = %position,
            candidate = %query.candidate,
            answer = %query.bit,
            "query"
        );
        if query.verdict == Verdict::OffLimits {
            debug!(
                step = index,
                destination = %query.destination,
                "off-limits point, current position maintained"
            );
        }
    }
}
