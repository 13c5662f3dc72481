//! Run-level tests for the decision automaton and the navigation driver.
//!
//! These drive `decide` and `navigate` over small graph and grid environments
//! to check the worked examples, bit accounting, boundary rejection, and
//! termination behaviour end to end.

use std::time::Duration;

use proptest::prelude::*;

use navigator::core::automaton::decide;
use navigator::core::environment::Environment;
use navigator::core::graph::GraphEnvironment;
use navigator::core::grid::{Cell, GridEnvironment};
use navigator::core::signal::ControlSignal;
use navigator::core::types::{StepOutcome, Verdict};
use navigator::driver::{
    CancelToken, DriveOptions, FinalStep, NavigationRequest, NavigationTrace, StopReason,
    navigate,
};
use navigator::io::pacing::NoPacing;
use navigator::test_support::{RecordingObserver, room, triangle_env};

fn run<E: Environment>(
    env: &E,
    start: E::Position,
    samples: &[i64],
    final_step: FinalStep,
) -> NavigationTrace<E::Position> {
    let signal = ControlSignal::new(samples.to_vec());
    let options = DriveOptions {
        pace: Duration::ZERO,
        final_step,
    };
    navigate(
        &NavigationRequest {
            env,
            start,
            signal: &signal,
            options: &options,
        },
        &mut RecordingObserver::new(),
        &NoPacing,
        &CancelToken::new(),
    )
    .expect("navigate")
}

const HOUSE_ROOMS: [&str; 5] = ["yrd", "liv", "ktc", "bed", "bat"];

fn bits() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..=1, 0..64)
}

fn house_room() -> impl Strategy<Value = String> {
    prop::sample::select(HOUSE_ROOMS.to_vec()).prop_map(str::to_string)
}

fn grid_cell() -> impl Strategy<Value = Cell> {
    (0i64..=10, 0i64..=10).prop_map(|(x, y)| Cell::new(x, y))
}

fn final_step() -> impl Strategy<Value = FinalStep> {
    prop_oneof![Just(FinalStep::Inclusive), Just(FinalStep::Exclusive)]
}

#[test]
fn graph_yes_moves_to_first_neighbor() {
    let decision = decide(&triangle_env(), &room("A"), &ControlSignal::new(vec![1]), 0)
        .expect("decide");
    assert_eq!(
        decision.outcome,
        StepOutcome::Moved {
            position: room("B"),
            cursor: 1
        }
    );
}

#[test]
fn graph_stall_keeps_position_and_cursor_at_exhaustion_point() {
    let decision = decide(&triangle_env(), &room("B"), &ControlSignal::new(vec![0]), 0)
        .expect("decide");
    assert_eq!(
        decision.outcome,
        StepOutcome::Stalled {
            position: room("B"),
            cursor: 1
        }
    );
}

#[test]
fn graph_all_no_stays() {
    let decision = decide(
        &triangle_env(),
        &room("B"),
        &ControlSignal::new(vec![0, 0]),
        0,
    )
    .expect("decide");
    assert_eq!(
        decision.outcome,
        StepOutcome::Stayed {
            position: room("B"),
            cursor: 2
        }
    );
}

/// From (0,0): up=0 (declined), down=1 but (0,-1) is off limits. Both bits are
/// spent and the position is kept. The two-bit signal then runs out before
/// `right` can be tested, so the scan ends as a stall; with bits for every
/// direction it ends as a stay.
#[test]
fn grid_boundary_rejection_spends_bit_and_keeps_position() {
    let env = GridEnvironment::default();
    let origin = Cell::new(0, 0);

    let short = decide(&env, &origin, &ControlSignal::new(vec![0, 1]), 0).expect("decide");
    assert_eq!(short.outcome.position(), &origin);
    assert_eq!(short.outcome.cursor(), 2);
    assert!(short.outcome.is_stalled());
    assert_eq!(short.queries[1].verdict, Verdict::OffLimits);

    let full = decide(&env, &origin, &ControlSignal::new(vec![0, 1, 0, 0]), 0).expect("decide");
    assert_eq!(
        full.outcome,
        StepOutcome::Stayed {
            position: origin,
            cursor: 4
        }
    );
    assert_eq!(
        full.queries
            .iter()
            .filter(|query| query.verdict == Verdict::OffLimits)
            .count(),
        1
    );
}

#[test]
fn boundary_rejection_charges_exactly_one_bit() {
    let env = GridEnvironment::default();
    // left from (0,5) is off limits: up=no, down=no, right=no, left=yes.
    let decision = decide(
        &env,
        &Cell::new(0, 5),
        &ControlSignal::new(vec![0, 0, 0, 1, 1]),
        0,
    )
    .expect("decide");
    assert_eq!(
        decision.outcome,
        StepOutcome::Stayed {
            position: Cell::new(0, 5),
            cursor: 4
        }
    );
    assert_eq!(decision.queries.len(), 4);
}

#[test]
fn corner_walk_on_grid_respects_bounds() {
    let env = GridEnvironment::default();
    // Repeated "up" answers from (5,9): first reaches (5,10), then up is off limits.
    let trace = run(
        &env,
        Cell::new(5, 9),
        &[1, 1, 0, 0, 0],
        FinalStep::Inclusive,
    );
    assert_eq!(
        trace.steps[0].outcome,
        StepOutcome::Moved {
            position: Cell::new(5, 10),
            cursor: 1
        }
    );
    assert_eq!(
        trace.steps[1].outcome,
        StepOutcome::Stayed {
            position: Cell::new(5, 10),
            cursor: 5
        }
    );
    assert_eq!(trace.final_position, Cell::new(5, 10));
    assert!(trace.positions().all(|cell| env.is_in_bounds(cell)));
}

#[test]
fn house_tour_follows_adjacency_order() {
    let env = GraphEnvironment::house();
    // liv: yrd=no, ktc=no, bed=yes -> bed; bed: bat=yes -> bat; bat: bed=no -> stays.
    let trace = run(&env, room("liv"), &[0, 0, 1, 1, 0], FinalStep::Inclusive);
    let visited: Vec<&String> = trace.positions().collect();
    assert_eq!(visited, vec!["liv", "bed", "bat", "bat", "bat"]);
    assert_eq!(trace.bits_consumed(), 5);
    assert_eq!(trace.stop, StopReason::SignalExhausted);
}

proptest! {
    /// Same environment, start and signal always give the same trace.
    #[test]
    fn prop_runs_are_deterministic(samples in bits(), start in house_room()) {
        let env = GraphEnvironment::house();
        let first = run(&env, start.clone(), &samples, FinalStep::Inclusive);
        let second = run(&env, start, &samples, FinalStep::Inclusive);
        prop_assert_eq!(first, second);
    }

    /// Graph runs charge one bit per query and read the signal strictly forward.
    #[test]
    fn prop_graph_bit_accounting(
        samples in bits(),
        start in house_room(),
        bound in final_step(),
    ) {
        let trace = run(&GraphEnvironment::house(), start, &samples, bound);
        check_bit_accounting(&trace)?;
    }

    /// Grid runs keep the same accounting and never leave the bounds.
    #[test]
    fn prop_grid_bit_accounting(
        samples in bits(),
        start in grid_cell(),
        bound in final_step(),
    ) {
        let env = GridEnvironment::default();
        let trace = run(&env, start, &samples, bound);
        check_bit_accounting(&trace)?;
        prop_assert!(trace.positions().all(|cell| env.is_in_bounds(cell)));
    }

    /// The trailing inclusive step never moves the subject or spends a bit.
    #[test]
    fn prop_inclusive_and_exclusive_agree(samples in bits(), start in house_room()) {
        let env = GraphEnvironment::house();
        let inclusive = run(&env, start.clone(), &samples, FinalStep::Inclusive);
        let exclusive = run(&env, start, &samples, FinalStep::Exclusive);
        prop_assert_eq!(&inclusive.final_position, &exclusive.final_position);
        prop_assert_eq!(inclusive.bits_consumed(), exclusive.bits_consumed());
        prop_assert!(inclusive.steps.len() >= exclusive.steps.len());
    }
}

fn check_bit_accounting<P>(trace: &NavigationTrace<P>) -> Result<(), TestCaseError> {
    let mut cursor = 0usize;
    for step in &trace.steps {
        let start = step.queries.first().map_or(step.outcome.cursor(), |q| q.cursor);
        prop_assert!(start >= cursor, "cursor went backwards");
        prop_assert_eq!(step.outcome.cursor() - start, step.queries.len());
        for (offset, query) in step.queries.iter().enumerate() {
            prop_assert_eq!(query.cursor, start + offset);
        }
        if let StepOutcome::Moved { .. } = step.outcome {
            prop_assert_eq!(
                step.queries.last().map(|q| q.verdict),
                Some(Verdict::Accepted)
            );
        }
        cursor = step.outcome.cursor();
    }
    prop_assert!(trace.bits_consumed() <= trace.signal_len);
    prop_assert_eq!(trace.stop, StopReason::SignalExhausted);
    // At most one step per bit plus the trailing stall.
    prop_assert!(trace.steps.len() <= trace.signal_len + 1);
    Ok(())
}
