//! Test-only fixtures: small layouts, scripted observers and pacers.

use std::cell::RefCell;
use std::time::Duration;

use anyhow::{Result, anyhow};

use crate::core::graph::GraphEnvironment;
use crate::core::layout::{LayoutConfig, RoomSpec};
use crate::driver::Observer;
use crate::io::pacing::Pacer;

/// `A: [B]`, `B: [A, C]`, `C: [B]`.
pub fn triangle_layout() -> LayoutConfig {
    LayoutConfig {
        rooms: vec![
            RoomSpec::new("A", &["B"], None),
            RoomSpec::new("B", &["A", "C"], None),
            RoomSpec::new("C", &["B"], None),
        ],
    }
}

pub fn triangle_env() -> GraphEnvironment {
    GraphEnvironment::new(&triangle_layout()).expect("triangle layout is valid")
}

pub fn room(name: &str) -> String {
    name.to_string()
}

/// Records every published `(position, step_index)` pair.
#[derive(Debug)]
pub struct RecordingObserver<P> {
    pub published: Vec<(P, usize)>,
}

impl<P> RecordingObserver<P> {
    pub fn new() -> Self {
        Self {
            published: Vec::new(),
        }
    }
}

impl<P> Default for RecordingObserver<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone> Observer<P> for RecordingObserver<P> {
    fn publish(&mut self, position: &P, step_index: usize) -> Result<()> {
        self.published.push((position.clone(), step_index));
        Ok(())
    }
}

/// Accepts `ok_publishes` positions, then fails as if the viewer was closed.
#[derive(Debug)]
pub struct FailingObserver {
    remaining: usize,
}

impl FailingObserver {
    pub fn after(ok_publishes: usize) -> Self {
        Self {
            remaining: ok_publishes,
        }
    }
}

impl<P> Observer<P> for FailingObserver {
    fn publish(&mut self, _position: &P, step_index: usize) -> Result<()> {
        if self.remaining == 0 {
            return Err(anyhow!("viewer closed at step {step_index}"));
        }
        self.remaining -= 1;
        Ok(())
    }
}

/// Records requested delays instead of sleeping.
#[derive(Debug, Default)]
pub struct CountingPacer {
    delays: RefCell<Vec<Duration>>,
}

impl CountingPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> usize {
        self.delays.borrow().len()
    }

    pub fn total(&self) -> Duration {
        self.delays.borrow().iter().sum()
    }
}

impl Pacer for CountingPacer {
    fn pause(&self, delay: Duration) {
        self.delays.borrow_mut().push(delay);
    }
}
