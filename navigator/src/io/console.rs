//! Line-oriented console observer.
//!
//! Prints one line per published position. This is product output on
//! stdout and is independent of `RUST_LOG`.

use std::collections::HashMap;
use std::fmt::Display;
use std::io::Write;

use anyhow::{Context, Result};

use crate::core::graph::GraphEnvironment;
use crate::driver::Observer;

pub struct ConsoleObserver<W: Write> {
    out: W,
    coordinates: HashMap<String, [f64; 2]>,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            coordinates: HashMap::new(),
        }
    }

    /// Annotate room positions with their display coordinates.
    pub fn with_room_coordinates(mut self, env: &GraphEnvironment) -> Self {
        self.coordinates = env
            .room_names()
            .filter_map(|name| env.coordinates(name).map(|xy| (name.to_string(), xy)))
            .collect();
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<P: Display, W: Write> Observer<P> for ConsoleObserver<W> {
    fn publish(&mut self, position: &P, step_index: usize) -> Result<()> {
        let label = position.to_string();
        let written = match self.coordinates.get(&label) {
            Some([x, y]) => writeln!(self.out, "step={step_index} position={label} at=({x}, {y})"),
            None => writeln!(self.out, "step={step_index} position={label}"),
        };
        written.context("write position")?;
        self.out.flush().context("flush position")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::Cell;

    #[test]
    fn prints_room_with_coordinates() {
        let env = GraphEnvironment::house();
        let mut observer = ConsoleObserver::new(Vec::new()).with_room_coordinates(&env);
        observer.publish(&"liv".to_string(), 0).expect("publish");
        observer.publish(&"ktc".to_string(), 1).expect("publish");
        let text = String::from_utf8(observer.into_inner()).expect("utf8");
        assert_eq!(
            text,
            "step=0 position=liv at=(3, 2.5)\nstep=1 position=ktc at=(8, 2.5)\n"
        );
    }

    #[test]
    fn prints_grid_cell() {
        let mut observer = ConsoleObserver::new(Vec::new());
        observer.publish(&Cell::new(2, 7), 4).expect("publish");
        let text = String::from_utf8(observer.into_inner()).expect("utf8");
        assert_eq!(text, "step=4 position=(2, 7)\n");
    }
}
