//! Bounded-grid environment: four direction vectors and an inclusive range.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::environment::Environment;
use crate::core::types::Candidate;
use crate::error::NavError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell in `direction`, saturating at the `i64` range.
    ///
    /// `GridBounds` never reaches `i64::MIN` or `i64::MAX`, so a saturated
    /// cell is always out of bounds.
    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
}

impl Direction {
    /// Canonical candidate order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];

    pub fn vector(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Right => "right",
            Direction::Left => "left",
        }
    }
}

/// Inclusive coordinate range per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridBounds {
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
}

impl Default for GridBounds {
    fn default() -> Self {
        Self {
            x_min: 0,
            x_max: 10,
            y_min: 0,
            y_max: 10,
        }
    }
}

impl GridBounds {
    /// Each axis must be non-empty and leave room for one step past either
    /// edge inside the `i64` range.
    pub fn validate(&self) -> Result<(), NavError> {
        for (axis, min, max) in [("x", self.x_min, self.x_max), ("y", self.y_min, self.y_max)] {
            if min == i64::MIN || max == i64::MAX {
                return Err(NavError::configuration(format!(
                    "{axis} bounds [{min}, {max}] must stay strictly inside the i64 range"
                )));
            }
        }
        if self.x_min >= self.x_max {
            return Err(NavError::configuration(format!(
                "degenerate x bounds: x_min {} must be < x_max {}",
                self.x_min, self.x_max
            )));
        }
        if self.y_min >= self.y_max {
            return Err(NavError::configuration(format!(
                "degenerate y bounds: y_min {} must be < y_max {}",
                self.y_min, self.y_max
            )));
        }
        Ok(())
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (self.x_min..=self.x_max).contains(&cell.x) && (self.y_min..=self.y_max).contains(&cell.y)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GridEnvironment {
    bounds: GridBounds,
}

impl GridEnvironment {
    pub fn new(bounds: GridBounds) -> Result<Self, NavError> {
        bounds.validate()?;
        Ok(Self { bounds })
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }
}

impl Environment for GridEnvironment {
    type Position = Cell;

    fn contains(&self, position: &Cell) -> bool {
        self.bounds.contains(*position)
    }

    // Out-of-range destinations are still offered so that they consume a bit.
    fn candidates(&self, position: &Cell) -> Vec<Candidate<Cell>> {
        Direction::ALL
            .iter()
            .map(|&direction| Candidate {
                label: direction.as_str().to_string(),
                destination: position.offset(direction),
                bounded: true,
            })
            .collect()
    }

    fn is_in_bounds(&self, position: &Cell) -> bool {
        self.bounds.contains(*position)
    }
}
