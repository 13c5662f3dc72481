//! Named-graph environment: rooms joined by an ordered adjacency list.

use std::collections::HashMap;

use crate::core::environment::Environment;
use crate::core::invariants::validate_layout;
use crate::core::layout::{LayoutConfig, house_layout};
use crate::core::types::Candidate;
use crate::error::NavError;

#[derive(Debug, Clone)]
struct Room {
    name: String,
    neighbors: Vec<String>,
    coordinates: Option<[f64; 2]>,
}

/// Rooms and their ordered neighbors. Candidates are never bounded.
#[derive(Debug, Clone)]
pub struct GraphEnvironment {
    rooms: Vec<Room>,
    index: HashMap<String, usize>,
}

impl GraphEnvironment {
    /// Build from a layout, failing on any invariant violation.
    pub fn new(layout: &LayoutConfig) -> Result<Self, NavError> {
        let errors = validate_layout(layout);
        if !errors.is_empty() {
            return Err(NavError::configuration(format!(
                "invalid layout:\n- {}",
                errors.join("\n- ")
            )));
        }
        Ok(Self::from_checked(layout))
    }

    /// The built-in five-room house.
    pub fn house() -> Self {
        Self::from_checked(&house_layout())
    }

    fn from_checked(layout: &LayoutConfig) -> Self {
        let rooms: Vec<Room> = layout
            .rooms
            .iter()
            .map(|spec| Room {
                name: spec.name.clone(),
                neighbors: spec.neighbors.clone(),
                coordinates: spec.coordinates,
            })
            .collect();
        let index = rooms
            .iter()
            .enumerate()
            .map(|(i, room)| (room.name.clone(), i))
            .collect();
        Self { rooms, index }
    }

    /// Room names in declaration order.
    pub fn room_names(&self) -> impl Iterator<Item = &str> {
        self.rooms.iter().map(|room| room.name.as_str())
    }

    pub fn coordinates(&self, room: &str) -> Option<[f64; 2]> {
        self.room(room).and_then(|room| room.coordinates)
    }

    fn room(&self, name: &str) -> Option<&Room> {
        self.index.get(name).map(|&i| &self.rooms[i])
    }
}

impl Environment for GraphEnvironment {
    type Position = String;

    fn contains(&self, position: &String) -> bool {
        self.index.contains_key(position)
    }

    fn candidates(&self, position: &String) -> Vec<Candidate<String>> {
        let Some(room) = self.room(position) else {
            return Vec::new();
        };
        room.neighbors
            .iter()
            .map(|neighbor| Candidate {
                label: neighbor.clone(),
                destination: neighbor.clone(),
                bounded: false,
            })
            .collect()
    }

    fn is_in_bounds(&self, position: &String) -> bool {
        self.contains(position)
    }
}
