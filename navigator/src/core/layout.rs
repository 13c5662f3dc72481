//! Room layout description for the named-graph environment.

use serde::{Deserialize, Serialize};

/// Ordered list of rooms. Room order is preserved for reporting; neighbor
/// order defines candidate order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub rooms: Vec<RoomSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub name: String,
    pub neighbors: Vec<String>,
    /// Display coordinates for observers; never read by the automaton.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<[f64; 2]>,
}

impl RoomSpec {
    pub fn new(name: &str, neighbors: &[&str], coordinates: Option<[f64; 2]>) -> Self {
        Self {
            name: name.to_string(),
            neighbors: neighbors.iter().map(|n| n.to_string()).collect(),
            coordinates,
        }
    }
}

/// Name of the built-in floor plan.
pub const HOUSE: &str = "house";

/// Five-room house: yard, living room, kitchen, bedroom, bathroom.
pub fn house_layout() -> LayoutConfig {
    LayoutConfig {
        rooms: vec![
            RoomSpec::new("yrd", &["liv"], Some([5.0, -2.0])),
            RoomSpec::new("liv", &["yrd", "ktc", "bed"], Some([3.0, 2.5])),
            RoomSpec::new("ktc", &["liv"], Some([8.0, 2.5])),
            RoomSpec::new("bed", &["bat", "liv"], Some([6.5, 7.5])),
            RoomSpec::new("bat", &["bed"], Some([1.5, 8.5])),
        ],
    }
}
