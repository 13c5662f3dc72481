//! Construction-time invariants for room layouts.

use std::collections::HashSet;

use crate::core::layout::LayoutConfig;

/// Check layout invariants:
/// - At least one room
/// - Non-empty, unique room names
/// - Every room has at least one neighbor
/// - Neighbors refer to declared rooms and are not repeated
pub fn validate_layout(layout: &LayoutConfig) -> Vec<String> {
    let mut errors = Vec::new();
    if layout.rooms.is_empty() {
        errors.push("layout must declare at least one room".to_string());
        return errors;
    }

    let mut declared = HashSet::new();
    for room in &layout.rooms {
        if room.name.trim().is_empty() {
            errors.push("room name must be non-empty".to_string());
        } else if !declared.insert(room.name.as_str()) {
            errors.push(format!("duplicate room '{}'", room.name));
        }
    }

    for room in &layout.rooms {
        if room.neighbors.is_empty() {
            errors.push(format!("{}: must list at least one neighbor", room.name));
        }
        let mut seen = HashSet::new();
        for neighbor in &room.neighbors {
            if !declared.contains(neighbor.as_str()) {
                errors.push(format!("{}: unknown neighbor '{}'", room.name, neighbor));
            }
            if !seen.insert(neighbor.as_str()) {
                errors.push(format!("{}: neighbor '{}' listed twice", room.name, neighbor));
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::{RoomSpec, house_layout};

    #[test]
    fn house_layout_is_valid() {
        assert!(validate_layout(&house_layout()).is_empty());
    }

    #[test]
    fn empty_layout_is_rejected() {
        let errors = validate_layout(&LayoutConfig { rooms: Vec::new() });
        assert_eq!(errors, vec!["layout must declare at least one room"]);
    }

    #[test]
    fn reports_every_violation() {
        let layout = LayoutConfig {
            rooms: vec![
                RoomSpec::new("a", &["b", "ghost"], None),
                RoomSpec::new("b", &[], None),
                RoomSpec::new("a", &["b", "b"], None),
            ],
        };
        let errors = validate_layout(&layout);
        assert!(errors.iter().any(|err| err.contains("duplicate room 'a'")));
        assert!(errors.iter().any(|err| err.contains("unknown neighbor 'ghost'")));
        assert!(errors.iter().any(|err| err.contains("b: must list")));
        assert!(errors.iter().any(|err| err.contains("listed twice")));
    }
}
