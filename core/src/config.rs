//! Map configuration
//!
//! Locations, positions and distances are supplied once at startup as a
//! [`MapConfig`], usually parsed from JSON. List order is significant: it
//! fixes the neighbor iteration order the uninformed engines follow.

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::AlgorithmError;
use crate::data_structures::graph::Position;

const ROMANIA_JSON: &str = include_str!("../data/romania.json");

/// A single named location and its outgoing roads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub name: String,

    /// Coordinates used by the straight-line heuristic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// `(neighbor, distance)` pairs in iteration order
    #[serde(default)]
    pub neighbors: Vec<(String, u32)>,
}

impl LocationConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: None,
            neighbors: Vec::new(),
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Position::new(x, y));
        self
    }

    pub fn road(mut self, neighbor: impl Into<String>, distance: u32) -> Self {
        self.neighbors.push((neighbor.into(), distance));
        self
    }
}

/// Complete map description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub locations: Vec<LocationConfig>,
}

impl MapConfig {
    /// Parses a configuration from its JSON form
    pub fn from_json(json: &str) -> Result<Self, AlgorithmError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, AlgorithmError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The classic twenty-city road map of Romania
    pub fn romania() -> Result<Self, AlgorithmError> {
        Self::from_json(ROMANIA_JSON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_romania_configuration_loads() {
        let config = MapConfig::romania().unwrap();
        assert_eq!(config.locations.len(), 20);

        let arad = &config.locations[0];
        assert_eq!(arad.name, "Arad");
        assert_eq!(arad.position, Some(Position::new(91.0, 492.0)));
        assert_eq!(
            arad.neighbors,
            vec![
                ("Zerind".to_string(), 75),
                ("Sibiu".to_string(), 140),
                ("Timisoara".to_string(), 118),
            ]
        );
    }

    #[test]
    fn test_optional_fields_default() {
        let config = MapConfig::from_json(r#"{"locations": [{"name": "Lonely"}]}"#).unwrap();
        assert_eq!(config.locations[0], LocationConfig::new("Lonely"));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = MapConfig::from_json(r#"{"locations": [{"name": 7}]}"#).unwrap_err();
        assert!(matches!(err, AlgorithmError::Config(_)));
    }

    #[test]
    fn test_builder_serializes_back() {
        let config = MapConfig {
            locations: vec![
                LocationConfig::new("A").at(0.0, 0.0).road("B", 5),
                LocationConfig::new("B").road("A", 5),
            ],
        };
        let json = config.to_json().unwrap();
        assert!(!json.contains("\"position\": null"));
        assert_eq!(MapConfig::from_json(&json).unwrap(), config);
    }
}
