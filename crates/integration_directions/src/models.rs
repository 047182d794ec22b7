//! Typed directions models

use serde::{Deserialize, Serialize};

/// A parsed transit route candidate from the directions provider
///
/// Carries only what the wire format actually supplies; static metadata
/// (mode label, fare placeholder, operator) is attached by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionsRoute {
    /// Total travel time as reported by the provider ("2 hours 45 mins")
    pub duration: String,
    /// Human-readable step instructions, in travel order
    pub steps: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_serialization() {
        let route = DirectionsRoute {
            duration: "2 hours".to_string(),
            steps: vec!["Walk to station".to_string()],
        };
        let json = serde_json::to_string(&route).unwrap();
        assert!(json.contains("duration"));
        assert!(json.contains("Walk to station"));
    }
}
