//! Trip planning entities

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Arbitrary user preferences attached to a trip request
///
/// Keys and values are free-form; the service passes them through to the
/// plan composition step without interpreting them.
pub type Preferences = serde_json::Map<String, serde_json::Value>;

/// An inbound request to plan a trip between two places
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Starting point (free-form place name)
    pub origin: String,
    /// Destination (free-form place name)
    pub destination: String,
    /// User preferences (budget, comfort, timing, ...)
    #[serde(default)]
    pub preferences: Preferences,
}

impl TripRequest {
    /// Create a request without preferences
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            preferences: Preferences::new(),
        }
    }

    /// Attach preferences to the request
    #[must_use]
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Check that origin and destination are non-blank
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.origin.trim().is_empty() {
            return Err(DomainError::blank_field("origin"));
        }
        if self.destination.trim().is_empty() {
            return Err(DomainError::blank_field("destination"));
        }
        Ok(())
    }
}

/// One candidate way to travel from origin to destination
///
/// Duration and cost are free-form text ("3-8 hours", "₹80-400") because
/// upstream providers report ranges, not point estimates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitRoute {
    /// Transport mode label (e.g. "State Transport Bus")
    pub mode: String,
    /// Total travel time as reported or estimated
    pub duration: String,
    /// Fare estimate, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    /// Human-readable route description
    pub details: String,
    /// Step-by-step guidance, in travel order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
    /// Operating company or service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    /// How often the service runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    /// Comfort rating label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comfort: Option<String>,
    /// How reliable the schedule information is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<String>,
}

impl TransitRoute {
    /// Create a route with the required fields
    pub fn new(
        mode: impl Into<String>,
        duration: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            mode: mode.into(),
            duration: duration.into(),
            cost: None,
            details: details.into(),
            steps: Vec::new(),
            operator: None,
            frequency: None,
            comfort: None,
            accuracy: None,
        }
    }

    /// Set the fare estimate
    #[must_use]
    pub fn with_cost(mut self, cost: impl Into<String>) -> Self {
        self.cost = Some(cost.into());
        self
    }

    /// Set the step-by-step guidance
    #[must_use]
    pub fn with_steps(mut self, steps: Vec<String>) -> Self {
        self.steps = steps;
        self
    }

    /// Set the operator name
    #[must_use]
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    /// Set the service frequency text
    #[must_use]
    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = Some(frequency.into());
        self
    }

    /// Set the comfort rating label
    #[must_use]
    pub fn with_comfort(mut self, comfort: impl Into<String>) -> Self {
        self.comfort = Some(comfort.into());
        self
    }

    /// Set the schedule accuracy label
    #[must_use]
    pub fn with_accuracy(mut self, accuracy: impl Into<String>) -> Self {
        self.accuracy = Some(accuracy.into());
        self
    }
}

/// The assembled answer to a trip request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripResponse {
    /// Composed natural-language travel plan
    pub plan: String,
    /// Route candidates, ordered by relevance
    pub routes_data: Vec<TransitRoute>,
}
