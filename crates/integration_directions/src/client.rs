//! Google Directions client
//!
//! Fetches transit route alternatives between two place names and flattens
//! each route's legs into human-readable step instructions.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::DirectionsConfig;
use crate::error::DirectionsError;
use crate::models::DirectionsRoute;

/// Trait for directions service clients
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Fetch transit route candidates between two free-form place names
    async fn fetch_transit_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<DirectionsRoute>, DirectionsError>;
}

/// Directions client backed by the Google Directions API
#[derive(Debug)]
pub struct GoogleDirectionsClient {
    client: Client,
    config: DirectionsConfig,
}

impl GoogleDirectionsClient {
    /// Create a new directions client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &DirectionsConfig) -> Result<Self, DirectionsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("Yatri/1.0")
            .build()
            .map_err(|e| DirectionsError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Parse the raw directions JSON into typed routes
    ///
    /// A non-"OK" provider status is an error even when the HTTP call
    /// succeeded. Routes without legs are skipped.
    fn parse_response(body: &str, max_routes: usize) -> Result<Vec<DirectionsRoute>, DirectionsError> {
        let raw: RawDirectionsResponse =
            serde_json::from_str(body).map_err(|e| DirectionsError::ParseError(e.to_string()))?;

        if raw.status != "OK" {
            return Err(DirectionsError::ProviderStatus { status: raw.status });
        }

        Ok(raw
            .routes
            .into_iter()
            .take(max_routes)
            .filter_map(Self::convert_route)
            .collect())
    }

    /// Convert a raw route to a typed route, taking the first leg
    fn convert_route(raw: RawRoute) -> Option<DirectionsRoute> {
        let leg = raw.legs.into_iter().next()?;
        let steps = leg.steps.into_iter().map(Self::convert_step).collect();

        Some(DirectionsRoute {
            duration: leg.duration.text,
            steps,
        })
    }

    /// Render one step as a human-readable instruction
    ///
    /// Transit steps are synthesized from line and stop names; other steps
    /// use the provider's instruction text with markup stripped.
    fn convert_step(raw: RawStep) -> String {
        if raw.travel_mode == "TRANSIT" {
            if let Some(transit) = raw.transit_details {
                return format!(
                    "Take {} from {} to {}",
                    transit.line.name, transit.departure_stop.name, transit.arrival_stop.name
                );
            }
        }

        strip_markup(raw.html_instructions.as_deref().unwrap_or_default())
    }
}

#[async_trait]
impl DirectionsClient for GoogleDirectionsClient {
    #[instrument(skip(self), fields(origin = %origin, destination = %destination))]
    async fn fetch_transit_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<DirectionsRoute>, DirectionsError> {
        let params = [
            ("origin", origin),
            ("destination", destination),
            ("mode", "transit"),
            ("alternatives", "true"),
            ("key", self.config.api_key.expose_secret()),
        ];

        debug!(url = %self.config.base_url, "Fetching transit routes");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DirectionsError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    DirectionsError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectionsError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DirectionsError::ParseError(e.to_string()))?;

        let routes = Self::parse_response(&body, self.config.max_routes)?;

        if routes.is_empty() {
            warn!("Provider returned no usable routes");
        }

        debug!(count = routes.len(), "Routes fetched");
        Ok(routes)
    }
}

/// Remove HTML-style markup tags from an instruction string
fn strip_markup(instruction: &str) -> String {
    let mut out = String::with_capacity(instruction.len());
    let mut in_tag = false;

    for ch in instruction.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {},
        }
    }

    out
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawDirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    legs: Vec<RawLeg>,
}

#[derive(Debug, Deserialize)]
struct RawLeg {
    duration: RawTextValue,
    #[serde(default)]
    steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
struct RawTextValue {
    text: String,
}

#[derive(Debug, Deserialize)]
struct RawStep {
    travel_mode: String,
    html_instructions: Option<String>,
    transit_details: Option<RawTransitDetails>,
}

#[derive(Debug, Deserialize)]
struct RawTransitDetails {
    line: RawLine,
    departure_stop: RawStop,
    arrival_stop: RawStop,
}

#[derive(Debug, Deserialize)]
struct RawLine {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawStop {
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("Walk to <b>Dadar</b> station"), "Walk to Dadar station");
        assert_eq!(
            strip_markup(r#"Turn left<div style="font-size:0.9em">onto MG Road</div>"#),
            "Turn leftonto MG Road"
        );
        assert_eq!(strip_markup("No markup here"), "No markup here");
    }

    #[test]
    fn test_parse_response_transit_step() {
        let json = r#"{
            "status": "OK",
            "routes": [{
                "legs": [{
                    "duration": { "text": "2 hours 45 mins", "value": 9900 },
                    "steps": [
                        {
                            "travel_mode": "WALKING",
                            "html_instructions": "Walk to <b>CST</b> station"
                        },
                        {
                            "travel_mode": "TRANSIT",
                            "html_instructions": "Train towards Pune",
                            "transit_details": {
                                "line": { "name": "Deccan Express" },
                                "departure_stop": { "name": "Mumbai CST" },
                                "arrival_stop": { "name": "Pune Junction" }
                            }
                        }
                    ]
                }]
            }]
        }"#;

        let routes = GoogleDirectionsClient::parse_response(json, 5).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].duration, "2 hours 45 mins");
        assert_eq!(routes[0].steps[0], "Walk to CST station");
        assert_eq!(
            routes[0].steps[1],
            "Take Deccan Express from Mumbai CST to Pune Junction"
        );
    }

    #[test]
    fn test_parse_response_not_ok_status() {
        let json = r#"{ "status": "ZERO_RESULTS", "routes": [] }"#;
        let err = GoogleDirectionsClient::parse_response(json, 5).unwrap_err();
        match err {
            DirectionsError::ProviderStatus { status } => assert_eq!(status, "ZERO_RESULTS"),
            other => unreachable!("Expected ProviderStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_response_caps_route_count() {
        let route = r#"{
            "legs": [{ "duration": { "text": "1 hour" }, "steps": [] }]
        }"#;
        let json = format!(
            r#"{{ "status": "OK", "routes": [{route}, {route}, {route}] }}"#
        );

        let routes = GoogleDirectionsClient::parse_response(&json, 2).unwrap();
        assert_eq!(routes.len(), 2);
    }

    #[test]
    fn test_parse_response_skips_route_without_legs() {
        let json = r#"{
            "status": "OK",
            "routes": [
                { "legs": [] },
                { "legs": [{ "duration": { "text": "1 hour" }, "steps": [] }] }
            ]
        }"#;

        let routes = GoogleDirectionsClient::parse_response(json, 5).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].duration, "1 hour");
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = GoogleDirectionsClient::parse_response("not json", 5);
        assert!(matches!(result, Err(DirectionsError::ParseError(_))));
    }

    #[test]
    fn test_transit_step_without_details_falls_back_to_instructions() {
        let step = RawStep {
            travel_mode: "TRANSIT".to_string(),
            html_instructions: Some("Board the <b>local</b>".to_string()),
            transit_details: None,
        };
        assert_eq!(GoogleDirectionsClient::convert_step(step), "Board the local");
    }
}
