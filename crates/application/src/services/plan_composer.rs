//! Plan composer - Narrative travel plans from route candidates
//!
//! Builds the instruction block for the LLM and handles the two
//! composition paths: live generation when an inference credential is
//! configured, deterministic rendering otherwise.

use std::{fmt, sync::Arc};

use domain::{Preferences, TransitRoute};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::InferencePort;

/// Stable prefix carried by every composition failure message
const COMPOSITION_ERROR_PREFIX: &str = "Error generating trip plan";

/// Notice appended to deterministic plans when no LLM is configured
const AI_UNAVAILABLE_NOTICE: &str =
    "Note: AI features are not available. Set the YATRI_INFERENCE_API_KEY environment variable to enable them.";

/// Service that turns route candidates into a travel plan narrative
pub struct PlanComposer {
    inference: Option<Arc<dyn InferencePort>>,
}

impl fmt::Debug for PlanComposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanComposer")
            .field("live_inference", &self.inference.is_some())
            .finish()
    }
}

impl PlanComposer {
    /// Create a composer backed by a live inference port
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self {
            inference: Some(inference),
        }
    }

    /// Create a composer that only renders deterministic plans
    pub fn without_inference() -> Self {
        Self { inference: None }
    }

    /// Compose a travel plan for the given routes
    ///
    /// Without an inference provider this renders the deterministic plan
    /// and cannot fail. With one, a provider error propagates as a
    /// composition failure carrying the provider's message; there is no
    /// deterministic substitute once the provider was expected to answer.
    #[instrument(skip(self, preferences, routes), fields(route_count = routes.len()))]
    pub async fn compose_plan(
        &self,
        origin: &str,
        destination: &str,
        preferences: &Preferences,
        routes: &[TransitRoute],
    ) -> Result<String, ApplicationError> {
        let Some(inference) = &self.inference else {
            debug!("No inference provider configured, rendering deterministic plan");
            return Ok(render_fallback_plan(origin, destination, routes));
        };

        let prompt = build_prompt(origin, destination, preferences, routes);
        let plan = inference.generate(&prompt).await.map_err(|error| {
            ApplicationError::Composition(format!("{COMPOSITION_ERROR_PREFIX}: {error}"))
        })?;

        Ok(plan)
    }
}

/// Render the deterministic plan used when no LLM is configured
fn render_fallback_plan(origin: &str, destination: &str, routes: &[TransitRoute]) -> String {
    let mut plan = format!("Travel Plan from {origin} to {destination}\n\nAvailable Routes:\n");

    for (i, route) in routes.iter().enumerate() {
        let cost = route.cost.as_deref().unwrap_or("Unknown");
        plan.push_str(&format!(
            "\n{}. {} - {} - {}\n{}\n",
            i + 1,
            route.mode,
            route.duration,
            cost,
            route.details
        ));
    }

    plan.push('\n');
    plan.push_str(AI_UNAVAILABLE_NOTICE);
    plan
}

/// Render the instruction block sent to the LLM
fn build_prompt(
    origin: &str,
    destination: &str,
    preferences: &Preferences,
    routes: &[TransitRoute],
) -> String {
    let mut routes_text = String::new();
    for (i, route) in routes.iter().enumerate() {
        routes_text.push_str(&format!("Route {}: {} - {}\n", i + 1, route.mode, route.details));
        if !route.duration.is_empty() {
            routes_text.push_str(&format!("  Duration: {}\n", route.duration));
        }
        if let Some(cost) = &route.cost {
            routes_text.push_str(&format!("  Cost: {cost}\n"));
        }
        routes_text.push('\n');
    }

    let preferences_text =
        serde_json::to_string(preferences).unwrap_or_else(|_| "{}".to_string());

    format!(
        "You are a helpful travel assistant specializing in India. Based on the following information, create a comprehensive travel plan:\n\n\
        Origin: {origin}\n\
        Destination: {destination}\n\
        User Preferences: {preferences_text}\n\n\
        Available Public Transport Routes:\n{routes_text}\n\
        Please provide a detailed travel plan that includes:\n\
        1. Route Recommendations: Suggest the best route based on user preferences (budget, time, comfort)\n\
        2. Step-by-Step Instructions: Clear directions for each recommended route\n\
        3. India-Specific Tips:\n\
           - Best times to travel (avoiding peak hours and rush times)\n\
           - Local transport connections (auto, share auto, local buses)\n\
           - Important landmarks and transport hubs\n\
           - Weather considerations and seasonal factors\n\
           - Cultural sites to visit along the way\n\
           - Regional language phrases that might be helpful\n\
        4. Cost Breakdown: Detailed cost analysis in Indian Rupees (₹)\n\
        5. Safety Tips: Important safety considerations for travelers in India\n\
        6. Alternative Options: Backup plans if primary route is not available\n\
        7. Local Insights:\n\
           - Best places to eat near transport hubs\n\
           - Local customs and etiquette\n\
           - Emergency contacts and helpline numbers\n\
           - Mobile network coverage areas\n\
        8. Accessibility Information: If user has accessibility needs\n\
        9. Booking Information:\n\
           - How to book tickets online (IRCTC, redBus, etc.)\n\
           - Advance booking requirements\n\
           - Cancellation policies\n\
        10. Real-time Updates:\n\
           - How to check for delays and cancellations\n\
           - Live tracking options\n\
           - Customer service contacts\n\
        Make the response practical, culturally aware, and specific to Indian travel. Use a friendly, engaging tone and focus on accuracy and reliability of information."
    )
}
