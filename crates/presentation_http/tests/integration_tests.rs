//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use application::{
    ApplicationError, PlanComposer, RouteCatalog, TripPlannerService,
    ports::{InferencePort, RoutePort},
};
use async_trait::async_trait;
use axum_test::TestServer;
use domain::TransitRoute;
use presentation_http::{routes::create_router, state::AppState};
use serde_json::{Value, json};

/// Route port stub counting invocations
struct StubRoutePort {
    routes: Vec<TransitRoute>,
    calls: Arc<AtomicUsize>,
}

impl StubRoutePort {
    fn new(routes: Vec<TransitRoute>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                routes,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

#[async_trait]
impl RoutePort for StubRoutePort {
    async fn fetch_routes(
        &self,
        _origin: &str,
        _destination: &str,
    ) -> Result<Vec<TransitRoute>, ApplicationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.routes.clone())
    }
}

/// Inference port stub that either answers or fails
struct StubInference {
    response: Result<String, String>,
}

#[async_trait]
impl InferencePort for StubInference {
    async fn generate(&self, _prompt: &str) -> Result<String, ApplicationError> {
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(ApplicationError::ExternalService(message.clone())),
        }
    }
}

fn server_without_credentials() -> TestServer {
    let state = AppState {
        trip_planner: Arc::new(TripPlannerService::new(
            RouteCatalog::without_live_provider(),
            PlanComposer::without_inference(),
        )),
    };
    TestServer::new(create_router(state)).expect("router should build")
}

#[tokio::test]
async fn root_returns_liveness_message() {
    let server = server_without_credentials();

    let response = server.get("/").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body["message"].as_str().expect("message").contains("running"));
}

#[tokio::test]
async fn health_returns_healthy_status() {
    let server = server_without_credentials();

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "healthy" }));
}

#[tokio::test]
async fn plan_trip_without_credentials_serves_fallback() {
    let server = server_without_credentials();

    let response = server
        .post("/plan-trip")
        .json(&json!({
            "origin": "Delhi",
            "destination": "Jaipur",
            "preferences": {}
        }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    let plan = body["plan"].as_str().expect("plan");
    assert!(plan.contains("AI features are not available"));

    let routes = body["routes_data"].as_array().expect("routes_data");
    assert!(!routes.is_empty());
    assert_eq!(routes[0]["mode"], "State Transport Bus");
    assert!(
        routes[0]["details"]
            .as_str()
            .expect("details")
            .contains("Delhi")
    );
}

#[tokio::test]
async fn plan_trip_with_live_route_provider() {
    let (port, _calls) = StubRoutePort::new(vec![
        TransitRoute::new(
            "Google Maps Transit",
            "2 hours 45 mins",
            "Google Maps suggested route from Mumbai to Pune",
        )
        .with_cost("₹50-200"),
    ]);

    let state = AppState {
        trip_planner: Arc::new(TripPlannerService::new(
            RouteCatalog::new(Arc::new(port)),
            PlanComposer::without_inference(),
        )),
    };
    let server = TestServer::new(create_router(state)).expect("router should build");

    let response = server
        .post("/plan-trip")
        .json(&json!({ "origin": "Mumbai", "destination": "Pune" }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    let routes = body["routes_data"].as_array().expect("routes_data");
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0]["mode"], "Google Maps Transit");

    let details = routes[0]["details"].as_str().expect("details");
    assert!(details.contains("Mumbai"));
    assert!(details.contains("Pune"));
}

#[tokio::test]
async fn plan_trip_rejects_missing_destination_before_any_provider_call() {
    let (port, calls) = StubRoutePort::new(Vec::new());

    let state = AppState {
        trip_planner: Arc::new(TripPlannerService::new(
            RouteCatalog::new(Arc::new(port)),
            PlanComposer::without_inference(),
        )),
    };
    let server = TestServer::new(create_router(state)).expect("router should build");

    let response = server
        .post("/plan-trip")
        .json(&json!({ "origin": "Delhi" }))
        .await;

    assert!(response.status_code().is_client_error());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn plan_trip_rejects_blank_origin_with_detail() {
    let server = server_without_credentials();

    let response = server
        .post("/plan-trip")
        .json(&json!({ "origin": "   ", "destination": "Jaipur" }))
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert!(body["detail"].as_str().expect("detail").contains("origin"));
}

#[tokio::test]
async fn plan_trip_surfaces_composition_failure_as_500_with_detail() {
    let inference = StubInference {
        response: Err("Server error: Status 503: model overloaded".to_string()),
    };

    let state = AppState {
        trip_planner: Arc::new(TripPlannerService::new(
            RouteCatalog::without_live_provider(),
            PlanComposer::new(Arc::new(inference)),
        )),
    };
    let server = TestServer::new(create_router(state)).expect("router should build");

    let response = server
        .post("/plan-trip")
        .json(&json!({ "origin": "Delhi", "destination": "Jaipur" }))
        .await;

    response.assert_status_internal_server_error();

    let body: Value = response.json();
    let detail = body["detail"].as_str().expect("detail");
    assert!(detail.contains("Error generating trip plan"));
    assert!(detail.contains("model overloaded"));
}

#[tokio::test]
async fn plan_trip_with_inference_returns_generated_plan() {
    let inference = StubInference {
        response: Ok("Take the Deccan Queen at dawn.".to_string()),
    };

    let state = AppState {
        trip_planner: Arc::new(TripPlannerService::new(
            RouteCatalog::without_live_provider(),
            PlanComposer::new(Arc::new(inference)),
        )),
    };
    let server = TestServer::new(create_router(state)).expect("router should build");

    let response = server
        .post("/plan-trip")
        .json(&json!({ "origin": "Mumbai", "destination": "Pune" }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["plan"], "Take the Deccan Queen at dawn.");
    assert!(!body["routes_data"].as_array().expect("routes_data").is_empty());
}
