//! Adapters implementing application ports against integration crates

mod directions_route_adapter;
mod gemini_inference_adapter;

pub use directions_route_adapter::DirectionsRouteAdapter;
pub use gemini_inference_adapter::GeminiInferenceAdapter;
