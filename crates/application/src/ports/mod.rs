//! Ports (interfaces) implemented by infrastructure adapters

mod inference_port;
mod route_port;

pub use inference_port::InferencePort;
pub use route_port::RoutePort;

#[cfg(test)]
pub use inference_port::MockInferencePort;
#[cfg(test)]
pub use route_port::MockRoutePort;
