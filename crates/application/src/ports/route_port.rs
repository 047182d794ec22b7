//! Route lookup port
//!
//! Defines the interface for live transit route candidate lookup. The
//! infrastructure layer implements this port against a directions API.

use async_trait::async_trait;
use domain::TransitRoute;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for live route candidate lookup
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutePort: Send + Sync {
    /// Fetch transit route candidates between two place names
    ///
    /// May legitimately return an empty list; callers decide whether to
    /// substitute fallback data.
    async fn fetch_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<TransitRoute>, ApplicationError>;
}
