//! Health reporting for data layer components.

use async_trait::async_trait;
use std::fmt;

/// A component that can report whether its backing resource is reachable.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Returns the name reported alongside the status.
    fn name(&self) -> &str;

    /// Checks the resource once.
    async fn check(&self) -> HealthStatus;
}

/// Result of a single health check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    /// Carries the failure detail for operators, never for end users.
    Unhealthy(String),
}

impl HealthStatus {
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }

    #[must_use]
    pub const fn is_unhealthy(&self) -> bool {
        matches!(self, Self::Unhealthy(_))
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => f.write_str("healthy"),
            Self::Unhealthy(detail) => write!(f, "unhealthy: {detail}"),
        }
    }
}
