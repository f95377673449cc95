//! Response envelopes shared by the HTTP layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `{"message": ...}` body used by auth routes and deletions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{"error": ...}` body used by book routes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,

    /// Extra detail, only set for router-level failures such as unknown routes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// `{"message": ..., "data": ...}` returned when a resource is created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> CreatedResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// `{"success": true, "data": ...}` returned when a resource is updated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> UpdatedResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,

    /// Individual dependency checks
    pub services: HashMap<String, ServiceHealth>,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,

    /// Server version
    pub version: String,
}

impl HealthResponse {
    /// Build a response whose overall status is the worst of its services
    pub fn from_services(services: HashMap<String, ServiceHealth>, version: impl Into<String>) -> Self {
        let status = services
            .values()
            .map(|s| s.status)
            .max()
            .unwrap_or(HealthStatus::Healthy);

        Self {
            status,
            services,
            timestamp: Utc::now(),
            version: version.into(),
        }
    }
}

/// Health status, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Individual service health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: HealthStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Response time in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
}

impl ServiceHealth {
    pub fn healthy(response_time_ms: u64) -> Self {
        Self {
            status: HealthStatus::Healthy,
            message: None,
            response_time_ms: Some(response_time_ms),
        }
    }

    pub fn unhealthy(message: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            message: Some(message.into()),
            response_time_ms: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_body_omits_empty_message() {
        let body = serde_json::to_value(ErrorBody::new("Book not found")).unwrap();
        assert_eq!(body, json!({"error": "Book not found"}));
    }

    #[test]
    fn test_updated_response_shape() {
        let body = serde_json::to_value(UpdatedResponse::new(json!({"id": 1}))).unwrap();
        assert_eq!(body, json!({"success": true, "data": {"id": 1}}));
    }

    #[test]
    fn test_health_takes_worst_status() {
        let mut services = HashMap::new();
        services.insert("storage".to_string(), ServiceHealth::healthy(3));
        services.insert("database".to_string(), ServiceHealth::unhealthy("timeout"));

        let health = HealthResponse::from_services(services, "0.1.0");
        assert_eq!(health.status, HealthStatus::Unhealthy);
    }

    #[test]
    fn test_health_with_no_services_is_healthy() {
        let health = HealthResponse::from_services(HashMap::new(), "0.1.0");
        assert_eq!(health.status, HealthStatus::Healthy);
    }
}
