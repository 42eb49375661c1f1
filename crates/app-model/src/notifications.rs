//! Push notification shapes
//!
//! A [`NotificationData`] carries the displayable parts of a push message
//! plus an opaque auxiliary payload. The payload is caller-defined JSON;
//! consumers decode it into their own shape and must handle decode failure
//! explicitly rather than trusting it blindly.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Notification validation error types
#[derive(Debug, Error)]
pub enum NotificationError {
    /// A required field was empty
    #[error("required field is empty: {0}")]
    EmptyField(&'static str),
}

/// Result type for notification operations
pub type Result<T> = std::result::Result<T, NotificationError>;

/// An incoming push notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationData {
    /// Stable notification identifier
    pub id: String,
    /// Title line
    pub title: String,
    /// Body text
    pub body: String,
    /// Opaque caller-defined auxiliary payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl NotificationData {
    /// Create a notification from the required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            data: None,
        }
    }

    /// Attach an auxiliary payload
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Decode the auxiliary payload into a concrete shape
    ///
    /// Returns `Ok(None)` when no payload is attached. Decode errors
    /// surface so callers branch on unexpected payload shapes instead of
    /// assuming them.
    pub fn decode_data<T: DeserializeOwned>(&self) -> serde_json::Result<Option<T>> {
        match &self.data {
            Some(value) => serde_json::from_value(value.clone()).map(Some),
            None => Ok(None),
        }
    }

    /// Validate the shape at a trust boundary
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(NotificationError::EmptyField("id"));
        }
        if self.title.is_empty() {
            return Err(NotificationError::EmptyField("title"));
        }
        if self.body.is_empty() {
            return Err(NotificationError::EmptyField("body"));
        }
        Ok(())
    }
}
