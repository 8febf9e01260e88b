//! The `{success, error, data}` envelope returned across the publish boundary.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> GenerationResponse<T> {
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    #[must_use]
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            data: None,
        }
    }

    /// # Errors
    ///
    /// Returns the error message of an unsuccessful response.
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self.error.unwrap_or_else(|| "generation failed".to_string())),
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for GenerationResponse<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::err(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_serializes_without_data() {
        let response: GenerationResponse<u32> = Err::<u32, _>("missing setting: siteUrl").into();
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"success": false, "error": "missing setting: siteUrl"})
        );
        assert_eq!(response.into_result(), Err("missing setting: siteUrl".to_string()));
    }

    #[test]
    fn success_carries_data() {
        let response = GenerationResponse::ok(7);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"success": true, "data": 7})
        );
        assert_eq!(response.into_result(), Ok(7));
    }
}
