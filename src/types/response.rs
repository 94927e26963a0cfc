use serde::Serialize;

/// Standard API response wrapper (DRY - consistent response format).
///
/// The `success` flag is the primary error signal for API consumers:
/// most failures are reported inside an HTTP 200 body, not via the
/// status code.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    /// Opaque failure: the cause is logged server-side, never leaked.
    pub fn failure() -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: None,
        }
    }

    /// Failure with a client-facing error description.
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }
}

impl ApiResponse<()> {
    /// Success carrying only a human-readable message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }
}
