//! Maps Generative Language API failures onto `AiError`.

use crate::AiError;

/// Classify a non-success HTTP response.
///
/// Google error bodies look like
/// `{"error": {"code": 400, "message": "...", "status": "INVALID_ARGUMENT",
/// "details": [{"reason": "API_KEY_INVALID", ...}]}}`. An invalid key comes
/// back as a 400, so the `reason` detail is checked before the status.
pub(crate) fn classify_http_error(status: u16, body: &str) -> AiError {
    let json: serde_json::Value = serde_json::from_str(body).unwrap_or_default();
    let error = &json["error"];

    let message = error["message"]
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "empty error body".to_string()
            } else {
                trimmed.to_string()
            }
        });
    let rpc_status = error["status"].as_str().unwrap_or("");
    let key_rejected = error["details"]
        .as_array()
        .map(|details| {
            details
                .iter()
                .any(|d| d["reason"].as_str() == Some("API_KEY_INVALID"))
        })
        .unwrap_or(false);

    if key_rejected
        || status == 401
        || status == 403
        || matches!(rpc_status, "PERMISSION_DENIED" | "UNAUTHENTICATED")
    {
        return AiError::Auth(message);
    }

    if status == 429 || rpc_status == "RESOURCE_EXHAUSTED" {
        return AiError::Quota(message);
    }

    if status == 400
        || matches!(
            rpc_status,
            "INVALID_ARGUMENT" | "FAILED_PRECONDITION" | "OUT_OF_RANGE"
        )
    {
        return AiError::InvalidArgument(message);
    }

    AiError::ApiError(format!("HTTP {status}: {message}"))
}

/// Transport-level failures never reached the API and are always unknown-class.
pub(crate) fn from_transport(err: reqwest::Error) -> AiError {
    if err.is_decode() {
        AiError::ParseError(err.to_string())
    } else {
        AiError::NetworkError(err.to_string())
    }
}
