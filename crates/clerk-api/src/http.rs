//! Shared HTTP response handling.
//!
//! Turns a `reqwest::Response` into the parsed JSON document on success, or
//! into [`ClerkError::Api`] using Clerk's `{"message", "errors"}` envelope when
//! it is present and the raw body when it is not.

use reqwest::StatusCode;
use serde_json::{Map, Value};

use crate::error::ClerkError;

/// Read the response body and map it by status.
pub async fn into_json(resp: reqwest::Response) -> Result<Value, ClerkError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ClerkError::Api {
        status: status.as_u16(),
        message: format!("Network error: {e}"),
        errors: Vec::new(),
    })?;

    tracing::debug!(status = status.as_u16(), bytes = body.len(), "clerk response");

    if status.is_success() {
        parse_success(status, &body)
    } else {
        Err(parse_error(status, &body))
    }
}

/// Parse a 2xx body. An empty body is an empty object.
pub fn parse_success(status: StatusCode, body: &str) -> Result<Value, ClerkError> {
    if body.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(body).map_err(|e| ClerkError::Api {
        status: status.as_u16(),
        message: format!("Invalid JSON response: {e}"),
        errors: Vec::new(),
    })
}

/// Build the API error for a non-2xx response body.
///
/// The `{"message", "errors"}` envelope is best-effort: a non-string
/// `message` or non-list `errors` is ignored rather than discarding the rest.
/// Only a body that is not a JSON object is reported verbatim.
pub fn parse_error(status: StatusCode, body: &str) -> ClerkError {
    let fallback = || format!("HTTP {status}");

    let (message, errors) = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(envelope)) => {
            let errors = envelope
                .get("errors")
                .and_then(Value::as_array)
                .map(|errors| errors.iter().map(detail_text).collect::<Vec<_>>())
                .unwrap_or_default();
            let message = envelope
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .or_else(|| errors.first().cloned())
                .unwrap_or_else(fallback);
            (message, errors)
        }
        _ if body.trim().is_empty() => (fallback(), Vec::new()),
        _ => (body.to_string(), Vec::new()),
    };

    ClerkError::Api {
        status: status.as_u16(),
        message,
        errors,
    }
}

/// Clerk sends error details as objects; older envelopes and proxies send strings.
fn detail_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Object(map) => map
            .get("long_message")
            .or_else(|| map.get("message"))
            .and_then(Value::as_str)
            .map_or_else(|| value.to_string(), str::to_string),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
        )
    }

    fn api_parts(err: ClerkError) -> (u16, String, Vec<String>) {
        match err {
            ClerkError::Api {
                status,
                message,
                errors,
            } => (status, message, errors),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn not_found_envelope_is_mapped() {
        let resp = mock_response(404, r#"{"message":"not found","errors":["x"]}"#);
        let err = into_json(resp).await.unwrap_err();
        assert_eq!(
            api_parts(err),
            (404, "not found".to_string(), vec!["x".to_string()])
        );
    }

    #[tokio::test]
    async fn unparsable_body_becomes_message() {
        let resp = mock_response(502, "<html>Bad Gateway</html>");
        let err = into_json(resp).await.unwrap_err();
        assert_eq!(
            api_parts(err),
            (502, "<html>Bad Gateway</html>".to_string(), Vec::new())
        );
    }

    #[tokio::test]
    async fn empty_error_body_uses_status_text() {
        let resp = mock_response(500, "");
        let (status, message, errors) = api_parts(into_json(resp).await.unwrap_err());
        assert_eq!(status, 500);
        assert_eq!(message, "HTTP 500 Internal Server Error");
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn empty_success_body_is_empty_object() {
        let resp = mock_response(200, "");
        assert_eq!(into_json(resp).await.unwrap(), json!({}));
    }

    #[tokio::test]
    async fn success_body_is_returned_unchanged() {
        let resp = mock_response(200, r#"{"data":[{"id":"user_1"}],"total_count":1}"#);
        assert_eq!(
            into_json(resp).await.unwrap(),
            json!({"data": [{"id": "user_1"}], "total_count": 1})
        );
    }

    #[test]
    fn invalid_success_json_is_an_api_error() {
        let err = parse_success(StatusCode::OK, "not json").unwrap_err();
        let (status, message, _) = api_parts(err);
        assert_eq!(status, 200);
        assert!(message.starts_with("Invalid JSON response"));
    }

    #[test]
    fn clerk_error_objects_are_flattened() {
        let body = r#"{
            "errors": [
                {"message": "is invalid", "long_message": "email_address is invalid", "code": "form_param_format_invalid"},
                {"message": "taken", "code": "form_identifier_exists"},
                {"code": "unknown"}
            ]
        }"#;
        let (status, message, errors) = api_parts(parse_error(StatusCode::UNPROCESSABLE_ENTITY, body));
        assert_eq!(status, 422);
        assert_eq!(message, "email_address is invalid");
        assert_eq!(
            errors,
            vec![
                "email_address is invalid".to_string(),
                "taken".to_string(),
                r#"{"code":"unknown"}"#.to_string(),
            ]
        );
    }

    #[test]
    fn non_object_json_falls_back_to_raw_text() {
        let (_, message, errors) = api_parts(parse_error(StatusCode::BAD_REQUEST, "[1,2]"));
        assert_eq!(message, "[1,2]");
        assert!(errors.is_empty());
    }

    #[test]
    fn null_errors_keep_the_message() {
        let body = r#"{"message":"not found","errors":null}"#;
        let (status, message, errors) = api_parts(parse_error(StatusCode::NOT_FOUND, body));
        assert_eq!(status, 404);
        assert_eq!(message, "not found");
        assert!(errors.is_empty());
    }

    #[test]
    fn non_list_errors_are_ignored() {
        let body = r#"{"message":"not found","errors":"x"}"#;
        let (_, message, errors) = api_parts(parse_error(StatusCode::NOT_FOUND, body));
        assert_eq!(message, "not found");
        assert!(errors.is_empty());
    }

    #[test]
    fn non_string_message_falls_back_to_first_detail() {
        let body = r#"{"message":{"text":"odd"},"errors":["quota exceeded"]}"#;
        let (_, message, errors) =
            api_parts(parse_error(StatusCode::TOO_MANY_REQUESTS, body));
        assert_eq!(message, "quota exceeded");
        assert_eq!(errors, vec!["quota exceeded".to_string()]);
    }

    #[test]
    fn object_without_envelope_fields_uses_status_text() {
        let (_, message, errors) = api_parts(parse_error(StatusCode::FORBIDDEN, r#"{"ok":false}"#));
        assert_eq!(message, "HTTP 403 Forbidden");
        assert!(errors.is_empty());
    }
}
