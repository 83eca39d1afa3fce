//! Decoding of the orchestrator response envelope `{Code, Message, Details}`
//!
//! Every orchestrator endpoint wraps its payload in the same envelope. The
//! success discriminant comes in two dialects: a small integer (`1` = OK,
//! `0` = ERROR) or a string literal (`"OK"` / `"ERROR"`). [`CodeConvention`]
//! selects which one a client accepts.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::{ClientError, Result};

/// Integer code reported by servers using the numeric dialect
pub const CODE_OK: i64 = 1;
pub const CODE_ERROR: i64 = 0;

/// String code reported by servers using the textual dialect
pub const CODE_OK_TEXT: &str = "OK";
pub const CODE_ERROR_TEXT: &str = "ERROR";

/// Longest body excerpt kept in [`ClientError::HttpStatus`]
pub const MAX_BODY_SNIPPET: usize = 512;

/// How the envelope's `Code` field is interpreted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeConvention {
    /// Accept either dialect, sniffing the JSON type of every response
    #[default]
    Auto,
    /// Only the integer `1` is success
    Integer,
    /// Only the string `"OK"` is success
    Text,
}

impl CodeConvention {
    pub fn is_success(self, code: &Value) -> bool {
        let integer_ok = || code.as_i64() == Some(CODE_OK);
        let text_ok = || code.as_str() == Some(CODE_OK_TEXT);
        match self {
            Self::Auto => integer_ok() || text_ok(),
            Self::Integer => integer_ok(),
            Self::Text => text_ok(),
        }
    }
}

impl std::str::FromStr for CodeConvention {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Ok(Self::Auto),
            "integer" | "int" => Ok(Self::Integer),
            "text" | "string" => Ok(Self::Text),
            other => Err(ClientError::Config(format!("unknown code convention: {other}"))),
        }
    }
}

/// The envelope every endpoint responds with
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(rename = "Code", alias = "code")]
    pub code: Value,
    #[serde(rename = "Message", alias = "message", default)]
    pub message: String,
    #[serde(rename = "Details", alias = "details", default)]
    pub details: Value,
}

impl ApiResponse {
    /// Successful envelope carrying `details`, mostly useful in tests
    pub fn ok(details: Value) -> Self {
        Self {
            code: Value::from(CODE_OK),
            message: String::new(),
            details,
        }
    }

    /// Parse a raw body, returning `None` when it is not an envelope
    pub fn parse(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }

    /// Convert the details into a single record; absent details are an error
    pub fn into_details<T: DeserializeOwned>(self) -> Result<T> {
        if self.details.is_null() {
            return Err(ClientError::MissingDetails);
        }
        from_details(self.details)
    }

    /// Convert the details into a collection; absent details yield an empty one
    pub fn into_collection<T: DeserializeOwned + Default>(self) -> Result<T> {
        if self.details.is_null() {
            return Ok(T::default());
        }
        from_details(self.details)
    }

    /// Interpret the details as a boolean.
    ///
    /// Accepts a JSON bool, the strings `"true"`/`"false"` in any case, and
    /// numbers (non-zero is true).
    pub fn details_as_bool(&self) -> Result<bool> {
        match &self.details {
            Value::Bool(b) => Ok(*b),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(true),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(false),
            Value::Number(n) => Ok(n.as_f64().is_some_and(|v| v != 0.0)),
            other => Err(ClientError::UnexpectedDetails {
                expected: "bool",
                found: json_kind(other),
            }),
        }
    }

    /// Interpret the details as text.
    ///
    /// Never fails: null becomes `""`, scalars their textual form and
    /// arrays or objects their compact JSON text.
    pub fn details_as_string(&self) -> String {
        match &self.details {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other => other.to_string(),
        }
    }

    /// Interpret the details as an integer; floats are truncated and null is `0`
    pub fn details_as_i64(&self) -> Result<i64> {
        match &self.details {
            Value::Null => Ok(0),
            Value::Number(n) => number_to_i64(n).ok_or(ClientError::UnexpectedDetails {
                expected: "integer",
                found: "out-of-range number",
            }),
            other => Err(ClientError::UnexpectedDetails {
                expected: "integer",
                found: json_kind(other),
            }),
        }
    }
}

/// Turn an HTTP status and body into a successful envelope or a typed error.
///
/// Status >= 400 prefers the envelope's message when the body is one and
/// otherwise reports the status with a body excerpt. A non-envelope body on a
/// successful status is a decode failure.
pub fn decode_envelope(status: u16, body: &[u8], convention: CodeConvention) -> Result<ApiResponse> {
    if status >= 400 {
        return Err(match ApiResponse::parse(body) {
            Some(envelope) => ClientError::Api {
                message: envelope.message,
            },
            None => ClientError::HttpStatus {
                status,
                body: body_snippet(body),
            },
        });
    }

    let envelope: ApiResponse =
        serde_json::from_slice(body).map_err(|source| ClientError::Decode {
            target: "ApiResponse",
            source,
        })?;

    if !convention.is_success(&envelope.code) {
        return Err(ClientError::Api {
            message: envelope.message,
        });
    }
    Ok(envelope)
}

/// Body excerpt for error messages, cut at a char boundary
pub fn body_snippet(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.len() <= MAX_BODY_SNIPPET {
        return text.to_string();
    }
    let mut end = MAX_BODY_SNIPPET;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

/// Integer view of a JSON number; floats truncate toward zero
pub fn number_to_i64(n: &Number) -> Option<i64> {
    if let Some(v) = n.as_i64() {
        return Some(v);
    }
    if let Some(v) = n.as_u64() {
        return i64::try_from(v).ok();
    }
    n.as_f64()
        .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
        .map(|f| f.trunc() as i64)
}

pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn from_details<T: DeserializeOwned>(details: Value) -> Result<T> {
    serde_json::from_value(details).map_err(|source| ClientError::Decode {
        target: std::any::type_name::<T>(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn body(value: Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn test_integer_and_text_codes_under_auto() {
        let ok_int = body(json!({"Code": 1, "Message": "", "Details": true}));
        let ok_text = body(json!({"Code": "OK", "Message": "", "Details": true}));
        assert!(decode_envelope(200, &ok_int, CodeConvention::Auto).is_ok());
        assert!(decode_envelope(200, &ok_text, CodeConvention::Auto).is_ok());

        let err_int = body(json!({"Code": 0, "Message": "nope"}));
        let err = decode_envelope(200, &err_int, CodeConvention::Auto).unwrap_err();
        assert_eq!(err.to_string(), "API error: nope");
    }

    #[test]
    fn test_strict_conventions() {
        let ok_int = body(json!({"Code": 1, "Message": "fine"}));
        let ok_text = body(json!({"Code": "OK", "Message": "fine"}));

        assert!(decode_envelope(200, &ok_int, CodeConvention::Integer).is_ok());
        assert!(decode_envelope(200, &ok_text, CodeConvention::Integer).is_err());
        assert!(decode_envelope(200, &ok_text, CodeConvention::Text).is_ok());
        assert!(decode_envelope(200, &ok_int, CodeConvention::Text).is_err());
    }

    #[test]
    fn test_text_code_is_case_sensitive() {
        let lower = body(json!({"Code": "ok", "Message": "lowercase"}));
        let err = decode_envelope(200, &lower, CodeConvention::Auto).unwrap_err();
        assert_eq!(err.api_message(), Some("lowercase"));
    }

    #[test]
    fn test_api_error_message_verbatim() {
        let raw = body(json!({"Code": "ERROR", "Message": "Instance not found", "Details": null}));
        let err = decode_envelope(200, &raw, CodeConvention::Auto).unwrap_err();
        assert_eq!(err.to_string(), "API error: Instance not found");
    }

    #[test]
    fn test_http_error_with_envelope_prefers_message() {
        let raw = body(json!({"Code": "ERROR", "Message": "Cannot read instance"}));
        let err = decode_envelope(500, &raw, CodeConvention::Auto).unwrap_err();
        assert_eq!(err.api_message(), Some("Cannot read instance"));
    }

    #[test]
    fn test_http_error_without_envelope() {
        let err = decode_envelope(503, b"<html>unavailable</html>", CodeConvention::Auto).unwrap_err();
        match err {
            ClientError::HttpStatus { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "<html>unavailable</html>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_envelope_success_body_is_decode_error() {
        let err = decode_envelope(200, b"[1,2,3]", CodeConvention::Auto).unwrap_err();
        assert!(err.is_decode());

        let err = decode_envelope(200, b"{\"Message\": \"no code\"}", CodeConvention::Auto).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_body_snippet_truncates_on_char_boundary() {
        let long = "é".repeat(400);
        let snippet = body_snippet(long.as_bytes());
        assert!(snippet.ends_with("..."));
        assert!(snippet.len() <= MAX_BODY_SNIPPET + 3);
        assert_eq!(body_snippet(b"  short  "), "short");
    }

    #[test]
    fn test_null_details_collection_is_empty() {
        let list: Vec<String> = ApiResponse::ok(Value::Null).into_collection().unwrap();
        assert!(list.is_empty());

        let map: HashMap<String, i64> = ApiResponse::ok(Value::Null).into_collection().unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_null_details_single_record_is_error() {
        let err = ApiResponse::ok(Value::Null)
            .into_details::<HashMap<String, String>>()
            .unwrap_err();
        assert!(matches!(err, ClientError::MissingDetails));
    }

    #[test]
    fn test_details_type_mismatch_names_target() {
        let err = ApiResponse::ok(json!("text")).into_details::<Vec<u32>>().unwrap_err();
        match err {
            ClientError::Decode { target, .. } => assert!(target.contains("Vec")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_details_as_bool() {
        assert!(ApiResponse::ok(json!(true)).details_as_bool().unwrap());
        assert!(!ApiResponse::ok(json!("FALSE")).details_as_bool().unwrap());
        assert!(ApiResponse::ok(json!("True")).details_as_bool().unwrap());
        assert!(ApiResponse::ok(json!(1)).details_as_bool().unwrap());
        assert!(!ApiResponse::ok(json!(0)).details_as_bool().unwrap());
        assert!(ApiResponse::ok(json!(0.5)).details_as_bool().unwrap());
        assert!(ApiResponse::ok(json!(-2)).details_as_bool().unwrap());
        assert!(!ApiResponse::ok(json!(0.0)).details_as_bool().unwrap());

        let err = ApiResponse::ok(Value::Null).details_as_bool().unwrap_err();
        assert_eq!(err.to_string(), "unexpected details: expected bool, found null");
        assert!(ApiResponse::ok(json!("yes")).details_as_bool().is_err());
    }

    #[test]
    fn test_details_as_string_is_lenient() {
        assert_eq!(ApiResponse::ok(json!("db1:3306")).details_as_string(), "db1:3306");
        assert_eq!(ApiResponse::ok(Value::Null).details_as_string(), "");
        assert_eq!(ApiResponse::ok(json!(42)).details_as_string(), "42");
        assert_eq!(ApiResponse::ok(json!(false)).details_as_string(), "false");
        assert_eq!(ApiResponse::ok(json!(["a", 1])).details_as_string(), "[\"a\",1]");
    }

    #[test]
    fn test_details_as_i64() {
        assert_eq!(ApiResponse::ok(json!(12)).details_as_i64().unwrap(), 12);
        assert_eq!(ApiResponse::ok(json!(12.9)).details_as_i64().unwrap(), 12);
        assert_eq!(ApiResponse::ok(json!(-3.5)).details_as_i64().unwrap(), -3);
        assert_eq!(ApiResponse::ok(Value::Null).details_as_i64().unwrap(), 0);

        let err = ApiResponse::ok(json!("12")).details_as_i64().unwrap_err();
        assert_eq!(err.to_string(), "unexpected details: expected integer, found string");
    }

    #[test]
    fn test_code_convention_from_str() {
        assert_eq!("integer".parse::<CodeConvention>().unwrap(), CodeConvention::Integer);
        assert_eq!("Text".parse::<CodeConvention>().unwrap(), CodeConvention::Text);
        assert_eq!("".parse::<CodeConvention>().unwrap(), CodeConvention::Auto);
        assert!("binary".parse::<CodeConvention>().is_err());
    }
}
