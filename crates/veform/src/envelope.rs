//! Uniform success/failure response envelope.
//!
//! Every validator outcome, pass or fail, travels in the same shape:
//! `{status, error, message, data}`. The `error` flag is always derived
//! from `status`; it is never stored independently, and `deserialize`
//! recomputes it rather than trusting the input.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Last-resort serialized substitute, kept as a literal so the
/// fail-closed path has no failure mode of its own.
const SERIALIZE_FALLBACK: &str = concat!(
    r#"{"status":500,"error":true,"#,
    r#""message":"Internal Server Error: Unable to serialize response","data":{}}"#,
);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub status: u16,
    pub error: bool,
    pub message: String,
    pub data: Map<String, Value>,
}

/// Incoming wire shape. `error` is intentionally absent: it is derived
/// state and gets recomputed from `status` on the way in.
#[derive(Deserialize)]
struct WireEnvelope {
    status: u16,
    message: String,
    #[serde(default)]
    data: Map<String, Value>,
}

impl Envelope {
    /// Build an envelope, deriving `error` from `status`.
    pub fn new(status: u16, message: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            status,
            error: !(200..300).contains(&status),
            message: message.into(),
            data,
        }
    }

    /// Fixed 500 substitute for envelope-layer faults.
    fn substitute(kind: &str, detail: &str, message: &str) -> Self {
        let mut data = Map::new();
        data.insert("kind".into(), Value::String(kind.into()));
        data.insert("error".into(), Value::String(detail.into()));
        Self::new(500, message, data)
    }

    /// Canonical JSON form of the envelope.
    ///
    /// Fails closed: a serialization fault yields the serialized 500
    /// substitute instead of an error or malformed output.
    pub fn serialize(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json,
            Err(err) => {
                tracing::error!(%err, "envelope serialization failed");
                let substitute = Self::substitute(
                    "SERIALIZATION_FAILURE",
                    "Unable to serialize response",
                    "Internal Server Error: Unable to serialize response",
                );
                serde_json::to_string(&substitute)
                    .unwrap_or_else(|_| SERIALIZE_FALLBACK.to_string())
            }
        }
    }

    /// Parse an envelope back out of its JSON form.
    ///
    /// Malformed input yields the fixed 500 substitute instead of a
    /// propagated parse error.
    pub fn deserialize(text: &str) -> Self {
        match serde_json::from_str::<WireEnvelope>(text) {
            Ok(wire) => Self::new(wire.status, wire.message, wire.data),
            Err(err) => {
                tracing::error!(%err, "envelope deserialization failed");
                Self::substitute(
                    "DESERIALIZATION_FAILURE",
                    "Unable to deserialize response",
                    "Internal Server Error: Unable to deserialize response",
                )
            }
        }
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Status: {}, Message: {}, Error: {}, Data: {}",
            self.status,
            self.message,
            self.error,
            Value::Object(self.data.clone())
        )
    }
}
