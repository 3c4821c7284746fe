//! Response envelope decoding.
//!
//! Every DooTask response wraps its payload in `{ret, msg, data}`. `ret == 1`
//! is the sole success signal; any other value is a business failure and
//! `data` must not be interpreted. The HTTP status is checked before the
//! envelope is parsed, so a 500 with a well-formed envelope still surfaces as
//! a transport-level error.
//!
//! Typed payload conversion goes through serde's derived deserializers. With
//! container-level `#[serde(default)]` on every result record this gives the
//! projection semantics the server relies on: fields the record does not
//! declare are dropped, declared fields missing from the reply stay at their
//! default, and nested records convert recursively.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::DooTaskError;

/// The `{ret, msg, data}` wrapper used by every endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub ret: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Validate the envelope in `body` and extract its payload.
///
/// `data: null` normalizes to `None` so callers see a single "no payload"
/// shape.
pub(crate) fn decode_envelope(body: &str) -> Result<Option<Value>, DooTaskError> {
    let envelope: Envelope = serde_json::from_str(body)
        .map_err(|e| DooTaskError::MalformedResponse(format!("response is not valid JSON: {e}")))?;

    if envelope.ret != 1 {
        let message = if envelope.msg.is_empty() {
            format!("api request failed with ret {}", envelope.ret)
        } else {
            envelope.msg
        };
        return Err(DooTaskError::Api {
            message,
            code: envelope.ret,
        });
    }

    Ok(envelope.data.filter(|data| !data.is_null()))
}

/// Convert an envelope payload into the caller's result type.
///
/// `api` only labels the error when the payload is absent or does not match
/// the expected shape.
pub(crate) fn from_payload<T: DeserializeOwned>(
    api: &str,
    data: Option<Value>,
) -> Result<T, DooTaskError> {
    let value = data.ok_or_else(|| DooTaskError::EmptyData {
        api: api.to_string(),
    })?;
    serde_json::from_value(value).map_err(|e| {
        DooTaskError::MalformedResponse(format!("unexpected payload shape for {api}: {e}"))
    })
}
