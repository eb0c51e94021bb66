//! Response decoding
//!
//! Turns a status code and raw body into a typed payload or a [`ClientError`].

use poorroom_common::{ClientError, ClientResult};
use poorroom_core::{ApiEnvelope, ApiMeta};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Envelope of mutations whose payload the client does not inspect
pub type AckResponse = ApiEnvelope<Value>;

/// Non-2xx statuses become [`ClientError::HttpStatus`] with the body kept as text
pub fn check_status(status: u16, body: &[u8]) -> ClientResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ClientError::http_status(
            status,
            String::from_utf8_lossy(body).into_owned(),
        ))
    }
}

/// Decode a JSON body
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &[u8]) -> ClientResult<T> {
    check_status(status, body)?;
    serde_json::from_slice(body).map_err(ClientError::decode)
}

/// Decode a mutation response
///
/// Empty bodies and bodies without `result` are accepted.
pub fn decode_ack(status: u16, body: &[u8]) -> ClientResult<AckResponse> {
    check_status(status, body)?;

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(AckResponse::new(Value::Null));
    }

    match serde_json::from_slice::<Value>(body).map_err(ClientError::decode)? {
        Value::Object(mut map) => {
            let result = map.remove("result").unwrap_or(Value::Null);
            let meta: ApiMeta = serde_json::from_value(Value::Object(map)).unwrap_or_default();
            Ok(ApiEnvelope { result, meta })
        }
        other => Ok(AckResponse::new(other)),
    }
}
