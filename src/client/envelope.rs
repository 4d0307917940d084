/// Decoding of the `{"Error": "...", ...payload}` envelope every endpoint returns.
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Why an envelope did not yield a payload.
#[derive(Debug)]
pub enum EnvelopeError {
    /// The `Error` field was set. Carries the message verbatim.
    Server(String),
    /// The body was not JSON, or the payload did not have the expected shape.
    Malformed(serde_json::Error),
}

/// Decode a response body into the expected payload.
///
/// A non-empty `Error` wins over anything else in the body; the payload is not even
/// looked at in that case. An empty body (or `null`) is an empty, successful envelope.
///
/// # Errors
///
/// `EnvelopeError::Server` when the service reported an error,
/// `EnvelopeError::Malformed` when the body cannot be decoded as `T`.
pub fn decode<T>(body: &[u8]) -> Result<T, EnvelopeError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let value: Value = serde_json::from_slice(body).map_err(EnvelopeError::Malformed)?;
    if value.is_null() {
        return Ok(T::default());
    }

    if let Some(message) = value
        .get("Error")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
    {
        return Err(EnvelopeError::Server(message.to_owned()));
    }

    serde_json::from_value(value).map_err(EnvelopeError::Malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Empty, RecordingCreated, TaskList, TaskType};

    #[test]
    fn test_error_takes_precedence_over_payload() {
        let body = br#"{"Error":"boom","RecordingID":"abc"}"#;
        match decode::<RecordingCreated>(body) {
            Err(EnvelopeError::Server(msg)) => assert_eq!(msg, "boom"),
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_wins_even_when_payload_is_malformed() {
        let body = br#"{"Error":"boom","Tasks":"not-a-list"}"#;
        assert!(matches!(
            decode::<TaskList>(body),
            Err(EnvelopeError::Server(msg)) if msg == "boom"
        ));
    }

    #[test]
    fn test_empty_error_is_success() {
        let created: RecordingCreated = decode(br#"{"Error":"","RecordingID":"r-1"}"#).unwrap();
        assert_eq!(created.recording_id, "r-1");
    }

    #[test]
    fn test_payload_decoded() {
        let list: TaskList =
            decode(br#"{"Error":"","Tasks":[{"Name":"t1","Type":"stream","Enabled":true}]}"#)
                .unwrap();
        assert_eq!(list.tasks.len(), 1);
        assert_eq!(list.tasks[0].name, "t1");
        assert_eq!(list.tasks[0].task_type, TaskType::Stream);
        assert!(list.tasks[0].enabled);
    }

    #[test]
    fn test_empty_body_is_empty_envelope() {
        assert!(decode::<Empty>(b"").is_ok());
        assert!(decode::<Empty>(b"  \n").is_ok());
        assert!(decode::<Empty>(b"null").is_ok());
        let created: RecordingCreated = decode(b"").unwrap();
        assert!(created.recording_id.is_empty());
    }

    #[test]
    fn test_malformed_body_is_reported() {
        assert!(matches!(
            decode::<Empty>(b"<html>502 Bad Gateway</html>"),
            Err(EnvelopeError::Malformed(_))
        ));
        assert!(matches!(
            decode::<TaskList>(br#"{"Tasks":[{"Name":"t","Type":"windowed"}]}"#),
            Err(EnvelopeError::Malformed(_))
        ));
    }
}
