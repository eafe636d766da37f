use roomcheck_core::exceptions::GenericError;
use roomcheck_core::models::AvailabilityOutcome;
use serde_json::Value;

/// Parse the availability endpoint's JSON reply into an outcome.
///
/// The server contract is thin: at least an `ok` boolean, and when `ok` is
/// true the echoed `room_id`, `start_date` and `end_date`. Anything without a
/// usable `ok` is a malformed response. Extra fields are ignored and the echo
/// fields tolerate both string and numeric encodings, since the workflow must
/// never crash on an unexpected body.
pub fn parse_reply(body: &str) -> Result<AvailabilityOutcome, GenericError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| GenericError::MalformedResponse(format!("not JSON: {}", e)))?;

    let ok = match value.get("ok").and_then(|v| v.as_bool()) {
        Some(ok) => ok,
        None => {
            return Err(GenericError::MalformedResponse(
                "missing 'ok' field".to_string(),
            ));
        }
    };

    if !ok {
        return Ok(AvailabilityOutcome::Unavailable);
    }

    Ok(AvailabilityOutcome::Available {
        room_id: field_as_string(&value, "room_id"),
        start_date: field_as_string(&value, "start_date"),
        end_date: field_as_string(&value, "end_date"),
    })
}

fn field_as_string(value: &Value, name: &str) -> String {
    match value.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_reply() {
        let outcome = parse_reply(
            r#"{"ok": true, "room_id": "7", "start_date": "2024-06-01", "end_date": "2024-06-05"}"#,
        )
        .unwrap();
        assert_eq!(
            outcome.booking_link(),
            Some("/book-room?id=7&s=2024-06-01&e=2024-06-05".to_string())
        );
    }

    #[test]
    fn test_numeric_room_id() {
        let outcome = parse_reply(
            r#"{"ok": true, "room_id": 7, "start_date": "2024-06-01", "end_date": "2024-06-05"}"#,
        )
        .unwrap();
        assert_eq!(
            outcome,
            AvailabilityOutcome::Available {
                room_id: "7".to_string(),
                start_date: "2024-06-01".to_string(),
                end_date: "2024-06-05".to_string(),
            }
        );
    }

    #[test]
    fn test_unavailable_reply() {
        assert_eq!(
            parse_reply(r#"{"ok": false}"#).unwrap(),
            AvailabilityOutcome::Unavailable
        );
    }

    #[test]
    fn test_extra_fields_ignored() {
        assert_eq!(
            parse_reply(r#"{"ok": false, "message": "sorry", "code": 42}"#).unwrap(),
            AvailabilityOutcome::Unavailable
        );
    }

    #[test]
    fn test_missing_ok_is_malformed() {
        let err = parse_reply(r#"{"room_id": "7"}"#).unwrap_err();
        assert_eq!(
            err,
            GenericError::MalformedResponse("missing 'ok' field".to_string())
        );
    }

    #[test]
    fn test_non_boolean_ok_is_malformed() {
        assert!(matches!(
            parse_reply(r#"{"ok": "yes"}"#),
            Err(GenericError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        assert!(matches!(
            parse_reply("<html>504 Gateway Timeout</html>"),
            Err(GenericError::MalformedResponse(_))
        ));
    }
}
