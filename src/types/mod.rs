pub mod application;
pub mod attempt;
pub mod endpoint;
pub mod message;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_roundtrip() {
        let json = r#"{
            "id": "msg_1srOrx2ZWZBpBUvZwXKQmoEYga2",
            "eventType": "user.signup",
            "timestamp": "2024-01-15T09:30:00Z",
            "payload": {"email": "a@example.test"}
        }"#;
        let msg: message::Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.event_type, "user.signup");
        let re_json = serde_json::to_string(&msg).unwrap();
        let msg2: message::Message = serde_json::from_str(&re_json).unwrap();
        assert_eq!(msg.id, msg2.id);
        assert_eq!(msg.timestamp, msg2.timestamp);
    }

    #[test]
    fn attempt_roundtrip() {
        let json = r#"{
            "id": "atmpt_1srOrx2ZWZBpBUvZwXKQmoEYga2",
            "msgId": "msg_1srOrx2ZWZBpBUvZwXKQmoEYga2",
            "endpointId": "ep_1srOrx2ZWZBpBUvZwXKQmoEYga2",
            "status": 0,
            "responseStatusCode": 200,
            "responseDurationMs": 241,
            "timestamp": "2024-01-15T09:30:01Z",
            "triggerType": 0
        }"#;
        let attempt: attempt::Attempt = serde_json::from_str(json).unwrap();
        assert_eq!(attempt.status, attempt::AttemptStatus::Success);
        assert_eq!(attempt.trigger_type, attempt::TriggerType::Automatic);
        assert_eq!(attempt.response_duration_ms, Some(241));
        let re_json = serde_json::to_string(&attempt).unwrap();
        let attempt2: attempt::Attempt = serde_json::from_str(&re_json).unwrap();
        assert_eq!(attempt.id, attempt2.id);
        assert_eq!(attempt.status, attempt2.status);
    }

    #[test]
    fn endpoint_roundtrip() {
        let json = r#"{
            "id": "ep_1srOrx2ZWZBpBUvZwXKQmoEYga2",
            "url": "https://billing.example.test/webhooks",
            "description": "Billing"
        }"#;
        let ep: endpoint::Endpoint = serde_json::from_str(json).unwrap();
        let re_json = serde_json::to_string(&ep).unwrap();
        let ep2: endpoint::Endpoint = serde_json::from_str(&re_json).unwrap();
        assert_eq!(ep.id, ep2.id);
        assert_eq!(ep.url, ep2.url);
    }

    #[test]
    fn application_roundtrip() {
        let json = r#"{
            "id": "app_1srOrx2ZWZBpBUvZwXKQmoEYga2",
            "name": "Acme Production",
            "uid": "acme-prod",
            "createdAt": "2023-11-01T00:00:00Z"
        }"#;
        let app: application::Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.uid.as_deref(), Some("acme-prod"));
        let re_json = serde_json::to_string(&app).unwrap();
        assert!(re_json.contains("\"createdAt\""));
    }

    #[test]
    fn event_type_defaults_archived_false() {
        let json = r#"{"name": "invoice.paid", "description": "An invoice was paid"}"#;
        let et: application::EventType = serde_json::from_str(json).unwrap();
        assert!(!et.archived);
        assert!(et.schemas.is_none());
    }
}
