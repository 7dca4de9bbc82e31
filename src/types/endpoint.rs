use serde::{Deserialize, Serialize};

/// An HTTP destination webhooks are delivered to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub url: String,
    pub description: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    pub channels: Option<Vec<String>>,
    pub filter_types: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_deserializes_server_shape() {
        let json = r#"{
            "id": "ep_2KWPBgLlAfxdpyqt",
            "url": "https://example.com/hooks",
            "description": "Billing service",
            "disabled": false,
            "filterTypes": ["invoice.paid"]
        }"#;
        let ep: Endpoint = serde_json::from_str(json).unwrap();
        assert_eq!(ep.description.as_deref(), Some("Billing service"));
        assert_eq!(ep.filter_types, Some(vec!["invoice.paid".to_string()]));
        assert!(!ep.disabled);
    }

    #[test]
    fn endpoint_tolerates_sparse_record() {
        let ep: Endpoint = serde_json::from_str(r#"{"id": "ep_1", "url": "https://x.test"}"#).unwrap();
        assert!(ep.description.is_none());
        assert!(ep.channels.is_none());
        assert!(!ep.disabled);
    }
}
