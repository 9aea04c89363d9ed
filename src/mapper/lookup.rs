//! Lookup values as exchanged with the SharePoint client

use serde::{Deserialize, Serialize};

/// Reference to a row of another list: its id plus the cached display text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LookupValue {
    #[serde(rename = "LookupId")]
    pub id: i32,
    #[serde(rename = "LookupValue", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl LookupValue {
    pub fn new(id: i32, value: Option<String>) -> Self {
        Self { id, value }
    }

    /// Lookup carrying only the id; SharePoint fills in the label itself
    pub fn from_id(id: i32) -> Self {
        Self { id, value: None }
    }

    pub fn from_ids<I>(ids: I) -> Vec<LookupValue>
    where
        I: IntoIterator<Item = i32>,
    {
        ids.into_iter().map(LookupValue::from_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ids_keeps_order() {
        let lookups = LookupValue::from_ids([3, 1, 3]);
        let ids: Vec<i32> = lookups.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![3, 1, 3]);
        assert!(lookups.iter().all(|l| l.value.is_none()));
    }

    #[test]
    fn test_deserialize_client_shape() {
        let lookup: LookupValue =
            serde_json::from_str(r#"{"LookupId": 42, "LookupValue": "Jane"}"#).unwrap();
        assert_eq!(lookup, LookupValue::new(42, Some("Jane".to_string())));

        let bare: LookupValue = serde_json::from_str(r#"{"LookupId": 7}"#).unwrap();
        assert_eq!(bare, LookupValue::from_id(7));
    }
}
