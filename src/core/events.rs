use std::collections::HashMap;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

// DomainEventType is the catalog change an event reports
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DomainEventType {
    ItemAdded,
    ItemRemoved,
    ItemLent,
    ItemReturned,
}

impl DomainEventType {
    pub fn name(&self) -> &'static str {
        match self {
            DomainEventType::ItemAdded => "item_added",
            DomainEventType::ItemRemoved => "item_removed",
            DomainEventType::ItemLent => "item_lent",
            DomainEventType::ItemReturned => "item_returned",
        }
    }

    // shelving changes belong to the catalog, loans to checkout
    pub fn group(&self) -> &'static str {
        match self {
            DomainEventType::ItemAdded | DomainEventType::ItemRemoved => "catalog",
            DomainEventType::ItemLent | DomainEventType::ItemReturned => "checkout",
        }
    }
}

// DomainEvent records one change to the catalog, keyed by isbn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn new<T: Serialize>(kind: DomainEventType, isbn: &str, metadata: &HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: kind.name().to_string(),
            group: kind.group().to_string(),
            key: isbn.to_string(),
            kind,
            metadata: metadata.clone(),
            json_data: serde_json::to_string(data)?,
            created_at: Utc::now().naive_utc(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::{DomainEvent, DomainEventType};

    #[tokio::test]
    async fn test_should_build_item_added() {
        let data = HashMap::from([("isbn", "111")]);
        let event = DomainEvent::new(DomainEventType::ItemAdded, "111", &HashMap::new(), &data).expect("build event");
        assert_eq!("item_added", event.name.as_str());
        assert_eq!("catalog", event.group.as_str());
        assert_eq!("111", event.key.as_str());
        assert_eq!(DomainEventType::ItemAdded, event.kind);
        assert_eq!(r#"{"isbn":"111"}"#, event.json_data.as_str());
    }

    #[tokio::test]
    async fn test_should_group_loans_under_checkout() {
        for (kind, name) in [(DomainEventType::ItemLent, "item_lent"), (DomainEventType::ItemReturned, "item_returned")] {
            let event = DomainEvent::new(kind, "111", &HashMap::new(), &"111").expect("build event");
            assert_eq!(name, event.name.as_str());
            assert_eq!("checkout", event.group.as_str());
        }
    }

    #[tokio::test]
    async fn test_should_keep_metadata() {
        let metadata = HashMap::from([("removed".to_string(), "2".to_string())]);
        let event = DomainEvent::new(DomainEventType::ItemRemoved, "222", &metadata, &"222").expect("build event");
        assert_eq!("item_removed", event.name.as_str());
        assert_eq!(Some(&"2".to_string()), event.metadata.get("removed"));
    }

    #[tokio::test]
    async fn test_should_give_each_event_an_id() {
        let first = DomainEvent::new(DomainEventType::ItemAdded, "111", &HashMap::new(), &"111").expect("build event");
        let second = DomainEvent::new(DomainEventType::ItemAdded, "111", &HashMap::new(), &"111").expect("build event");
        assert_ne!(first.event_id, second.event_id);
    }

    #[tokio::test]
    async fn test_should_serialize_event_to_json() {
        let event = DomainEvent::new(DomainEventType::ItemAdded, "111", &HashMap::new(), &"111").expect("build event");
        let json = serde_json::to_string(&event).expect("serialize event");
        let parsed: DomainEvent = serde_json::from_str(json.as_str()).expect("deserialize event");
        assert_eq!(event.event_id, parsed.event_id);
        assert_eq!(DomainEventType::ItemAdded, parsed.kind);
        assert_eq!(event.created_at.and_utc().timestamp_micros(), parsed.created_at.and_utc().timestamp_micros());
    }
}
