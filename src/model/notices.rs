//! Pinned events from server notice rooms

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::sync::LimitDetails;

/// Each pinned notice costs a fetch, so only the first few per room are read
pub const MAX_PINNED_NOTICES_PER_ROOM: usize = 2;

/// Room list tag of server notice rooms
pub const SERVER_NOTICE_TAG: &str = "m.server_notice";

pub const USAGE_LIMIT_REACHED: &str = "m.server_notice.usage_limit_reached";

const MESSAGE_EVENT_TYPE: &str = "m.room.message";

/// A fetched pinned event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoticeEvent {
    pub event_id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub content: Value,
}

impl NoticeEvent {
    fn content_str(&self, field: &str) -> Option<&str> {
        self.content.get(field).and_then(Value::as_str)
    }

    pub fn server_notice_type(&self) -> Option<&str> {
        self.content_str("server_notice_type")
    }

    pub fn is_usage_limit(&self) -> bool {
        self.event_type == MESSAGE_EVENT_TYPE && self.server_notice_type() == Some(USAGE_LIMIT_REACHED)
    }

    pub fn limit_details(&self) -> LimitDetails {
        LimitDetails {
            admin_contact: self.content_str("admin_contact").map(str::to_string),
            limit_type: self.content_str("limit_type").map(str::to_string),
        }
    }
}

/// First usage-limit notice, in cache order
pub fn find_usage_limit(events: &[NoticeEvent]) -> Option<&NoticeEvent> {
    events.iter().find(|e| e.is_usage_limit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(event_type: &str, content: Value) -> NoticeEvent {
        NoticeEvent {
            event_id: "$1".to_string(),
            event_type: event_type.to_string(),
            content,
        }
    }

    #[test]
    fn test_usage_limit_requires_message_type() {
        let content = json!({"server_notice_type": USAGE_LIMIT_REACHED});
        assert!(event("m.room.message", content.clone()).is_usage_limit());
        assert!(!event("m.room.topic", content).is_usage_limit());
        assert!(!event("m.room.message", json!({"body": "hi"})).is_usage_limit());
    }

    #[test]
    fn test_find_first_usage_limit() {
        let events = vec![
            event("m.room.message", json!({"body": "welcome"})),
            event(
                "m.room.message",
                json!({"server_notice_type": USAGE_LIMIT_REACHED, "admin_contact": "mailto:ops@example.org"}),
            ),
        ];
        let found = find_usage_limit(&events).expect("usage limit");
        let details = found.limit_details();
        assert_eq!(details.admin_contact.as_deref(), Some("mailto:ops@example.org"));
        assert_eq!(details.limit_type, None);
    }
}
