//! Server notice refresh

use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use anyhow::{bail, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::model::{NoticeEvent, MAX_PINNED_NOTICES_PER_ROOM};

/// The chat client, as seen by the server notice refresh
#[async_trait(?Send)]
pub trait NoticeSource {
    /// Rooms tagged as server notice rooms, in room list order.
    /// None when the room list has no such tag at all.
    async fn server_notice_rooms(&self) -> Result<Option<Vec<String>>>;

    /// Pinned event ids of a room, empty when nothing is pinned
    async fn pinned_event_ids(&self, room_id: &str) -> Result<Vec<String>>;

    /// Fetch one event. Ok(None) when the event is not in its timeline.
    async fn fetch_event(&self, room_id: &str, event_id: &str) -> Result<Option<NoticeEvent>>;
}

/// Read the pinned notices of every server notice room
///
/// Fetches run one after another so the result keeps pin order within a room
/// and room order across rooms. Any failure aborts the whole refresh; the
/// caller keeps its previous cache. Returns Ok(None) when there is nothing to
/// refresh: no server notice rooms, or `room_filter` is not one of them.
pub async fn collect_server_notices<S: NoticeSource + ?Sized>(
    source: &S,
    room_filter: Option<&str>,
) -> Result<Option<Vec<NoticeEvent>>> {
    let Some(rooms) = source.server_notice_rooms().await? else {
        return Ok(None);
    };
    if let Some(room_id) = room_filter {
        if !rooms.iter().any(|r| r == room_id) {
            tracing::trace!(room_id, "state event outside server notice rooms");
            return Ok(None);
        }
    }

    let mut events = Vec::new();
    for room_id in &rooms {
        let pinned = source.pinned_event_ids(room_id).await?;
        for event_id in pinned.iter().take(MAX_PINNED_NOTICES_PER_ROOM) {
            match source.fetch_event(room_id, event_id).await? {
                Some(event) => events.push(event),
                None => tracing::debug!(room_id, event_id, "pinned notice not found"),
            }
        }
    }
    Ok(Some(events))
}

/// A server notice room in a [`StaticNoticeSource`]
#[derive(Debug, Clone, Deserialize)]
pub struct NoticeRoom {
    pub room_id: String,
    #[serde(default)]
    pub pinned: Vec<String>,
}

/// Canned notice data, for scripts and tests
#[derive(Debug, Default, Deserialize)]
pub struct StaticNoticeSource {
    #[serde(default)]
    rooms: Option<Vec<NoticeRoom>>,
    #[serde(default)]
    events: Vec<NoticeEvent>,
    /// Event ids whose fetch fails
    #[serde(default)]
    failing: HashSet<String>,
    #[serde(skip)]
    fetches: Cell<usize>,
}

impl StaticNoticeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_room(mut self, room_id: &str, pinned: &[&str]) -> Self {
        self.rooms.get_or_insert_with(Vec::new).push(NoticeRoom {
            room_id: room_id.to_string(),
            pinned: pinned.iter().map(|id| id.to_string()).collect(),
        });
        self
    }

    pub fn with_event(mut self, event: NoticeEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_failing(mut self, event_id: &str) -> Self {
        self.failing.insert(event_id.to_string());
        self
    }

    /// Number of event fetches issued so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }

    fn events_by_id(&self) -> HashMap<&str, &NoticeEvent> {
        self.events
            .iter()
            .map(|e| (e.event_id.as_str(), e))
            .collect()
    }
}

#[async_trait(?Send)]
impl NoticeSource for StaticNoticeSource {
    async fn server_notice_rooms(&self) -> Result<Option<Vec<String>>> {
        Ok(self
            .rooms
            .as_ref()
            .map(|rooms| rooms.iter().map(|r| r.room_id.clone()).collect()))
    }

    async fn pinned_event_ids(&self, room_id: &str) -> Result<Vec<String>> {
        Ok(self
            .rooms
            .iter()
            .flatten()
            .find(|r| r.room_id == room_id)
            .map(|r| r.pinned.clone())
            .unwrap_or_default())
    }

    async fn fetch_event(&self, room_id: &str, event_id: &str) -> Result<Option<NoticeEvent>> {
        self.fetches.set(self.fetches.get() + 1);
        if self.failing.contains(event_id) {
            bail!("failed to fetch {} in {}", event_id, room_id);
        }
        Ok(self.events_by_id().get(event_id).map(|e| (*e).clone()))
    }
}
