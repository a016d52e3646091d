//! Room list and search.
//!
//! The list is fetched once per session and kept until [`RoomDirectory::refresh`]
//! (or the optional TTL) drops it. Search is a pure function over whatever list
//! the caller already holds.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use utoipa::ToSchema;

use crate::config::Config;
use crate::error::SensorError;
use crate::sensor::models::RawRoom;
use crate::sensor::SensorQueryClient;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Room {
    pub id: String,
    pub name: String,
}

impl From<RawRoom> for Room {
    fn from(raw: RawRoom) -> Self {
        match raw {
            RawRoom::Name(name) => Self {
                id: name.clone(),
                name,
            },
            RawRoom::Entry { id, name } => Self {
                id: id.to_string(),
                name,
            },
        }
    }
}

pub struct RoomDirectory {
    client: Arc<SensorQueryClient>,
    cache: Cache<(), Arc<Vec<Room>>>,
}

impl RoomDirectory {
    #[must_use]
    pub fn new(client: Arc<SensorQueryClient>, config: &Config) -> Self {
        let mut builder = Cache::builder().max_capacity(1);
        if let Some(ttl) = config.rooms_cache_ttl_seconds {
            builder = builder.time_to_live(Duration::from_secs(ttl));
        }

        Self {
            client,
            cache: builder.build(),
        }
    }

    /// All rooms, from the session cache when present.
    ///
    /// # Errors
    ///
    /// Propagates the client's error when the list has to be fetched; a failed
    /// fetch is not cached.
    pub async fn list(&self) -> Result<Arc<Vec<Room>>, SensorError> {
        if let Some(rooms) = self.cache.get(&()).await {
            tracing::debug!(count = rooms.len(), "room_list_cache_hit");
            return Ok(rooms);
        }

        let rooms: Arc<Vec<Room>> = Arc::new(
            self.client
                .fetch_rooms()
                .await?
                .into_iter()
                .map(Room::from)
                .collect(),
        );
        self.cache.insert((), rooms.clone()).await;

        tracing::debug!(count = rooms.len(), "room_list_cached");
        Ok(rooms)
    }

    /// Drop the cached list and fetch it again.
    ///
    /// # Errors
    ///
    /// Propagates the client's error.
    pub async fn refresh(&self) -> Result<Arc<Vec<Room>>, SensorError> {
        self.cache.invalidate(&()).await;
        self.list().await
    }
}

/// Rooms whose name contains `term`, ignoring case. An empty or blank term
/// matches every room.
#[must_use]
pub fn search(term: &str, rooms: &[Room]) -> Vec<Room> {
    if term.trim().is_empty() {
        return rooms.to_vec();
    }

    let needle = term.to_lowercase();

    rooms
        .iter()
        .filter(|room| room.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
