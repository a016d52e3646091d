use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::dashboard::LatestQuery;
use crate::rooms::RoomDirectory;
use crate::sensor::SensorQueryClient;

/// One [`LatestQuery`] per dashboard session, dropped after the session goes idle.
pub type QuerySessions = Cache<String, Arc<LatestQuery>>;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sensor_client: Arc<SensorQueryClient>,
    pub rooms: Arc<RoomDirectory>,
    pub query_sessions: QuerySessions,
}

impl AppState {
    pub fn new(config: Config, sensor_client: SensorQueryClient) -> Self {
        let sensor_client = Arc::new(sensor_client);
        let rooms = RoomDirectory::new(sensor_client.clone(), &config);

        let query_sessions: QuerySessions = Cache::builder()
            .max_capacity(10_000)
            .time_to_idle(Duration::from_secs(config.query_session_idle_seconds))
            .build();

        Self {
            config: Arc::new(config),
            sensor_client,
            rooms: Arc::new(rooms),
            query_sessions,
        }
    }

    /// The last-query-wins handle for a session, created on first use.
    pub async fn query_session(&self, session_id: &str) -> Arc<LatestQuery> {
        self.query_sessions
            .get_with(session_id.to_string(), async { Arc::new(LatestQuery::new()) })
            .await
    }
}
