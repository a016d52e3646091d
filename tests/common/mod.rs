//! In-process stand-in for the upstream sensor platform.
//!
//! Room ids steer the behaviour:
//! - `missing` answers 404 on every resource
//! - `broken` answers 200 with a body that is not JSON
//! - `odd` reports an unknown door state
//! - `quiet` reports `00:00:00` for both open and closed time
//! - `slow` waits two seconds before answering temperature
//! - anything else answers with the Meeting Room M3 data set

#![allow(dead_code)]

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

use room_dashboard::config::Config;

#[derive(Clone, Default)]
pub struct Recorder {
    pub room_list_calls: Arc<AtomicUsize>,
    pub requests: Arc<Mutex<Vec<(String, String, Option<String>)>>>,
}

impl Recorder {
    pub fn room_list_calls(&self) -> usize {
        self.room_list_calls.load(Ordering::SeqCst)
    }

    /// `(room_id, resource, query)` for every room resource request seen so far.
    pub fn requests(&self) -> Vec<(String, String, Option<String>)> {
        self.requests.lock().unwrap().clone()
    }
}

pub struct MockSensorApi {
    pub base_url: String,
    pub recorder: Recorder,
}

impl MockSensorApi {
    pub async fn start() -> Self {
        let recorder = Recorder::default();
        let app = Router::new()
            .route("/rooms", get(rooms))
            .route("/rooms/{room_id}/{resource}", get(room_resource))
            .with_state(recorder.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            recorder,
        }
    }

    pub fn config(&self) -> Config {
        Config::with_base_url(self.base_url.clone())
    }
}

async fn rooms(State(recorder): State<Recorder>) -> Json<serde_json::Value> {
    recorder.room_list_calls.fetch_add(1, Ordering::SeqCst);
    Json(json!([
        "Meeting Room M3",
        {"id": 2, "name": "Kitchen"},
        {"id": "m1", "name": "Meeting Room M1"}
    ]))
}

async fn room_resource(
    State(recorder): State<Recorder>,
    Path((room_id, resource)): Path<(String, String)>,
    RawQuery(query): RawQuery,
) -> Response {
    recorder
        .requests
        .lock()
        .unwrap()
        .push((room_id.clone(), resource.clone(), query));

    match room_id.as_str() {
        "missing" => return StatusCode::NOT_FOUND.into_response(),
        "broken" => return (StatusCode::OK, "<html>oops</html>").into_response(),
        "slow" if resource == "temperatureData" => {
            tokio::time::sleep(Duration::from_secs(2)).await;
        }
        _ => {}
    }

    match resource.as_str() {
        "temperatureData" => Json(temperature_data()).into_response(),
        "doorStateData" => {
            let state = if room_id == "odd" { "AJAR" } else { "PRESENT" };
            Json(json!({
                "data": [
                    {
                        "startDateTime": "2019-07-14T14:00:00.000",
                        "endDateTime": "2019-07-14T14:40:00.000",
                        "state": state
                    },
                    {
                        "startDateTime": "2019-07-14T14:40:00.000",
                        "endDateTime": "2019-07-14T15:15:00.000",
                        "state": "NOT_PRESENT"
                    }
                ]
            }))
            .into_response()
        }
        "doorStateStatistic" => {
            if room_id == "quiet" {
                Json(json!({"openTime": "00:00:00", "closedTime": "00:00:00"})).into_response()
            } else {
                Json(json!({"openTime": "01:30:00", "closedTime": "22:30:00"})).into_response()
            }
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Eight readings from the Meeting Room M3 afternoon.
pub fn temperature_data() -> serde_json::Value {
    json!({
        "data": [
            {"timestamp": "2019-07-14T14:25:00.000", "temperature": 23.5},
            {"timestamp": "2019-07-14T14:26:00.000", "temperature": 22.95},
            {"timestamp": "2019-07-14T14:39:00.000", "temperature": 23.5},
            {"timestamp": "2019-07-14T14:41:00.000", "temperature": 23},
            {"timestamp": "2019-07-14T14:53:00.000", "temperature": 23.55},
            {"timestamp": "2019-07-14T14:56:00.000", "temperature": 23},
            {"timestamp": "2019-07-14T15:07:00.000", "temperature": 23.55},
            {"timestamp": "2019-07-14T15:12:00.000", "temperature": 23}
        ]
    })
}

pub const TEMPERATURES: [f64; 8] = [23.5, 22.95, 23.5, 23.0, 23.55, 23.0, 23.55, 23.0];
