mod state;

pub use state::{AppState, QuerySessions};
