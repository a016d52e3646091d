//! Room Dashboard - temperature and door-state history for smart-building rooms
//!
//! This library exposes the core modules for testing and reuse.

pub mod common;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod rooms;
pub mod routes;
pub mod sensor;
pub mod theme;
