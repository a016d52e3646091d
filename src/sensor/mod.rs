pub mod client;
pub mod models;
pub mod normalize;
pub mod range;

pub use client::SensorQueryClient;
pub use range::TimeRange;
