//! The mock backend: an in-memory store seeded with sample rows and the services that read and
//! mutate it after an artificial delay.

pub mod auth;
pub mod latency;
pub mod posts;
mod record;
pub mod store;
pub mod users;

pub use latency::Latency;
pub use store::MockStore;
