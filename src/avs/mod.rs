pub mod api;
pub mod cache;
pub mod client;
pub mod error;

pub use cache::{Snapshot, SnapshotCache};
pub use client::AvsClient;
pub use error::ApiError;
