mod client;
mod reply;

pub use client::{AvailabilityApi, AvailabilityClient};
pub use reply::parse_reply;
