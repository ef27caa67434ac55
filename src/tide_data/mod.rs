pub mod aggregator;
pub mod error;
pub mod noaa_client;
mod payload;
pub mod source;
