//! Black-Scholes pricing of European options on strikes derived from
//! historical spot data, over one or more comparison periods.

pub mod config;
pub mod errors;
pub mod feeds;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod types;
