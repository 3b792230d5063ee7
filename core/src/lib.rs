//! Supply chain intelligence pipeline: synthetic data generation, a
//! linear extract/transform/analytics/load run, and a static dashboard.

pub mod analytics;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod extract;
pub mod forecast;
pub mod generator;
pub mod load;
pub mod model;
pub mod pipeline;
pub mod rng;
pub mod table;
pub mod transform;
pub mod types;
