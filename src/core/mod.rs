//! Configuration and the records passed between handler stages

pub mod config;
pub mod models;
