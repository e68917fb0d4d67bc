//! chartboard - category record aggregation and a six-chart SVG dashboard.

pub mod aggregation;
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod orchestrator;
pub mod visualization;
