//! Data types produced by the answer and graph-summary parsers.

pub mod answer;
pub mod config;
pub mod graph;
