pub mod cli;
pub mod config;
pub mod error;
pub mod exclude;
pub mod modes;
pub mod ranges;
pub mod runner;
pub mod tracing;
