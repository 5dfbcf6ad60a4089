//! unique-int library — distinct integer extraction with a hand-built set and sorters.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
