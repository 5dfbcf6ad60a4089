pub mod classifier;
pub mod unique_set;
pub mod sorter;
pub mod pipeline;
pub mod ports;
