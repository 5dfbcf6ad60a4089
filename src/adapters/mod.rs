pub mod fs;
pub mod sorter;
