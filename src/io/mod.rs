pub mod csv;
pub mod data_dir;
pub mod json;

pub use data_dir::{ensure_data_dir, DataDir};
