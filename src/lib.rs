pub mod config;
pub mod crop;
pub mod data;
pub mod logging;
pub mod pipeline;

pub use crop::*;
pub use data::*;
pub use pipeline::{check_file, crop_file, save_report, CropReport};

pub type Result<T> = anyhow::Result<T>;
