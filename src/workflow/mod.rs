pub mod export_flow;

pub use export_flow::{with_extension, ExportFlow};
