pub mod export_log;
pub mod renderer;
pub mod roman;
pub mod section_model;

pub use export_log::{ExportKind, ExportLog};
pub use renderer::{render, SheetRenderer};
pub use roman::to_roman;
pub use section_model::{SectionModel, SectionSummary};
