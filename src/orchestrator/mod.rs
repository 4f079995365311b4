//! 编排层（Orchestration Layer）
//!
//! ```text
//! app (命令分发)  /  shell (交互式编辑)
//!     ↓
//! workflow::ExportFlow (保存 / 预览 / PDF)
//!     ↓
//! services (题组模型 / 渲染 / 导出记录)
//!     ↓
//! browser (预览启动器 / 无头浏览器)
//! ```

pub mod app;
pub mod shell;

pub use app::App;
pub use shell::{Shell, ShellCommand};
