//! # IELTS Answer Sheet
//!
//! 把一组题组定义（题号区间 + 作答题型）渲染成一份独立的 HTML 答题卡，
//! 答题卡自带评分模式，可以直接在浏览器里自评分、打印。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Browser）
//! - `browser/` - 持有外部进程，只暴露能力
//! - `PreviewLauncher` - 用配置的浏览器或系统默认方式打开预览
//! - `print_to_pdf` - 无头浏览器打印 PDF
//!
//! ### ② 业务能力层（Services）
//! - `SectionModel` - 题组列表的增删、排序、题号推导
//! - `SheetRenderer` - 题组 → 完整 HTML 文档
//! - `ExportLog` - 写导出记录
//!
//! ### ③ 流程层（Workflow）
//! - `ExportFlow` - 保存 HTML / 预览 / 打印 PDF
//!
//! ### ④ 编排层（Orchestration）
//! - `App` - 命令分发
//! - `Shell` - 交互式编辑题组
//!
//! ## 模块结构

pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, SheetError};
pub use models::{AnswerType, NumberingMode, Section, SectionExtra};
pub use orchestrator::App;
pub use services::{render, to_roman, SectionModel, SectionSummary, SheetRenderer};
pub use workflow::ExportFlow;
