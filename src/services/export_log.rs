//! 导出记录服务 - 业务能力层
//!
//! 只负责"追加一行导出记录"，不关心导出流程

use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 导出类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Html,
    Preview,
    Pdf,
}

impl std::fmt::Display for ExportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportKind::Html => write!(f, "html"),
            ExportKind::Preview => write!(f, "preview"),
            ExportKind::Pdf => write!(f, "pdf"),
        }
    }
}

/// 导出记录
pub struct ExportLog {
    log_file_path: String,
}

impl ExportLog {
    /// 创建新的导出记录服务
    pub fn new() -> Self {
        Self {
            log_file_path: "export_log.txt".to_string(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            log_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.log_file_path
    }

    /// 追加一条导出记录
    ///
    /// # 参数
    /// - `kind`: 导出类型
    /// - `target`: 导出目标（文件路径或浏览器）
    /// - `questions`: 题目总数
    pub fn record(&self, kind: ExportKind, target: &str, questions: u32) -> Result<()> {
        debug!("写入导出记录: {} | {} | {} 题", kind, target, questions);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file_path)?;

        let line = format!(
            "{} | {} | {} | {} questions\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            kind,
            target,
            questions
        );

        file.write_all(line.as_bytes())?;

        Ok(())
    }
}

impl Default for ExportLog {
    fn default() -> Self {
        Self::new()
    }
}
