//! 导出流程 - 流程层
//!
//! 定义"一份答题卡"的导出方式：保存 HTML、浏览器预览、打印 PDF。
//! 三种方式共用同一次渲染结果，题组为空时统一报告 `NothingToExport`。

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::browser::{print_to_pdf, LaunchMethod, PreviewLauncher};
use crate::config::Config;
use crate::error::{AppError, AppResult, SheetError};
use crate::services::{ExportKind, ExportLog, SectionModel, SheetRenderer};

/// 导出流程
pub struct ExportFlow {
    renderer: SheetRenderer,
    preview: PreviewLauncher,
    export_log: ExportLog,
    pdf_browser: Option<PathBuf>,
}

impl ExportFlow {
    /// 根据配置创建导出流程
    pub fn new(config: &Config) -> Self {
        Self {
            renderer: SheetRenderer::with_title(config.sheet_title.as_str()),
            preview: PreviewLauncher::new(config.preview_browser.as_ref().map(PathBuf::from)),
            export_log: ExportLog::with_path(config.export_log_file.as_str()),
            pdf_browser: config.pdf_browser.as_ref().map(PathBuf::from),
        }
    }

    /// 覆盖答题卡标题
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.renderer = SheetRenderer::with_title(title);
        self
    }

    pub fn title(&self) -> &str {
        self.renderer.title()
    }

    /// 渲染答题卡，题组为空时返回 `NothingToExport`
    pub fn render(&self, model: &SectionModel) -> Result<String, SheetError> {
        self.renderer
            .render(model.mode(), model.sections())
            .ok_or(SheetError::NothingToExport)
    }

    /// 保存 HTML 文件
    ///
    /// 路径不是 `.html` 结尾时自动补上扩展名，返回实际写入的路径
    pub async fn save_html(&self, model: &SectionModel, path: &Path) -> AppResult<PathBuf> {
        let html = self.render(model)?;
        let path = with_extension(path, "html");
        write_file(&path, html.as_bytes()).await?;

        info!("💾 HTML 已保存至: {}", path.display());
        self.record(ExportKind::Html, &path.display().to_string(), model);
        Ok(path)
    }

    /// 在浏览器中预览
    pub fn preview(&self, model: &SectionModel) -> AppResult<LaunchMethod> {
        let html = self.render(model)?;
        let method = self.preview.open(&html)?;

        let target = match method {
            LaunchMethod::ConfiguredBrowser => self
                .preview
                .browser()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            LaunchMethod::SystemDefault => "system default".to_string(),
        };
        self.record(ExportKind::Preview, &target, model);
        Ok(method)
    }

    /// 用无头浏览器打印 PDF
    pub async fn save_pdf(&self, model: &SectionModel, path: &Path) -> AppResult<PathBuf> {
        let html = self.render(model)?;
        let pdf = print_to_pdf(&html, self.pdf_browser.as_deref()).await?;
        let path = with_extension(path, "pdf");
        write_file(&path, &pdf).await?;

        info!("🖨️ PDF 已保存至: {}", path.display());
        self.record(ExportKind::Pdf, &path.display().to_string(), model);
        Ok(path)
    }

    // 导出记录失败不影响导出结果
    fn record(&self, kind: ExportKind, target: &str, model: &SectionModel) {
        if let Err(e) = self.export_log.record(kind, target, model.total_questions()) {
            warn!("⚠️ 写入导出记录失败 ({}): {}", self.export_log.path(), e);
        }
    }
}

/// 扩展名不匹配时追加扩展名（保留原有的其他后缀，例如 `test.v2` → `test.v2.html`）
pub fn with_extension(path: &Path, extension: &str) -> PathBuf {
    let matches = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension));
    if matches {
        return path.to_path_buf();
    }

    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

async fn write_file(path: &Path, contents: &[u8]) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::file_write_failed(parent, e))?;
    }
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| AppError::file_write_failed(path, e))
}
