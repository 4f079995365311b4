use crate::services::renderer::DEFAULT_TITLE;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 答题卡默认标题（定义文件中的 title 优先）
    pub sheet_title: String,
    /// HTML / PDF 默认输出目录
    pub output_dir: String,
    /// 预览使用的浏览器可执行文件，未设置时使用系统默认方式打开
    pub preview_browser: Option<String>,
    /// 打印 PDF 使用的 Chrome / Edge 可执行文件，未设置时自动查找
    pub pdf_browser: Option<String>,
    /// 导出记录文件
    pub export_log_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_title: DEFAULT_TITLE.to_string(),
            output_dir: "output_html".to_string(),
            preview_browser: None,
            pdf_browser: None,
            export_log_file: "export_log.txt".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            sheet_title: std::env::var("SHEET_TITLE").unwrap_or(default.sheet_title),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            preview_browser: non_empty_var("PREVIEW_BROWSER").or(default.preview_browser),
            pdf_browser: non_empty_var("PDF_BROWSER").or(default.pdf_browser),
            export_log_file: std::env::var("EXPORT_LOG_FILE").unwrap_or(default.export_log_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
