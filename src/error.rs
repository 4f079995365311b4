use std::path::PathBuf;

use thiserror::Error;

/// 答题卡题组校验错误
///
/// 所有错误都只针对当前这一次操作，题组列表保持不变、可以继续使用
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    /// 罗马数字匹配题的最大序号缺失或不是正整数
    #[error("罗马数字匹配题需要填写最大序号（正整数，例如 5），当前输入: {extra:?}")]
    InvalidExtraRoman { extra: String },

    /// 字母匹配题的最大字母缺失或不是单个字母
    #[error("字母匹配题需要填写单个最大字母（例如 C），当前输入: {extra:?}")]
    InvalidExtraLetter { extra: String },

    /// 题目数量 / 结束题号不是正整数
    #[error("题目数量或结束题号必须是正整数，当前输入: {value:?}")]
    InvalidCount { value: String },

    /// 结束题号模式下，结束题号小于下一个题号
    #[error("结束题号必须 >= {next}，当前输入: {end}")]
    EndNumberTooLow { end: u32, next: u32 },

    /// 上移 / 下移 / 删除时索引超出范围
    #[error("索引 {index} 超出范围 [0, {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// 题组列表为空，无法导出
    #[error("没有可导出的题组，请至少添加一个题组")]
    NothingToExport,

    /// 参数不在定义域内（例如把 0 转成罗马数字）
    #[error("无效参数: {0}")]
    InvalidArgument(String),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({}): {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 写入文件失败
    #[error("写入文件失败 ({}): {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML 解析失败
    #[error("TOML解析失败 ({}): {source}", .path.display())]
    TomlParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// 浏览器相关错误
#[derive(Debug, Error)]
pub enum BrowserError {
    /// 浏览器配置失败
    #[error("浏览器配置失败: {0}")]
    ConfigurationFailed(String),

    /// 启动浏览器失败
    #[error("启动浏览器失败: {source}")]
    LaunchFailed {
        #[source]
        source: chromiumoxide::error::CdpError,
    },

    /// 打印 PDF 失败
    #[error("打印PDF失败: {source}")]
    PrintFailed {
        #[source]
        source: chromiumoxide::error::CdpError,
    },

    /// 预览打开失败（指定浏览器和系统默认方式都失败）
    #[error("无法打开预览: {source}")]
    PreviewFailed {
        #[source]
        source: std::io::Error,
    },
}

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 题组校验错误
    #[error("题组错误: {0}")]
    Sheet(#[from] SheetError),

    /// 答题卡文件中的某个题组无效
    #[error("第 {position} 个题组无效: {source}")]
    InvalidSection {
        position: usize,
        #[source]
        source: SheetError,
    },

    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),

    /// 浏览器相关错误
    #[error("浏览器错误: {0}")]
    Browser(#[from] BrowserError),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_section_keeps_source() {
        let err = AppError::InvalidSection {
            position: 2,
            source: SheetError::EndNumberTooLow { end: 3, next: 8 },
        };

        assert_eq!(err.to_string(), "第 2 个题组无效: 结束题号必须 >= 8，当前输入: 3");
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("结束题号必须 >= 8，当前输入: 3"));
    }

    #[test]
    fn test_sheet_error_converts_into_app_error() {
        let err: AppError = SheetError::NothingToExport.into();
        assert!(matches!(err, AppError::Sheet(SheetError::NothingToExport)));
    }
}
