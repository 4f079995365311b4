//! 浏览器预览
//!
//! 把答题卡编码成 data URL 交给浏览器打开。配置了浏览器可执行文件时
//! 优先使用它，启动失败或未配置时退回系统默认的打开方式。

use std::path::PathBuf;
use std::process::{Command, Stdio};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{debug, info, warn};

use crate::error::{AppResult, BrowserError};

/// 实际使用的打开方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMethod {
    /// 配置的浏览器可执行文件
    ConfiguredBrowser,
    /// 系统默认方式
    SystemDefault,
}

/// 预览启动器
#[derive(Debug, Clone, Default)]
pub struct PreviewLauncher {
    browser: Option<PathBuf>,
}

impl PreviewLauncher {
    /// 创建预览启动器
    ///
    /// # 参数
    /// - `browser`: 浏览器可执行文件，`None` 时直接使用系统默认方式
    pub fn new(browser: Option<PathBuf>) -> Self {
        Self { browser }
    }

    pub fn browser(&self) -> Option<&PathBuf> {
        self.browser.as_ref()
    }

    /// 打开 HTML 预览
    pub fn open(&self, html: &str) -> AppResult<LaunchMethod> {
        let url = data_url(html);
        debug!("data URL 长度: {}", url.len());

        if let Some(browser) = &self.browser {
            match Command::new(browser)
                .arg(&url)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
            {
                Ok(_) => {
                    info!("🌐 已在 {} 中打开预览", browser.display());
                    return Ok(LaunchMethod::ConfiguredBrowser);
                }
                Err(e) => {
                    warn!("⚠️ 启动 {} 失败: {}，改用系统默认方式", browser.display(), e);
                }
            }
        }

        open::that_detached(&url).map_err(|e| BrowserError::PreviewFailed { source: e })?;
        info!("🌐 已使用系统默认方式打开预览");
        Ok(LaunchMethod::SystemDefault)
    }
}

/// 把 HTML 编码成 base64 data URL
pub fn data_url(html: &str) -> String {
    format!("data:text/html;base64,{}", STANDARD.encode(html.as_bytes()))
}
