use std::path::Path;

use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::error::{AppResult, BrowserError};

/// 启动无头浏览器
///
/// # 参数
/// - `executable`: Chrome / Edge 可执行文件，`None` 时由 chromiumoxide 自动查找
pub async fn launch_headless_browser(executable: Option<&Path>) -> AppResult<(Browser, JoinHandle<()>)> {
    info!("🚀 启动无头浏览器...");

    let mut builder = BrowserConfig::builder().new_headless_mode().args(vec![
        "--disable-gpu",             // Windows 无头模式必须禁用 GPU
        "--no-sandbox",              // 禁用沙盒，防止权限问题导致的崩溃
        "--disable-dev-shm-usage",   // 防止共享内存不足
        "--remote-debugging-port=0", // 让浏览器自动选择端口
    ]);
    if let Some(path) = executable {
        debug!("使用浏览器: {}", path.display());
        builder = builder.chrome_executable(path);
    }

    let config = builder.build().map_err(|e| {
        error!("配置无头浏览器失败: {}", e);
        BrowserError::ConfigurationFailed(e)
    })?;

    let (browser, mut handler) = Browser::launch(config).await.map_err(|e| {
        error!("启动无头浏览器失败: {}", e);
        BrowserError::LaunchFailed { source: e }
    })?;
    debug!("无头浏览器启动成功");

    // 在后台处理浏览器事件
    let handle = tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    Ok((browser, handle))
}

/// 在无头浏览器中加载 HTML 并打印成 PDF
///
/// 打印样式会显示所有复选框和标准答案控件
pub async fn print_to_pdf(html: &str, executable: Option<&Path>) -> AppResult<Vec<u8>> {
    let (mut browser, handle) = launch_headless_browser(executable).await?;

    let result = render_pdf(&browser, html).await;

    if let Err(e) = browser.close().await {
        error!("关闭无头浏览器失败: {}", e);
    }
    let _ = handle.await;

    let pdf = result.map_err(|e| {
        error!("打印PDF失败: {}", e);
        BrowserError::PrintFailed { source: e }
    })?;
    info!("✅ PDF 打印完成 ({} 字节)", pdf.len());

    Ok(pdf)
}

async fn render_pdf(browser: &Browser, html: &str) -> chromiumoxide::error::Result<Vec<u8>> {
    let page = browser.new_page("about:blank").await?;
    page.set_content(html).await?;
    debug!("页面内容加载成功");

    let params = PrintToPdfParams {
        print_background: Some(true),
        ..Default::default()
    };
    page.pdf(params).await
}
