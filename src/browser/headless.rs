use anyhow::Result;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::error::{AppError, BrowserError};

/// 启动无头浏览器并打开初始页面
pub async fn launch_headless_browser(url: &str) -> Result<(Browser, Page)> {
    info!("🚀 启动无头浏览器...");
    debug!("初始 URL: {}", url);

    let config = BrowserConfig::builder()
        .new_headless_mode()
        .args(vec![
            "--disable-gpu",           // 无头模式下禁用 GPU
            "--no-sandbox",            // 禁用沙盒，防止权限问题导致的崩溃
            "--disable-dev-shm-usage", // 防止共享内存不足
        ])
        .build()
        .map_err(|e| {
            error!("配置无头浏览器失败: {}", e);
            anyhow::anyhow!("配置无头浏览器失败: {}", e)
        })?;

    let (browser, mut handler) = Browser::launch(config).await.map_err(|e| {
        error!("启动无头浏览器失败: {}", e);
        AppError::Browser(BrowserError::LaunchFailed {
            source: Box::new(e),
        })
    })?;
    debug!("无头浏览器启动成功");

    // 在后台处理浏览器事件
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    let page = browser.new_page(url).await.map_err(|e| {
        error!("创建页面失败: {}", e);
        AppError::Browser(BrowserError::NavigationFailed {
            url: url.to_string(),
            source: Box::new(e),
        })
    })?;

    info!("✅ 无头浏览器已打开: {}", url);
    Ok((browser, page))
}

/// 尽力关闭浏览器（失败只记日志）
pub async fn shutdown_browser(mut browser: Browser) {
    if let Err(e) = browser.close().await {
        warn!("关闭浏览器失败: {}", e);
    }
    let _ = browser.wait().await;
}
