pub mod connection;
pub mod headless;

pub use connection::connect_to_browser;
pub use headless::launch_headless_browser;

use chromiumoxide::{Browser, Page};

use crate::config::Config;
use crate::error::AppResult;

/// 按配置获取浏览器：有调试端口则连接，否则启动无头浏览器
pub async fn open_browser(config: &Config) -> AppResult<(Browser, Page)> {
    match config.browser_debug_port {
        Some(port) => connect_to_browser(port).await,
        None => launch_headless_browser(config.browser_executable.as_deref()).await,
    }
}
