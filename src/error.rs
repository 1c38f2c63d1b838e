use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 目录中找不到匹配项，或页面缺少预期的结构元素
    #[error("未找到: {what}")]
    NotFound { what: String },

    /// 网络 / HTTP 错误，调用方可以自行重试
    #[error("网络请求失败 ({endpoint}): {source}")]
    Transient {
        endpoint: String,
        #[source]
        source: BoxError,
    },

    /// 结果文件无法写入
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailure {
        path: String,
        #[source]
        source: BoxError,
    },

    /// 浏览器相关错误
    #[error("浏览器错误: {0}")]
    Browser(#[from] BrowserError),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 浏览器相关错误
#[derive(Debug, Error)]
pub enum BrowserError {
    /// 连接浏览器失败
    #[error("无法连接到浏览器 (端口: {port}): {source}")]
    ConnectionFailed {
        port: u16,
        #[source]
        source: BoxError,
    },
    /// 启动浏览器失败
    #[error("启动无头浏览器失败: {source}")]
    LaunchFailed {
        #[source]
        source: BoxError,
    },
    /// 导航失败
    #[error("导航到 {url} 失败: {source}")]
    NavigationFailed {
        url: String,
        #[source]
        source: BoxError,
    },
    /// 执行脚本失败
    #[error("执行脚本失败: {source}")]
    ScriptExecutionFailed {
        #[source]
        source: BoxError,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置文件读取失败
    #[error("无法读取配置文件 {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("配置文件解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 选择器或正则无效
    #[error("无效的 {name}: '{value}'")]
    InvalidPattern { name: String, value: String },
    /// 构建 HTTP 客户端失败
    #[error("HTTP 客户端初始化失败: {0}")]
    HttpClient(String),
}

// ========== 从常见错误类型转换 ==========

impl From<chromiumoxide::error::CdpError> for AppError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AppError::Browser(BrowserError::ScriptExecutionFailed {
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Transient {
            endpoint: "json".to_string(),
            source: Box::new(err),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let endpoint = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        AppError::Transient {
            endpoint,
            source: Box::new(err),
        }
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建未找到错误
    pub fn not_found(what: impl Into<String>) -> Self {
        AppError::NotFound { what: what.into() }
    }

    /// 创建网络请求失败错误
    pub fn transient(
        endpoint: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        AppError::Transient {
            endpoint: endpoint.into(),
            source: source.into(),
        }
    }

    /// 创建文件写入失败错误
    pub fn write_failure(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::WriteFailure {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// 创建浏览器连接错误
    pub fn browser_connection_failed(
        port: u16,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Browser(BrowserError::ConnectionFailed {
            port,
            source: Box::new(source),
        })
    }

    /// 创建导航失败错误
    pub fn navigation_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Browser(BrowserError::NavigationFailed {
            url: url.into(),
            source: Box::new(source),
        })
    }

    /// 交互模式据此决定重新提示，批量模式据此跳过
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, AppError::Transient { .. })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
