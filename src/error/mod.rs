//! 统一错误类型定义

use thiserror::Error;

/// 应用错误类型
///
/// 与回测服务交互时的四类失败：
/// - 输入转换失败不会出现在这里，由表单静默回退为默认值
/// - `Network`: 请求未能完成（连接失败、读取响应体失败）
/// - `Decode`: 响应不是预期的 JSON 结构
/// - `Api`: 响应结构正确但 `success` 为 false
#[derive(Debug, Error)]
pub enum AppError {
    #[error("网络错误: {0}")]
    Network(String),

    #[error("解析错误: {0}")]
    Decode(String),

    #[error("{0}")]
    Api(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// 不带分类前缀的错误原文，用于结果面板展示
    pub fn detail(&self) -> String {
        match self {
            AppError::Network(msg)
            | AppError::Decode(msg)
            | AppError::Api(msg)
            | AppError::Config(msg) => msg.clone(),
            AppError::Io(e) => e.to_string(),
            AppError::Serialization(e) => e.to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::Decode(e.to_string())
        } else {
            AppError::Network(e.to_string())
        }
    }
}
