//! 回测服务客户端配置

use super::environment::env_or_default;

/// 回测服务默认监听端口
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8086";

const DEFAULT_USER_AGENT: &str = concat!("quant-backtest/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// 回测服务地址，不含结尾的 `/`
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// 从环境变量读取：BACKTEST_BASE_URL、BACKTEST_USER_AGENT
    pub fn from_env() -> Self {
        let base_url = env_or_default("BACKTEST_BASE_URL", DEFAULT_BASE_URL);
        let user_agent = env_or_default("BACKTEST_USER_AGENT", DEFAULT_USER_AGENT);
        Self {
            base_url: normalize_base_url(&base_url),
            user_agent,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = ClientConfig::default().with_base_url("http://localhost:9000/");
        assert_eq!(config.endpoint("/api/backtest"), "http://localhost:9000/api/backtest");
    }
}
