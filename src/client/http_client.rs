use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::BacktestService;
use crate::config::ClientConfig;
use crate::domain::{BacktestRequest, BacktestResponse, StockInfo, StockListResponse};
use crate::error::{AppError, AppResult};

pub const BACKTEST_PATH: &str = "/api/backtest";
pub const STOCKS_PATH: &str = "/api/stocks";

/// 基于 reqwest 的回测服务客户端
///
/// 不设超时、不重试：请求要么完成，要么以错误返回。
pub struct BacktestHttpClient {
    client: Client,
    config: ClientConfig,
}

impl BacktestHttpClient {
    pub fn new(config: ClientConfig) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| AppError::Config(format!("invalid user agent: {}", e)))?;
        headers.insert(USER_AGENT, user_agent);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn from_env() -> AppResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// 解析响应体；服务端失败时也会返回 JSON（HTTP 500），因此不论状态码都先尝试解析
    fn decode_body<T: DeserializeOwned>(path: &str, status: StatusCode, body: &str) -> AppResult<T> {
        serde_json::from_str(body).map_err(|e| {
            warn!("path:{} status:{} 响应无法解析: {}", path, status, e);
            if status.is_success() {
                AppError::Decode(e.to_string())
            } else {
                AppError::Decode(format!("HTTP {}: {}", status.as_u16(), e))
            }
        })
    }
}

#[async_trait]
impl BacktestService for BacktestHttpClient {
    async fn run_backtest(&self, request: &BacktestRequest) -> AppResult<BacktestResponse> {
        let url = self.config.endpoint(BACKTEST_PATH);
        let body = serde_json::to_string(request)?;
        info!(
            "提交回测 strategy={} conditions={} time_range={}",
            request.strategy.name,
            request.strategy.conditions.len(),
            request.strategy.time_range
        );
        debug!("path:{},request_body: {}", BACKTEST_PATH, body);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let response_body = response.text().await?;
        debug!("path:{},status:{},response: {}", BACKTEST_PATH, status, response_body);

        Self::decode_body(BACKTEST_PATH, status, &response_body)
    }

    async fn list_stocks(&self) -> AppResult<Vec<StockInfo>> {
        let url = self.config.endpoint(STOCKS_PATH);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let response_body = response.text().await?;

        let stocks: StockListResponse = Self::decode_body(STOCKS_PATH, status, &response_body)?;
        let stocks = stocks.into_result()?;
        info!("获取股票池 {} 只", stocks.len());
        Ok(stocks)
    }
}
