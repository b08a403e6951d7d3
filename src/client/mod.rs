//! 回测服务接口
//!
//! 表单桥接层只依赖 [`BacktestService`]，HTTP 实现见 [`BacktestHttpClient`]。

mod http_client;

use async_trait::async_trait;

use crate::domain::{BacktestRequest, BacktestResponse, StockInfo};
use crate::error::AppResult;

pub use http_client::{BacktestHttpClient, BACKTEST_PATH, STOCKS_PATH};

#[async_trait]
pub trait BacktestService: Send + Sync {
    /// 提交一次回测，返回服务端原始响应（含 `success:false` 的情况）
    ///
    /// 只在请求未完成或响应无法解析时返回 `Err`。
    async fn run_backtest(&self, request: &BacktestRequest) -> AppResult<BacktestResponse>;

    /// 获取股票池
    async fn list_stocks(&self) -> AppResult<Vec<StockInfo>>;
}
