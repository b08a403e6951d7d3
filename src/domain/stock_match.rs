//! 回测服务响应

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// 符合条件的股票
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMatch {
    pub code: String,
    pub name: String,
    /// 符合条件的基准日 (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_date: Option<String>,
    /// 基准日收盘价
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_price: Option<f64>,
    /// 最新收盘价
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
}

/// `POST /api/backtest` 的响应
///
/// 成功: `{"success": true, "data": [...], "count": n}`
/// 失败: `{"success": false, "error": "..."}`（服务端可能同时返回 HTTP 500）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BacktestResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<StockMatch>>,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub error: Option<String>,
}

impl BacktestResponse {
    pub fn ok(data: Vec<StockMatch>) -> Self {
        Self {
            success: true,
            count: Some(data.len()),
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: &str) -> Self {
        Self {
            success: false,
            data: None,
            count: None,
            error: Some(error.to_string()),
        }
    }

    /// 拆分为 (count, rows)；`success` 为 false 或缺失时返回服务端的错误信息原文
    pub fn into_result(self) -> AppResult<(usize, Vec<StockMatch>)> {
        if !self.success {
            return Err(AppError::Api(self.error.unwrap_or_default()));
        }
        let data = self.data.unwrap_or_default();
        let count = self.count.unwrap_or(data.len());
        Ok((count, data))
    }
}

/// 股票池中的一只股票
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockInfo {
    pub code: String,
    pub name: String,
}

/// `GET /api/stocks` 的响应
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StockListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<StockInfo>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl StockListResponse {
    pub fn into_result(self) -> AppResult<Vec<StockInfo>> {
        if !self.success {
            return Err(AppError::Api(self.error.unwrap_or_default()));
        }
        Ok(self.data.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_with_missing_optionals() {
        let body = r#"{"success": true, "count": 1,
            "data": [{"code": "600000", "name": "浦发银行", "match_date": null}]}"#;
        let response: BacktestResponse = serde_json::from_str(body).unwrap();
        let (count, rows) = response.into_result().unwrap();
        assert_eq!(count, 1);
        assert_eq!(rows[0].match_date, None);
        assert_eq!(rows[0].match_price, None);
    }

    #[test]
    fn test_missing_success_flag_is_failure() {
        let response: BacktestResponse = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_count_falls_back_to_row_count() {
        let body = r#"{"success": true, "data": [{"code": "000001", "name": "平安银行"}]}"#;
        let response: BacktestResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.into_result().unwrap().0, 1);
    }
}
