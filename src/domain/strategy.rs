//! 回测请求

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::condition::Condition;
use super::exclusion::ExclusionSet;

/// 时间范围缺省值（交易日数）
pub const DEFAULT_TIME_RANGE: i64 = 30;

/// 一次提交的策略
///
/// 条件顺序对回测服务有意义，这里原样保留。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyRequest {
    pub name: String,
    pub conditions: Vec<Condition>,
    pub exclude: ExclusionSet,
    /// 回测最近多少个交易日
    pub time_range: i64,
}

/// `POST /api/backtest` 的请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestRequest {
    pub strategy: StrategyRequest,
}

impl From<StrategyRequest> for BacktestRequest {
    fn from(strategy: StrategyRequest) -> Self {
        Self { strategy }
    }
}

/// 未填写策略名称时按提交时间生成，如 `策略_2026-01-12T09-30-00`
pub fn default_strategy_name(now: DateTime<Utc>) -> String {
    format!("策略_{}", now.format("%Y-%m-%dT%H-%M-%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_default_strategy_name() {
        let now = Utc.with_ymd_and_hms(2026, 1, 12, 9, 30, 5).unwrap();
        assert_eq!(default_strategy_name(now), "策略_2026-01-12T09-30-05");
    }

    #[test]
    fn test_request_wire_shape() {
        let request = BacktestRequest::from(StrategyRequest {
            name: "demo".to_string(),
            conditions: vec![Condition::LimitUp { date1: 0 }],
            exclude: ExclusionSet::default(),
            time_range: 20,
        });
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["strategy"]["timeRange"], json!(20));
        assert_eq!(value["strategy"]["name"], json!("demo"));
        assert_eq!(value["strategy"]["conditions"][0]["type"], json!("limit_up"));
        assert_eq!(value["strategy"]["exclude"]["delist"], json!(false));
    }
}
