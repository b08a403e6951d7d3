//! 领域模型：条件、排除规则、回测请求与响应

pub mod condition;
pub mod exclusion;
pub mod stock_match;
pub mod strategy;

pub use condition::{Condition, ConditionInput, ConditionType};
pub use exclusion::{ExclusionKind, ExclusionSet};
pub use stock_match::{BacktestResponse, StockInfo, StockListResponse, StockMatch};
pub use strategy::{default_strategy_name, BacktestRequest, StrategyRequest, DEFAULT_TIME_RANGE};
