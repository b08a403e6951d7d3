//! 选股条件
//!
//! 条件中的日期均为相对回测基准日的交易日偏移：0 表示基准日本身，
//! 负数表示往前推 N 个交易日。偏移到具体日期的换算由回测服务完成。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 条件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConditionType {
    /// 涨停
    #[default]
    LimitUp,
    /// 涨幅大于
    PctChangeGt,
    /// 涨幅小于
    PctChangeLt,
    /// 成交量比例
    VolumeRatio,
}

impl ConditionType {
    pub const ALL: [ConditionType; 4] = [
        ConditionType::LimitUp,
        ConditionType::PctChangeGt,
        ConditionType::PctChangeLt,
        ConditionType::VolumeRatio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionType::LimitUp => "limit_up",
            ConditionType::PctChangeGt => "pct_change_gt",
            ConditionType::PctChangeLt => "pct_change_lt",
            ConditionType::VolumeRatio => "volume_ratio",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConditionType::LimitUp => "涨停",
            ConditionType::PctChangeGt => "涨幅大于",
            ConditionType::PctChangeLt => "涨幅小于",
            ConditionType::VolumeRatio => "成交量比例",
        }
    }

    /// 该类型需要展示的可选输入框（`date1` 始终展示，不在此列）
    pub fn visible_inputs(&self) -> &'static [ConditionInput] {
        match self {
            ConditionType::LimitUp => &[],
            ConditionType::PctChangeGt | ConditionType::PctChangeLt => &[ConditionInput::Value],
            ConditionType::VolumeRatio => &[ConditionInput::Date2, ConditionInput::Ratio],
        }
    }
}

impl fmt::Display for ConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "limit_up" => Ok(ConditionType::LimitUp),
            "pct_change_gt" => Ok(ConditionType::PctChangeGt),
            "pct_change_lt" => Ok(ConditionType::PctChangeLt),
            "volume_ratio" => Ok(ConditionType::VolumeRatio),
            _ => Err(format!("Unknown condition type: {}", s)),
        }
    }
}

/// 条件行上的数值输入框
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionInput {
    /// 交易日偏移
    Date1,
    /// 涨跌幅阈值
    Value,
    /// 交易日偏移2
    Date2,
    /// 成交量比例阈值
    Ratio,
}

impl ConditionInput {
    /// 是否随条件类型显示/隐藏
    pub fn is_optional(&self) -> bool {
        !matches!(self, ConditionInput::Date1)
    }
}

/// 发送给回测服务的条件
///
/// 序列化时只包含与 `type` 相关的字段，例如 `{"type":"limit_up","date1":-3}`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    LimitUp { date1: i64 },
    PctChangeGt { date1: i64, value: f64 },
    PctChangeLt { date1: i64, value: f64 },
    VolumeRatio { date1: i64, date2: i64, ratio: f64 },
}

impl Condition {
    pub fn condition_type(&self) -> ConditionType {
        match self {
            Condition::LimitUp { .. } => ConditionType::LimitUp,
            Condition::PctChangeGt { .. } => ConditionType::PctChangeGt,
            Condition::PctChangeLt { .. } => ConditionType::PctChangeLt,
            Condition::VolumeRatio { .. } => ConditionType::VolumeRatio,
        }
    }

    pub fn date1(&self) -> i64 {
        match self {
            Condition::LimitUp { date1 }
            | Condition::PctChangeGt { date1, .. }
            | Condition::PctChangeLt { date1, .. }
            | Condition::VolumeRatio { date1, .. } => *date1,
        }
    }
}
