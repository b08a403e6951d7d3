//! 策略表单状态：条件编辑器 + 排除规则 + 时间范围 + 策略名称

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::condition_editor::ConditionEditor;
use crate::domain::{
    default_strategy_name, ConditionType, ExclusionKind, ExclusionSet, StrategyRequest,
    DEFAULT_TIME_RANGE,
};

#[derive(Debug)]
pub struct FormState {
    editor: ConditionEditor,
    exclude: ExclusionSet,
    /// 时间范围选择框的原文
    time_range: String,
    strategy_name: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// 初始表单带一行默认条件
    pub fn new() -> Self {
        let mut editor = ConditionEditor::new();
        editor.add_condition();
        Self {
            editor,
            exclude: ExclusionSet::default(),
            time_range: DEFAULT_TIME_RANGE.to_string(),
            strategy_name: None,
        }
    }

    pub fn editor(&self) -> &ConditionEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut ConditionEditor {
        &mut self.editor
    }

    pub fn exclude(&self) -> ExclusionSet {
        self.exclude
    }

    pub fn set_exclusion(&mut self, kind: ExclusionKind, checked: bool) {
        self.exclude.set(kind, checked);
    }

    pub fn time_range_input(&self) -> &str {
        &self.time_range
    }

    pub fn set_time_range(&mut self, text: &str) {
        self.time_range = text.to_string();
    }

    /// 时间范围取值；无法解析时使用缺省的 30 个交易日
    pub fn time_range(&self) -> i64 {
        match self.time_range.trim().parse::<i64>() {
            Ok(days) => days,
            Err(_) => {
                warn!(
                    "时间范围 {:?} 无法解析，使用默认值 {}",
                    self.time_range, DEFAULT_TIME_RANGE
                );
                DEFAULT_TIME_RANGE
            }
        }
    }

    pub fn strategy_name(&self) -> Option<&str> {
        self.strategy_name.as_deref()
    }

    pub fn set_strategy_name(&mut self, name: Option<&str>) {
        self.strategy_name = name.map(str::to_string);
    }

    /// 清空条件、重置计数器并补一行默认条件
    pub fn reset_conditions(&mut self) {
        self.editor.clear();
        self.editor.add_condition();
    }

    /// 加载示例策略
    ///
    /// 以回测日为基准（偏移 0）：
    /// T-3 涨停，T-2 上涨，T-1 下跌，T-2 成交量大于 T-1，T 成交量大于 T-1，T 上涨。
    pub fn load_example(&mut self) {
        self.editor.clear();
        self.exclude = ExclusionSet::all();
        self.time_range = DEFAULT_TIME_RANGE.to_string();

        let editor = &mut self.editor;
        editor.add_condition_with_values(ConditionType::LimitUp, -3, 0, 0.0, 1.0);
        editor.add_condition_with_values(ConditionType::PctChangeGt, -2, 0, 0.0, 0.0);
        editor.add_condition_with_values(ConditionType::PctChangeLt, -1, 0, 0.0, 0.0);
        editor.add_condition_with_values(ConditionType::VolumeRatio, -2, -1, 0.0, 1.0);
        editor.add_condition_with_values(ConditionType::VolumeRatio, 0, -1, 0.0, 1.0);
        editor.add_condition_with_values(ConditionType::PctChangeGt, 0, 0, 0.0, 0.0);
        debug!("已加载示例策略，共 {} 个条件", self.editor.len());
    }

    /// 按当前表单内容组装请求；策略名称为空时按提交时间生成
    pub fn to_request(&self, now: DateTime<Utc>) -> StrategyRequest {
        let name = match self.strategy_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => default_strategy_name(now),
        };
        StrategyRequest {
            name,
            conditions: self.editor.conditions(),
            exclude: self.exclude,
            time_range: self.time_range(),
        }
    }
}
