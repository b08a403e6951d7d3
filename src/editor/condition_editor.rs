//! 条件编辑器
//!
//! 条件行保存在编辑器自己的有序表中（行 ID -> 行状态）。行 ID 由单调递增的
//! 计数器分配，只有清空操作才会重置计数器，因此按 ID 排序即为添加顺序。

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::coerce::{parse_float_or, parse_int_or, DEFAULT_OFFSET, DEFAULT_RATIO, DEFAULT_VALUE};
use crate::domain::{Condition, ConditionInput, ConditionType};

/// 条件行 ID，显示为 `condition_<n>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "condition_{}", self.0)
    }
}

impl FromStr for RowId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("condition_")
            .and_then(|n| n.parse::<u64>().ok())
            .map(RowId)
            .ok_or_else(|| format!("Invalid condition id: {}", s))
    }
}

/// 可选输入框的显示状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldVisibility {
    pub value: bool,
    pub date2: bool,
    pub ratio: bool,
}

impl FieldVisibility {
    pub fn for_type(condition_type: ConditionType) -> Self {
        let mut visibility = Self::default();
        for input in condition_type.visible_inputs() {
            match input {
                ConditionInput::Value => visibility.value = true,
                ConditionInput::Date2 => visibility.date2 = true,
                ConditionInput::Ratio => visibility.ratio = true,
                ConditionInput::Date1 => {}
            }
        }
        visibility
    }

    pub fn is_visible(&self, input: ConditionInput) -> bool {
        match input {
            ConditionInput::Date1 => true,
            ConditionInput::Value => self.value,
            ConditionInput::Date2 => self.date2,
            ConditionInput::Ratio => self.ratio,
        }
    }
}

/// 一行条件的表单状态
///
/// 数值字段保存用户输入的原文，提交时再转换；切换类型只改变显示状态，
/// 隐藏字段的内容仍然保留。
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionRow {
    pub condition_type: ConditionType,
    pub date1: String,
    pub value: String,
    pub date2: String,
    pub ratio: String,
    visibility: FieldVisibility,
}

impl Default for ConditionRow {
    fn default() -> Self {
        Self::new(
            ConditionType::default(),
            DEFAULT_OFFSET,
            DEFAULT_OFFSET,
            DEFAULT_VALUE,
            DEFAULT_RATIO,
        )
    }
}

impl ConditionRow {
    pub fn new(condition_type: ConditionType, date1: i64, date2: i64, value: f64, ratio: f64) -> Self {
        Self {
            condition_type,
            date1: date1.to_string(),
            value: value.to_string(),
            date2: date2.to_string(),
            ratio: ratio.to_string(),
            visibility: FieldVisibility::for_type(condition_type),
        }
    }

    pub fn visibility(&self) -> FieldVisibility {
        self.visibility
    }

    pub fn input(&self, input: ConditionInput) -> &str {
        match input {
            ConditionInput::Date1 => &self.date1,
            ConditionInput::Value => &self.value,
            ConditionInput::Date2 => &self.date2,
            ConditionInput::Ratio => &self.ratio,
        }
    }

    fn input_mut(&mut self, input: ConditionInput) -> &mut String {
        match input {
            ConditionInput::Date1 => &mut self.date1,
            ConditionInput::Value => &mut self.value,
            ConditionInput::Date2 => &mut self.date2,
            ConditionInput::Ratio => &mut self.ratio,
        }
    }

    /// 转为请求中的条件，只取当前类型相关的字段
    pub fn to_condition(&self) -> Condition {
        let date1 = parse_int_or(&self.date1, DEFAULT_OFFSET);
        match self.condition_type {
            ConditionType::LimitUp => Condition::LimitUp { date1 },
            ConditionType::PctChangeGt => Condition::PctChangeGt {
                date1,
                value: parse_float_or(&self.value, DEFAULT_VALUE),
            },
            ConditionType::PctChangeLt => Condition::PctChangeLt {
                date1,
                value: parse_float_or(&self.value, DEFAULT_VALUE),
            },
            ConditionType::VolumeRatio => Condition::VolumeRatio {
                date1,
                date2: parse_int_or(&self.date2, DEFAULT_OFFSET),
                ratio: parse_float_or(&self.ratio, DEFAULT_RATIO),
            },
        }
    }
}

#[derive(Debug, Default)]
pub struct ConditionEditor {
    rows: BTreeMap<RowId, ConditionRow>,
    next_id: u64,
}

impl ConditionEditor {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, row: ConditionRow) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.insert(id, row);
        id
    }

    /// 追加一行默认条件（涨停，偏移 0）
    pub fn add_condition(&mut self) -> RowId {
        let id = self.insert(ConditionRow::default());
        self.update_condition_inputs(id);
        debug!("添加条件 {}", id);
        id
    }

    /// 追加一行预填条件
    pub fn add_condition_with_values(
        &mut self,
        condition_type: ConditionType,
        date1: i64,
        date2: i64,
        value: f64,
        ratio: f64,
    ) -> RowId {
        self.insert(ConditionRow::new(condition_type, date1, date2, value, ratio))
    }

    /// 根据行当前的类型重新计算可选输入框的显示状态；行不存在时返回 false
    pub fn update_condition_inputs(&mut self, id: RowId) -> bool {
        match self.rows.get_mut(&id) {
            Some(row) => {
                row.visibility = FieldVisibility::for_type(row.condition_type);
                true
            }
            None => false,
        }
    }

    /// 删除一行；ID 不存在（包括已删除）时什么也不做
    pub fn remove_condition(&mut self, id: RowId) -> bool {
        let removed = self.rows.remove(&id).is_some();
        if !removed {
            debug!("删除条件 {} 时未找到该行，忽略", id);
        }
        removed
    }

    /// 删除所有行并重置计数器
    pub fn clear(&mut self) {
        self.rows.clear();
        self.next_id = 0;
    }

    /// 切换条件类型，随后刷新输入框显示状态
    pub fn set_condition_type(&mut self, id: RowId, condition_type: ConditionType) -> bool {
        match self.rows.get_mut(&id) {
            Some(row) => row.condition_type = condition_type,
            None => return false,
        }
        self.update_condition_inputs(id)
    }

    /// 修改输入框原文（隐藏的输入框同样可以修改）
    pub fn set_condition_field(&mut self, id: RowId, input: ConditionInput, text: &str) -> bool {
        match self.rows.get_mut(&id) {
            Some(row) => {
                *row.input_mut(input) = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn row(&self, id: RowId) -> Option<&ConditionRow> {
        self.rows.get(&id)
    }

    /// 按添加顺序遍历
    pub fn rows(&self) -> impl Iterator<Item = (RowId, &ConditionRow)> {
        self.rows.iter().map(|(id, row)| (*id, row))
    }

    pub fn ids(&self) -> Vec<RowId> {
        self.rows.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn conditions(&self) -> Vec<Condition> {
        self.rows.values().map(ConditionRow::to_condition).collect()
    }
}
