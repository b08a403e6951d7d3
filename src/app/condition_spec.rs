//! 命令行条件写法
//!
//! - `limit_up:<date1>`
//! - `pct_change_gt:<date1>:<value>` / `pct_change_lt:<date1>:<value>`
//! - `volume_ratio:<date1>:<date2>:<ratio>`
//!
//! 省略的参数保持输入框默认值；数值写错时与表单一样在提交时回退为默认值。

use thiserror::Error;

use crate::domain::{ConditionInput, ConditionType};
use crate::editor::{ConditionEditor, RowId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConditionSpecError {
    #[error("条件不能为空")]
    Empty,

    #[error("未知的条件类型: {0}")]
    UnknownType(String),

    #[error("条件 {spec} 参数过多，{condition_type} 最多 {max} 个参数")]
    TooManyParts {
        spec: String,
        condition_type: ConditionType,
        max: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionSpec {
    pub condition_type: ConditionType,
    /// (输入框, 原文)，按写法中的顺序
    pub inputs: Vec<(ConditionInput, String)>,
}

fn input_order(condition_type: ConditionType) -> &'static [ConditionInput] {
    match condition_type {
        ConditionType::LimitUp => &[ConditionInput::Date1],
        ConditionType::PctChangeGt | ConditionType::PctChangeLt => {
            &[ConditionInput::Date1, ConditionInput::Value]
        }
        ConditionType::VolumeRatio => &[
            ConditionInput::Date1,
            ConditionInput::Date2,
            ConditionInput::Ratio,
        ],
    }
}

impl ConditionSpec {
    pub fn parse(spec: &str) -> Result<Self, ConditionSpecError> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(ConditionSpecError::Empty);
        }

        let mut parts = spec.split(':');
        let type_part = parts.next().unwrap_or_default();
        let condition_type = type_part
            .parse::<ConditionType>()
            .map_err(|_| ConditionSpecError::UnknownType(type_part.to_string()))?;

        let order = input_order(condition_type);
        let values: Vec<&str> = parts.collect();
        if values.len() > order.len() {
            return Err(ConditionSpecError::TooManyParts {
                spec: spec.to_string(),
                condition_type,
                max: order.len(),
            });
        }

        let inputs = order
            .iter()
            .zip(values)
            .map(|(input, text)| (*input, text.trim().to_string()))
            .collect();
        Ok(Self {
            condition_type,
            inputs,
        })
    }

    /// 在编辑器末尾追加一行并填入参数
    pub fn apply(&self, editor: &mut ConditionEditor) -> RowId {
        let id = editor.add_condition();
        editor.set_condition_type(id, self.condition_type);
        for (input, text) in &self.inputs {
            editor.set_condition_field(id, *input, text);
        }
        id
    }
}
