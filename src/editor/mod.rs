//! 表单状态：条件编辑器与策略表单

pub mod coerce;
pub mod condition_editor;
pub mod form_state;

pub use condition_editor::{ConditionEditor, ConditionRow, FieldVisibility, RowId};
pub use form_state::FormState;
