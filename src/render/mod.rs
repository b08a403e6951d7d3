//! 结果渲染

pub mod html;
pub mod results_panel;
pub mod terminal;

pub use results_panel::{
    compute_change_percent, ChangeCell, ChangeTone, InfoPanel, ResultRow, ResultsPanel, TablePanel,
    NO_RESULTS_NOTICE, PLACEHOLDER,
};
