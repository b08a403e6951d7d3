//! 命令行入口

pub mod bootstrap;
pub mod cli;
pub mod condition_spec;

pub use bootstrap::{app_init, fill_form, run};
pub use cli::Cli;
