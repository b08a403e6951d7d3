//! # Quant Backtest Client
//!
//! A股条件选股回测客户端：条件编辑、回测请求组装、结果渲染

pub mod app;
pub mod bridge;
pub mod client;
pub mod config;
pub mod domain;
pub mod editor;
pub mod error;
pub mod export;
pub mod logger;
pub mod render;

pub use error::{AppError, AppResult};
