pub mod client_config;
pub mod environment;

pub use client_config::ClientConfig;
pub use environment::{env_is_true, env_or_default};
