use anyhow::Result;
use clap::Parser;

use quant_backtest_client::app::{self, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    app::app_init().await?;
    app::run(cli).await
}
