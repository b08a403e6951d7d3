use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// A股条件选股回测客户端
#[derive(Debug, Parser)]
#[command(name = "quant-backtest", version)]
pub struct Cli {
    /// 回测服务地址，覆盖 BACKTEST_BASE_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 加载示例策略并回测
    Example(OutputArgs),
    /// 按给定条件回测
    Run(RunArgs),
    /// 列出股票池
    Stocks {
        /// 最多显示多少只
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// 将结果面板写为 HTML 片段
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// 将结果写为 JSON Lines
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// 条件，可重复：limit_up:-3 / pct_change_gt:-2:0 / volume_ratio:-2:-1:1
    #[arg(short = 'c', long = "condition", required = true, allow_hyphen_values = true)]
    pub conditions: Vec<String>,

    /// 排除规则，逗号分隔：kcb,cyb,bjs,st,delist
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// 回测最近多少个交易日
    #[arg(long, default_value = "30", allow_hyphen_values = true)]
    pub time_range: String,

    /// 策略名称，缺省按提交时间生成
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_args() {
        let cli = Cli::try_parse_from([
            "quant-backtest",
            "--base-url",
            "http://10.0.0.2:8086",
            "run",
            "-c",
            "limit_up:-3",
            "--condition",
            "pct_change_gt:-2:0",
            "--exclude",
            "kcb,st",
            "--time-range",
            "20",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://10.0.0.2:8086"));
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.conditions, vec!["limit_up:-3", "pct_change_gt:-2:0"]);
                assert_eq!(args.exclude, vec!["kcb", "st"]);
                assert_eq!(args.time_range, "20");
                assert!(args.output.html.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_run_requires_condition() {
        assert!(Cli::try_parse_from(["quant-backtest", "run"]).is_err());
    }
}
