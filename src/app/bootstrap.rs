use std::path::Path;

use anyhow::{anyhow, Context};
use dotenv::dotenv;
use tracing::{error, info};

use super::cli::{Cli, Command, OutputArgs, RunArgs};
use super::condition_spec::ConditionSpec;
use crate::bridge::{BacktestBridge, SubmitOutcome};
use crate::client::{BacktestHttpClient, BacktestService};
use crate::config::ClientConfig;
use crate::domain::{ExclusionKind, ExclusionSet};
use crate::editor::FormState;
use crate::export::write_results_jsonl;
use crate::render::{html, terminal};

/// 应用初始化：加载 .env 并设置日志
pub async fn app_init() -> anyhow::Result<()> {
    dotenv().ok();
    crate::logger::setup_logging().await?;
    info!("应用初始化完成");
    Ok(())
}

fn build_client(cli: &Cli) -> anyhow::Result<BacktestHttpClient> {
    let mut config = ClientConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    info!("回测服务地址: {}", config.base_url);
    Ok(BacktestHttpClient::new(config)?)
}

/// 按命令行参数填写表单
pub fn fill_form(form: &mut FormState, args: &RunArgs) -> anyhow::Result<()> {
    let specs = args
        .conditions
        .iter()
        .map(|spec| ConditionSpec::parse(spec))
        .collect::<Result<Vec<_>, _>>()?;

    let editor = form.editor_mut();
    editor.clear();
    for spec in &specs {
        spec.apply(editor);
    }

    let mut exclude = ExclusionSet::default();
    for item in args.exclude.iter().filter(|s| !s.trim().is_empty()) {
        let kind = item.parse::<ExclusionKind>().map_err(|e| anyhow!(e))?;
        exclude.set(kind, true);
    }
    for kind in ExclusionKind::ALL {
        form.set_exclusion(kind, exclude.get(kind));
    }

    form.set_time_range(&args.time_range);
    form.set_strategy_name(args.name.as_deref());
    Ok(())
}

fn write_outputs<S: BacktestService>(
    bridge: &BacktestBridge<S>,
    strategy_name: &str,
    outcome: &SubmitOutcome,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    if let Some(path) = &output.html {
        write_html(path, bridge)?;
    }
    if let (Some(path), SubmitOutcome::Rendered { matches, .. }) = (&output.output, outcome) {
        write_results_jsonl(path, strategy_name, matches)
            .with_context(|| format!("写入结果文件失败: {}", path.display()))?;
    }
    Ok(())
}

fn write_html<S: BacktestService>(path: &Path, bridge: &BacktestBridge<S>) -> anyhow::Result<()> {
    std::fs::write(path, html::render_panel(bridge.panel()))
        .with_context(|| format!("写入 HTML 失败: {}", path.display()))?;
    info!("HTML 已写入 {}", path.display());
    Ok(())
}

/// 提交表单并输出结果；提交失败时返回错误
async fn submit_and_report<S: BacktestService>(
    bridge: &mut BacktestBridge<S>,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let pending = bridge.begin_submission();
    let strategy_name = pending.request.strategy.name.clone();
    let result = bridge.service().run_backtest(&pending.request).await;
    let outcome = bridge.complete_submission(pending.ticket, result);

    for line in terminal::render_lines(bridge.panel()) {
        println!("{}", line);
    }
    write_outputs(bridge, &strategy_name, &outcome, output)?;

    match outcome {
        SubmitOutcome::Rendered { .. } | SubmitOutcome::Superseded => Ok(()),
        SubmitOutcome::Rejected { message } | SubmitOutcome::Failed { message } => {
            Err(anyhow!(message))
        }
    }
}

/// 运行命令
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = build_client(&cli)?;

    match &cli.command {
        Command::Example(output) => {
            let mut bridge = BacktestBridge::new(client);
            bridge.load_example();
            submit_and_report(&mut bridge, output).await
        }
        Command::Run(args) => {
            let mut bridge = BacktestBridge::new(client);
            fill_form(bridge.form_mut(), args)?;
            submit_and_report(&mut bridge, &args.output).await
        }
        Command::Stocks { limit } => {
            let stocks = client.list_stocks().await.map_err(|e| {
                error!("获取股票池失败: {}", e);
                e
            })?;
            println!("共 {} 只股票", stocks.len());
            for stock in stocks.iter().take(limit.unwrap_or(usize::MAX)) {
                println!("{} {}", stock.code, stock.name);
            }
            Ok(())
        }
    }
}
