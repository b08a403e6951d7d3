//! 回测结果导出为 JSON Lines
//!
//! 第一行为 `{"_meta": {...}}`，之后每行一条结果，顺序与响应一致。

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;
use serde_json::json;
use tracing::info;

use crate::domain::StockMatch;
use crate::error::AppResult;

pub fn write_results_jsonl(path: &Path, strategy_name: &str, matches: &[StockMatch]) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    let meta = json!({
        "_meta": {
            "strategy_name": strategy_name,
            "run_at": Local::now().to_rfc3339(),
            "count": matches.len(),
        }
    });
    writeln!(writer, "{}", serde_json::to_string(&meta)?)?;
    for stock in matches {
        writeln!(writer, "{}", serde_json::to_string(stock)?)?;
    }
    writer.flush()?;

    info!("结果已保存: {} ({} 条)", path.display(), matches.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_results_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("结果.jsonl");
        let matches = vec![StockMatch {
            code: "000001".to_string(),
            name: "平安银行".to_string(),
            match_date: Some("2026-01-12".to_string()),
            match_price: Some(11.2),
            current_price: None,
        }];

        write_results_jsonl(&path, "示例策略", &matches).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let meta: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(meta["_meta"]["strategy_name"], "示例策略");
        assert_eq!(meta["_meta"]["count"], 1);
        let row: StockMatch = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(row, matches[0]);
    }
}
