//! 终端输出

use super::results_panel::{InfoPanel, ResultsPanel, TablePanel, NO_RESULTS_NOTICE};

/// 按行输出结果面板
///
/// `1. 600000 浦发银行 | 匹配日: 2026-01-12 | 匹配价: 10.00 | 现价: 11.00 | 涨跌: +10.00%`
pub fn render_lines(panel: &ResultsPanel) -> Vec<String> {
    let mut lines = Vec::new();
    match &panel.info {
        InfoPanel::Empty => {}
        InfoPanel::Summary { count } => lines.push(format!("找到 {} 只符合条件的股票", count)),
        InfoPanel::Error { message } => lines.push(format!("错误: {}", message)),
        InfoPanel::RequestFailed { message } => lines.push(format!("请求失败: {}", message)),
    }

    match &panel.table {
        TablePanel::Empty => {}
        TablePanel::NoResults => lines.push(NO_RESULTS_NOTICE.to_string()),
        TablePanel::Rows(rows) => {
            for (i, row) in rows.iter().enumerate() {
                let change = match row.change.percent {
                    Some(pct) => format!("{:+.2}%", pct),
                    None => row.change.text.clone(),
                };
                lines.push(format!(
                    "{}. {} {} | 匹配日: {} | 匹配价: {} | 现价: {} | 涨跌: {}",
                    i + 1,
                    row.code,
                    row.name,
                    row.match_date,
                    row.match_price,
                    row.current_price,
                    change
                ));
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StockMatch;

    #[test]
    fn test_render_lines_signed_change() {
        let mut panel = ResultsPanel::default();
        panel.show_results(
            1,
            &[StockMatch {
                code: "600000".to_string(),
                name: "浦发银行".to_string(),
                match_date: Some("2026-01-12".to_string()),
                match_price: Some(10.0),
                current_price: Some(11.0),
            }],
        );
        let lines = render_lines(&panel);
        assert_eq!(lines[0], "找到 1 只符合条件的股票");
        assert_eq!(
            lines[1],
            "1. 600000 浦发银行 | 匹配日: 2026-01-12 | 匹配价: 10.00 | 现价: 11.00 | 涨跌: +10.00%"
        );
    }
}
