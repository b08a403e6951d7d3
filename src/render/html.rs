//! 结果面板的 HTML 片段
//!
//! 文本一律转义后输出，错误信息的内容本身不做任何改写。

use std::fmt::Write;

use super::results_panel::{InfoPanel, ResultsPanel, TablePanel, NO_RESULTS_NOTICE};

const ERROR_STYLE: &str = "color: #ff4757; padding: 15px; background: #ffe0e0; border-radius: 6px;";
const SUMMARY_STYLE: &str = "color: #667eea; font-weight: 600; font-size: 1.1em;";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// 加载提示的 display 样式
pub fn loading_display(panel: &ResultsPanel) -> &'static str {
    if panel.loading {
        "block"
    } else {
        "none"
    }
}

/// 信息栏（`#resultsInfo`）
pub fn render_info(panel: &ResultsPanel) -> String {
    match &panel.info {
        InfoPanel::Empty => String::new(),
        InfoPanel::Summary { count } => format!(
            "<div style=\"{}\">找到 {} 只符合条件的股票</div>",
            SUMMARY_STYLE, count
        ),
        InfoPanel::Error { message } => format!(
            "<div style=\"{}\">错误: {}</div>",
            ERROR_STYLE,
            escape_html(message)
        ),
        InfoPanel::RequestFailed { message } => format!(
            "<div style=\"{}\">请求失败: {}</div>",
            ERROR_STYLE,
            escape_html(message)
        ),
    }
}

/// 结果表格（`#resultsTable`）
pub fn render_table(panel: &ResultsPanel) -> String {
    let rows = match &panel.table {
        TablePanel::Empty => return String::new(),
        TablePanel::NoResults => {
            return format!("<div class=\"no-results\">{}</div>", NO_RESULTS_NOTICE)
        }
        TablePanel::Rows(rows) => rows,
    };

    let mut html = String::from(
        "<table>\n<thead>\n<tr><th>代码</th><th>名称</th><th>匹配日期</th>\
         <th>匹配价格</th><th>当前价格</th><th>涨跌幅</th></tr>\n</thead>\n<tbody>\n",
    );
    for row in rows {
        let change_style = match row.change.tone.color() {
            Some(color) => format!(" style=\"color: {}; font-weight: 600;\"", color),
            None => String::new(),
        };
        // 写入 String 不会失败
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td{}>{}</td></tr>",
            escape_html(&row.code),
            escape_html(&row.name),
            escape_html(&row.match_date),
            row.match_price,
            row.current_price,
            change_style,
            row.change.text,
        );
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

/// 完整的结果区域：加载提示 + 信息栏 + 表格
pub fn render_panel(panel: &ResultsPanel) -> String {
    format!(
        "<div id=\"loading\" style=\"display:{};\">回测中...</div>\n\
         <div id=\"resultsInfo\">{}</div>\n\
         <div id=\"resultsTable\">{}</div>\n",
        loading_display(panel),
        render_info(panel),
        render_table(panel),
    )
}
