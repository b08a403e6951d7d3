//! 结果面板视图模型：加载状态、信息栏、结果表格

use crate::domain::StockMatch;

/// 缺失值占位符
pub const PLACEHOLDER: &str = "-";
pub const NO_RESULTS_NOTICE: &str = "未找到符合条件的股票";

/// 涨跌幅颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeTone {
    Up,
    Down,
    Neutral,
}

impl ChangeTone {
    pub fn color(&self) -> Option<&'static str> {
        match self {
            ChangeTone::Up => Some("#28a745"),
            ChangeTone::Down => Some("#dc3545"),
            ChangeTone::Neutral => None,
        }
    }
}

/// 从匹配日到现在的涨跌幅
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeCell {
    /// 保留两位小数后的百分比；价格缺失时为 None
    pub percent: Option<f64>,
    pub text: String,
    pub tone: ChangeTone,
}

impl ChangeCell {
    pub fn from_prices(match_price: Option<f64>, current_price: Option<f64>) -> Self {
        match compute_change_percent(match_price, current_price) {
            Some(percent) => Self {
                percent: Some(percent),
                text: format!("{:.2}%", percent),
                tone: if percent >= 0.0 {
                    ChangeTone::Up
                } else {
                    ChangeTone::Down
                },
            },
            None => Self {
                percent: None,
                text: PLACEHOLDER.to_string(),
                tone: ChangeTone::Neutral,
            },
        }
    }
}

/// `(current - match) / match * 100`，四舍五入到两位小数
///
/// 任一价格缺失（含 0）时返回 None，与价格列显示 `-` 的规则一致。
pub fn compute_change_percent(match_price: Option<f64>, current_price: Option<f64>) -> Option<f64> {
    let (base, current) = (known_price(match_price)?, known_price(current_price)?);
    let rounded = ((current - base) / base * 100.0 * 100.0).round() / 100.0;
    // 避免显示 -0.00%
    Some(if rounded == 0.0 { 0.0 } else { rounded })
}

/// 0 和非有限值按缺失处理
fn known_price(price: Option<f64>) -> Option<f64> {
    price.filter(|p| *p != 0.0 && p.is_finite())
}

fn format_price(price: Option<f64>) -> String {
    match known_price(price) {
        Some(p) => format!("{:.2}", p),
        None => PLACEHOLDER.to_string(),
    }
}

/// 表格中的一行
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub code: String,
    pub name: String,
    pub match_date: String,
    pub match_price: String,
    pub current_price: String,
    pub change: ChangeCell,
}

impl From<&StockMatch> for ResultRow {
    fn from(stock: &StockMatch) -> Self {
        Self {
            code: stock.code.clone(),
            name: stock.name.clone(),
            match_date: stock
                .match_date
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(PLACEHOLDER)
                .to_string(),
            match_price: format_price(stock.match_price),
            current_price: format_price(stock.current_price),
            change: ChangeCell::from_prices(stock.match_price, stock.current_price),
        }
    }
}

/// 信息栏
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InfoPanel {
    #[default]
    Empty,
    /// `找到 N 只符合条件的股票`
    Summary { count: usize },
    /// 服务端返回 `success:false`，展示其 error 原文
    Error { message: String },
    /// 请求未完成或响应无法解析
    RequestFailed { message: String },
}

/// 结果表格区域
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TablePanel {
    #[default]
    Empty,
    NoResults,
    Rows(Vec<ResultRow>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultsPanel {
    pub loading: bool,
    pub info: InfoPanel,
    pub table: TablePanel,
}

impl ResultsPanel {
    /// 提交后立即执行：显示加载中并清空上一次的结果
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.clear();
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    pub fn clear(&mut self) {
        self.info = InfoPanel::Empty;
        self.table = TablePanel::Empty;
    }

    pub fn show_results(&mut self, count: usize, matches: &[StockMatch]) {
        if count == 0 {
            self.info = InfoPanel::Empty;
            self.table = TablePanel::NoResults;
            return;
        }
        self.info = InfoPanel::Summary { count };
        self.table = TablePanel::Rows(matches.iter().map(ResultRow::from).collect());
    }

    pub fn show_error(&mut self, message: &str) {
        self.info = InfoPanel::Error {
            message: message.to_string(),
        };
        self.table = TablePanel::Empty;
    }

    pub fn show_request_failure(&mut self, message: &str) {
        self.info = InfoPanel::RequestFailed {
            message: message.to_string(),
        };
        self.table = TablePanel::Empty;
    }

    /// 当前展示的错误原文
    pub fn error_message(&self) -> Option<&str> {
        match &self.info {
            InfoPanel::Error { message } | InfoPanel::RequestFailed { message } => Some(message),
            _ => None,
        }
    }

    pub fn rows(&self) -> &[ResultRow] {
        match &self.table {
            TablePanel::Rows(rows) => rows,
            _ => &[],
        }
    }
}
