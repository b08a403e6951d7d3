//! 表单与回测服务之间的桥接
//!
//! 提交分两步：[`BacktestBridge::begin_submission`] 同步读取表单、显示加载状态并清空
//! 旧结果；[`BacktestBridge::complete_submission`] 在请求结束后更新结果面板。
//! 每次提交领取一个递增的序号，只有最新一次提交的结果会写入面板，
//! 较早发出、较晚返回的结果直接丢弃。

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::client::BacktestService;
use crate::domain::{BacktestRequest, BacktestResponse, StockMatch};
use crate::editor::FormState;
use crate::error::{AppError, AppResult};
use crate::render::ResultsPanel;

/// 提交序号
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionTicket(u64);

/// 已发出、尚未完成的提交
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub ticket: SubmissionTicket,
    pub request: BacktestRequest,
}

/// 一次提交的结局
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 成功，结果已渲染
    Rendered { count: usize, matches: Vec<StockMatch> },
    /// 服务端返回 `success:false`
    Rejected { message: String },
    /// 请求未完成或响应无法解析
    Failed { message: String },
    /// 已有更新的提交，本次结果被丢弃
    Superseded,
}

pub struct BacktestBridge<S: BacktestService> {
    service: S,
    form: FormState,
    panel: ResultsPanel,
    latest_ticket: u64,
}

impl<S: BacktestService> BacktestBridge<S> {
    pub fn new(service: S) -> Self {
        Self::with_form(service, FormState::new())
    }

    pub fn with_form(service: S, form: FormState) -> Self {
        Self {
            service,
            form,
            panel: ResultsPanel::default(),
            latest_ticket: 0,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn panel(&self) -> &ResultsPanel {
        &self.panel
    }

    pub fn load_example(&mut self) {
        self.form.load_example();
    }

    /// 清空表单：只保留一行默认条件，同时清空结果信息与表格
    pub fn clear_form(&mut self) {
        self.form.reset_conditions();
        self.panel.clear();
    }

    /// 读取表单组装请求，显示加载状态并立即清空旧结果
    pub fn begin_submission(&mut self) -> PendingSubmission {
        self.latest_ticket += 1;
        let ticket = SubmissionTicket(self.latest_ticket);
        let request = BacktestRequest::from(self.form.to_request(Utc::now()));
        self.panel.begin_loading();
        debug!("开始提交 #{} strategy={}", ticket.0, request.strategy.name);
        PendingSubmission { ticket, request }
    }

    /// 用请求结果更新结果面板；过期的提交不改动面板
    pub fn complete_submission(
        &mut self,
        ticket: SubmissionTicket,
        result: AppResult<BacktestResponse>,
    ) -> SubmitOutcome {
        if ticket.0 != self.latest_ticket {
            warn!(
                "提交 #{} 已被 #{} 取代，丢弃其结果",
                ticket.0, self.latest_ticket
            );
            return SubmitOutcome::Superseded;
        }

        self.panel.finish_loading();
        match result.and_then(BacktestResponse::into_result) {
            Ok((count, matches)) => {
                info!("回测完成，共 {} 只符合条件的股票", count);
                self.panel.show_results(count, &matches);
                SubmitOutcome::Rendered { count, matches }
            }
            Err(AppError::Api(message)) => {
                warn!("回测服务返回错误: {}", message);
                self.panel.show_error(&message);
                SubmitOutcome::Rejected { message }
            }
            Err(e) => {
                error!("回测请求失败: {}", e);
                let message = e.detail();
                self.panel.show_request_failure(&message);
                SubmitOutcome::Failed { message }
            }
        }
    }

    /// 提交表单并等待结果
    pub async fn submit(&mut self) -> SubmitOutcome {
        let pending = self.begin_submission();
        let result = self.service.run_backtest(&pending.request).await;
        self.complete_submission(pending.ticket, result)
    }
}
