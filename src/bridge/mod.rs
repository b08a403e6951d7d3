mod backtest_bridge;

pub use backtest_bridge::{BacktestBridge, PendingSubmission, SubmissionTicket, SubmitOutcome};
