//! # Meatplan Session
//!
//! 會話狀態與輸入邊界：持有計劃視窗、驗證表單輸入並產生報表

pub mod report;
pub mod session;

// Re-export 主要類型
pub use report::{PlanReport, ReportRow, StockCells};
pub use session::PlanningSession;
