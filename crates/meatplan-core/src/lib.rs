//! # Meatplan Core
//!
//! 訂肉計劃的核心資料模型與類型定義

pub mod calendar;
pub mod config;
pub mod quantity;
pub mod record;
pub mod window;

// Re-export 主要類型
pub use config::{PlanningConfig, UsageFactors};
pub use quantity::{CaseQuantities, MeatSize};
pub use record::{CellValue, DayField, DayRecord};
pub use window::PlanningWindow;

/// 計劃錯誤類型
///
/// 計算引擎本身不會失敗；這些錯誤只出現在輸入邊界與配置載入。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("到貨日期不可早於今天: {delivery} < {today}")]
    DeliveryInPast {
        delivery: chrono::NaiveDate,
        today: chrono::NaiveDate,
    },

    #[error("無效的天數: {0}")]
    InvalidDuration(String),

    #[error("列索引超出範圍: {index}（共 {len} 列）")]
    RowOutOfRange { index: usize, len: usize },

    #[error("第 {index} 列的 {field} 不可編輯")]
    FieldLocked { index: usize, field: DayField },

    #[error("未知的欄位: {0}")]
    UnknownField(String),

    #[error("無效的日期: {0}")]
    InvalidDate(String),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
