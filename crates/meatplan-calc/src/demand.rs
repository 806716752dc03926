//! 需求計算：銷售額 → 所需箱數

use meatplan_core::quantity::saturating_sum;
use meatplan_core::{CaseQuantities, DayRecord, PlanningWindow, UsageFactors};
use rust_decimal::Decimal;

/// 需求計算器
pub struct DemandCalculator;

impl DemandCalculator {
    /// 視窗內銷售額總和（未設定或無法解析視為 0，溢位時取上限）
    pub fn total_sales(window: &PlanningWindow) -> Decimal {
        saturating_sum(window.iter().map(DayRecord::sales))
    }

    /// 所需箱數：先加總銷售額，再換算一次（不逐日捨入）
    pub fn required_cases(window: &PlanningWindow, usage: &UsageFactors) -> CaseQuantities {
        usage.cases_for_sales(Self::total_sales(window))
    }

    /// 單日用量（未捨入）
    pub fn daily_usage(record: &DayRecord, usage: &UsageFactors) -> CaseQuantities {
        usage.cases_for_sales(record.sales())
    }

    /// 單日用量（僅供顯示，捨入到 `scale` 位）
    pub fn daily_usage_display(record: &DayRecord, usage: &UsageFactors, scale: u32) -> CaseQuantities {
        Self::daily_usage(record, usage).rounded(scale)
    }
}
