//! # Meatplan
//!
//! 訂肉計劃引擎：依到貨日、維持天數與每日銷售預測，計算建議訂購量並標示浪費風險

pub use meatplan_calc as calc;
pub use meatplan_core as model;
pub use meatplan_session as session;

pub use meatplan_calc::{
    DerivedTotals, PlanCalculator, PlanResult, RowKind, RowView, WasteWarning, WindowGenerator,
};
pub use meatplan_core::{
    CaseQuantities, CellValue, DayField, DayRecord, MeatSize, PlanError, PlanningConfig,
    PlanningWindow, Result, UsageFactors,
};
pub use meatplan_session::{PlanReport, PlanningSession};
