//! # Meatplan Calculation Engine
//!
//! 訂肉計劃計算引擎：視窗生成、需求、供應、建議訂購量與浪費風險

pub mod calculator;
pub mod classification;
pub mod demand;
pub mod ordering;
pub mod supply;
pub mod window;

use chrono::NaiveDate;
use meatplan_core::{CaseQuantities, CellValue, MeatSize};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Re-export 主要類型
pub use calculator::PlanCalculator;
pub use classification::{ArrivalIndex, RowClass, RowClassifier, RowKind};
pub use demand::DemandCalculator;
pub use ordering::OrderCalculator;
pub use supply::SupplyCalculator;
pub use window::WindowGenerator;

/// 衍生總計（每次讀取都重新計算，不儲存）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedTotals {
    /// 銷售額總和
    pub total_sales: Decimal,

    /// 所需箱數
    pub required: CaseQuantities,

    /// 可用箱數
    pub available: CaseQuantities,

    /// 建議訂購量
    pub suggested_order: CaseQuantities,

    /// 保存期限內的浪費估計
    pub waste: CaseQuantities,
}

/// 單列計算結果（供表格顯示）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowView {
    pub index: usize,
    pub date: NaiveDate,

    /// 銷售額（保留原始輸入）
    pub sales: CellValue,

    /// 單日用量（已捨入，僅供顯示）
    pub daily_usage: CaseQuantities,

    pub class: RowClass,
}

/// 浪費警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteWarning {
    pub size: MeatSize,

    /// 捨入後數量大於 0 時為 true
    pub flagged: bool,

    /// 捨入後的浪費箱數
    pub quantity: Decimal,
}

impl WasteWarning {
    pub fn new(size: MeatSize, rounded_quantity: Decimal) -> Self {
        Self {
            size,
            flagged: rounded_quantity > Decimal::ZERO,
            quantity: rounded_quantity,
        }
    }

    /// 警告訊息
    pub fn message(&self) -> String {
        format!(
            "Warning: {} cases of {} meat may go unused.",
            self.quantity, self.size
        )
    }
}

/// 計劃計算結果
#[derive(Debug, Clone)]
pub struct PlanResult {
    /// 到貨列
    pub arrival: ArrivalIndex,

    /// 衍生總計（未捨入）
    pub totals: DerivedTotals,

    /// 每列結果
    pub rows: Vec<RowView>,

    /// 各尺寸的浪費警告（大、小）
    pub waste_warnings: Vec<WasteWarning>,

    /// 顯示用小數位數
    pub display_scale: u32,

    /// 計算耗時（微秒）
    pub calculation_time_us: Option<u128>,
}

impl PlanResult {
    /// 創建空的計算結果（尚未可計劃）
    pub fn empty(display_scale: u32) -> Self {
        Self {
            arrival: ArrivalIndex::missing(),
            totals: DerivedTotals::default(),
            rows: Vec::new(),
            waste_warnings: MeatSize::ALL
                .iter()
                .map(|&size| WasteWarning::new(size, Decimal::ZERO))
                .collect(),
            display_scale,
            calculation_time_us: None,
        }
    }

    /// 視窗是否已生成
    pub fn is_ready(&self) -> bool {
        !self.rows.is_empty()
    }

    /// 建議訂購量（已捨入）
    pub fn suggested_order_display(&self) -> CaseQuantities {
        self.totals.suggested_order.rounded(self.display_scale)
    }

    /// 已觸發的警告
    pub fn active_warnings(&self) -> impl Iterator<Item = &WasteWarning> {
        self.waste_warnings.iter().filter(|w| w.flagged)
    }
}
