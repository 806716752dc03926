//! 供應計算：現有庫存 + 在途訂單

use meatplan_core::{CaseQuantities, PlanningWindow};

use crate::classification::{ArrivalIndex, RowClassifier};

/// 供應計算器
pub struct SupplyCalculator;

impl SupplyCalculator {
    /// 期初庫存：只取第 0 列的現有庫存，之後各列的現有欄位不計
    pub fn initial_on_hand(window: &PlanningWindow, arrival: ArrivalIndex) -> CaseQuantities {
        match window.first() {
            Some(first) if RowClassifier::is_stock_editable(0, arrival) => first.on_hand(),
            _ => CaseQuantities::ZERO,
        }
    }

    /// 在途補貨：加總到貨日之前各列的在途訂單
    pub fn restock(window: &PlanningWindow, arrival: ArrivalIndex) -> CaseQuantities {
        window
            .iter()
            .enumerate()
            .filter(|(i, _)| RowClassifier::is_stock_editable(*i, arrival))
            .fold(CaseQuantities::ZERO, |acc, (_, r)| acc + r.on_order())
    }

    /// 可用箱數 = 期初庫存 + 在途補貨
    ///
    /// 到貨日當天及之後的庫存欄位即使有殘留值也不計入。
    pub fn available_cases(window: &PlanningWindow, arrival: ArrivalIndex) -> CaseQuantities {
        let initial = Self::initial_on_hand(window, arrival);
        let restock = Self::restock(window, arrival);

        tracing::debug!(
            "可用箱數：期初 {:?}，在途 {:?}",
            initial,
            restock
        );

        initial + restock
    }
}
