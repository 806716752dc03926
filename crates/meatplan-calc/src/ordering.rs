//! 建議訂購量與浪費風險

use std::ops::RangeInclusive;

use meatplan_core::quantity::saturating_sum;
use meatplan_core::{CaseQuantities, DayRecord, PlanningWindow, UsageFactors};
use rust_decimal::Decimal;

use crate::classification::ArrivalIndex;

/// 訂購與浪費計算器
pub struct OrderCalculator;

impl OrderCalculator {
    /// 建議訂購量 = max(需求 - 可用, 0)
    pub fn suggested_order(required: CaseQuantities, available: CaseQuantities) -> CaseQuantities {
        required.saturating_sub(available)
    }

    /// 保存期限時界：從到貨列起 `shelf_life_days` 天（含到貨日），截斷於視窗末端
    ///
    /// 視窗為空時回傳 None。
    pub fn waste_horizon(
        window: &PlanningWindow,
        arrival: ArrivalIndex,
        shelf_life_days: u32,
    ) -> Option<RangeInclusive<usize>> {
        let last_index = window.last_index()?;
        let start = arrival.horizon_start();
        if start > last_index {
            return None;
        }
        let span = usize::try_from(shelf_life_days.saturating_sub(1)).unwrap_or(usize::MAX);
        let end = start.saturating_add(span).min(last_index);
        Some(start..=end)
    }

    /// 時界內的銷售額
    pub fn horizon_sales(window: &PlanningWindow, horizon: Option<RangeInclusive<usize>>) -> Decimal {
        match horizon {
            Some(range) => saturating_sum(window.records()[range].iter().map(DayRecord::sales)),
            None => Decimal::ZERO,
        }
    }

    /// 浪費風險 = max(可用 - 時界內需求, 0)
    ///
    /// 以全部可用庫存對比保存期限內的需求，為上限估計，不模擬逐日消耗。
    pub fn waste_risk(
        window: &PlanningWindow,
        available: CaseQuantities,
        arrival: ArrivalIndex,
        usage: &UsageFactors,
        shelf_life_days: u32,
    ) -> CaseQuantities {
        let horizon = Self::waste_horizon(window, arrival, shelf_life_days);
        tracing::debug!("浪費時界: {:?}", horizon);

        let horizon_demand = usage.cases_for_sales(Self::horizon_sales(window, horizon));
        available.saturating_sub(horizon_demand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use meatplan_core::calendar::consecutive_days;
    use meatplan_core::DayField;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn window_with_sales(sales: &[&str]) -> PlanningWindow {
        let start = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let mut window = PlanningWindow::from_dates(consecutive_days(start, sales.len()));
        for (i, raw) in sales.iter().enumerate() {
            window.set_raw(i, DayField::SalesAmount, raw).unwrap();
        }
        window
    }

    #[test]
    fn test_suggested_order_no_shortfall() {
        let required = CaseQuantities::new(dec("1.28"), dec("0.30"));
        let available = CaseQuantities::new(dec("7"), dec("1"));

        assert_eq!(
            OrderCalculator::suggested_order(required, available),
            CaseQuantities::ZERO
        );
    }

    #[test]
    fn test_suggested_order_shortfall() {
        let required = CaseQuantities::new(dec("10.24"), dec("2.4"));
        let available = CaseQuantities::new(dec("3"), dec("2.5"));

        let order = OrderCalculator::suggested_order(required, available);
        assert_eq!(order.large, dec("7.24"));
        assert_eq!(order.small, Decimal::ZERO);
    }

    #[test]
    fn test_horizon_clipped_to_window_end() {
        let window = window_with_sales(&["0", "0", "0", "0"]);
        let horizon = OrderCalculator::waste_horizon(&window, ArrivalIndex::found(2), 4);
        assert_eq!(horizon, Some(2..=3));
    }

    #[test]
    fn test_horizon_full_four_days() {
        let window = window_with_sales(&["0"; 10]);
        assert_eq!(
            OrderCalculator::waste_horizon(&window, ArrivalIndex::found(3), 4),
            Some(3..=6)
        );
        // 到貨日不在視窗中：從第 0 列起算
        assert_eq!(
            OrderCalculator::waste_horizon(&window, ArrivalIndex::missing(), 4),
            Some(0..=3)
        );
        assert_eq!(
            OrderCalculator::waste_horizon(&PlanningWindow::empty(), ArrivalIndex::missing(), 4),
            None
        );
    }

    #[test]
    fn test_waste_risk() {
        // 到貨第 1 列，時界為第 1..=4 列，銷售 4000 → 大 2.56、小 0.6
        let window = window_with_sales(&["9000", "1000", "1000", "1000", "1000", "9000"]);
        let available = CaseQuantities::new(dec("7"), dec("0.5"));

        let waste = OrderCalculator::waste_risk(
            &window,
            available,
            ArrivalIndex::found(1),
            &meatplan_core::UsageFactors::LOCKED,
            4,
        );

        assert_eq!(waste.large, dec("4.44"));
        assert_eq!(waste.small, Decimal::ZERO);
    }

    proptest! {
        #[test]
        fn prop_suggested_order_never_negative(
            rl in 0i64..1_000_000, rs in 0i64..1_000_000,
            al in 0i64..1_000_000, as_ in 0i64..1_000_000,
        ) {
            let required = CaseQuantities::new(Decimal::new(rl, 2), Decimal::new(rs, 2));
            let available = CaseQuantities::new(Decimal::new(al, 2), Decimal::new(as_, 2));

            let order = OrderCalculator::suggested_order(required, available);
            prop_assert!(order.large >= Decimal::ZERO);
            prop_assert!(order.small >= Decimal::ZERO);
        }
    }
}
