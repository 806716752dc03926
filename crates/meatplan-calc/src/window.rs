//! 計劃視窗生成

use chrono::NaiveDate;
use meatplan_core::calendar::{add_days, consecutive_days, days_to_arrive};
use meatplan_core::PlanningWindow;

/// 計劃視窗生成器
pub struct WindowGenerator;

impl WindowGenerator {
    /// 生成從今天到（到貨日 + 天數）的每日記錄
    ///
    /// 到貨日或天數缺少（或天數為 0）時回傳空視窗，表示尚未可計劃。
    /// 長度 = max(0, 到貨前天數) + 天數 + 1。視窗末日超出日期範圍時同樣回傳空視窗。
    pub fn generate(
        delivery_date: Option<NaiveDate>,
        duration_days: Option<u32>,
        today: NaiveDate,
    ) -> PlanningWindow {
        let (Some(delivery_date), Some(duration_days)) = (delivery_date, duration_days) else {
            tracing::debug!("到貨日或天數未設定，視窗為空");
            return PlanningWindow::empty();
        };
        if duration_days == 0 {
            tracing::debug!("天數為 0，視窗為空");
            return PlanningWindow::empty();
        }

        if add_days(today.max(delivery_date), duration_days).is_none() {
            tracing::warn!(
                "視窗末日超出日期範圍：到貨 {}，天數 {}",
                delivery_date,
                duration_days
            );
            return PlanningWindow::empty();
        }

        let days_to_arrive = days_to_arrive(today, delivery_date);
        let total_days = u64::from(days_to_arrive) + u64::from(duration_days);
        let count = usize::try_from(total_days + 1).unwrap_or(usize::MAX);

        tracing::debug!(
            "生成計劃視窗：今天 {}，到貨 {}（{} 天後），需維持 {} 天，共 {} 列",
            today,
            delivery_date,
            days_to_arrive,
            duration_days,
            count
        );

        PlanningWindow::from_dates(consecutive_days(today, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_delivery_today() {
        let window = WindowGenerator::generate(Some(today()), Some(5), today());

        assert_eq!(window.len(), 6);
        assert_eq!(window.get(0).unwrap().date, today());
        assert_eq!(window.index_of(today()), Some(0));
    }

    #[rstest]
    #[case(0, 1, 2)]
    #[case(3, 4, 8)]
    #[case(16, 7, 24)]
    fn test_window_length(#[case] offset: u32, #[case] duration: u32, #[case] expected: usize) {
        let delivery = meatplan_core::calendar::add_days(today(), offset).unwrap();
        let window = WindowGenerator::generate(Some(delivery), Some(duration), today());

        assert_eq!(window.len(), expected);
        assert_eq!(window.index_of(delivery), Some(offset as usize));
    }

    #[test]
    fn test_dates_are_consecutive() {
        let delivery = NaiveDate::from_ymd_opt(2026, 10, 30).unwrap();
        let window = WindowGenerator::generate(Some(delivery), Some(10), today());

        assert_eq!(window.get(0).unwrap().date, today());
        assert!(window
            .records()
            .windows(2)
            .all(|w| w[1].date == w[0].date.succ_opt().unwrap()));
        assert!(window.iter().all(|r| r.sales_amount.is_unset()));
    }

    #[test]
    fn test_missing_inputs_yield_empty_window() {
        assert!(WindowGenerator::generate(None, Some(3), today()).is_empty());
        assert!(WindowGenerator::generate(Some(today()), None, today()).is_empty());
        assert!(WindowGenerator::generate(Some(today()), Some(0), today()).is_empty());
    }

    #[test]
    fn test_end_beyond_calendar_yields_empty_window() {
        let near_max = NaiveDate::MAX.pred_opt().unwrap();
        assert!(WindowGenerator::generate(Some(near_max), Some(5), near_max).is_empty());

        // 剛好落在最後一天仍可生成
        let window = WindowGenerator::generate(Some(near_max), Some(1), near_max);
        assert_eq!(window.len(), 2);
        assert_eq!(window.get(1).unwrap().date, NaiveDate::MAX);
    }

    #[test]
    fn test_past_delivery_clamps_to_today() {
        let past = NaiveDate::from_ymd_opt(2026, 10, 10).unwrap();
        let window = WindowGenerator::generate(Some(past), Some(2), today());

        assert_eq!(window.len(), 3);
        assert_eq!(window.index_of(past), None);
    }
}
