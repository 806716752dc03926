//! 計劃主計算器

use chrono::NaiveDate;
use meatplan_core::{MeatSize, PlanningConfig, PlanningWindow};

use crate::classification::{ArrivalIndex, RowClassifier};
use crate::demand::DemandCalculator;
use crate::ordering::OrderCalculator;
use crate::supply::SupplyCalculator;
use crate::{DerivedTotals, PlanResult, RowView, WasteWarning};

/// 計劃計算器
///
/// 純函數：每次呼叫都從視窗與配置完整重算，不保留任何中間結果。
#[derive(Debug, Clone, Default)]
pub struct PlanCalculator {
    config: PlanningConfig,
}

impl PlanCalculator {
    /// 創建新的計劃計算器
    pub fn new(config: PlanningConfig) -> Self {
        Self { config }
    }

    /// 主計算入口
    pub fn calculate(
        &self,
        window: &PlanningWindow,
        delivery_date: Option<NaiveDate>,
        duration_days: Option<u32>,
    ) -> PlanResult {
        let scale = self.config.display_scale;
        if window.is_empty() {
            tracing::debug!("視窗為空，跳過計算");
            return PlanResult::empty(scale);
        }

        tracing::debug!("開始計劃計算：{} 列", window.len());
        let start_time = std::time::Instant::now();
        let usage = &self.config.usage;

        // Step 1: 定位到貨列
        let arrival = ArrivalIndex::locate(window, delivery_date);
        tracing::debug!("Step 1: 到貨列 {:?}", arrival.get());

        // Step 2: 需求
        let total_sales = DemandCalculator::total_sales(window);
        let required = DemandCalculator::required_cases(window, usage);
        tracing::debug!("Step 2: 銷售額 {}，所需 {:?}", total_sales, required);

        // Step 3: 供應
        let available = SupplyCalculator::available_cases(window, arrival);

        // Step 4: 建議訂購量
        let suggested_order = OrderCalculator::suggested_order(required, available);

        // Step 5: 浪費風險
        let waste = OrderCalculator::waste_risk(
            window,
            available,
            arrival,
            usage,
            self.config.shelf_life_days,
        );
        tracing::debug!("Step 5: 浪費估計 {:?}", waste);

        // Step 6: 每列顯示值
        let duration = duration_days.unwrap_or(0);
        let rows = window
            .iter()
            .enumerate()
            .map(|(index, record)| RowView {
                index,
                date: record.date,
                sales: record.sales_amount.clone(),
                daily_usage: DemandCalculator::daily_usage_display(record, usage, scale),
                class: RowClassifier::classify(index, arrival, duration),
            })
            .collect();

        let rounded_waste = waste.rounded(scale);
        let waste_warnings = MeatSize::ALL
            .iter()
            .map(|&size| WasteWarning::new(size, rounded_waste.get(size)))
            .collect();

        let result = PlanResult {
            arrival,
            totals: DerivedTotals {
                total_sales,
                required,
                available,
                suggested_order,
                waste,
            },
            rows,
            waste_warnings,
            display_scale: scale,
            calculation_time_us: Some(start_time.elapsed().as_micros()),
        };

        tracing::info!(
            "計劃計算完成：建議訂購 大 {} / 小 {}，耗時 {:?}",
            result.totals.suggested_order.large,
            result.totals.suggested_order.small,
            start_time.elapsed()
        );

        result
    }

    /// 配置引用
    pub fn config(&self) -> &PlanningConfig {
        &self.config
    }
}
