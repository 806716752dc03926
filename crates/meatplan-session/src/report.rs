//! 報表：供表單渲染的可序列化視圖

use chrono::NaiveDate;
use meatplan_calc::{PlanResult, RowKind, WasteWarning};
use meatplan_core::calendar::{day_label, display_date, INPUT_DATE_FORMAT};
use meatplan_core::{CaseQuantities, DayRecord, PlanningConfig, PlanningWindow, UsageFactors};
use serde::{Deserialize, Serialize};

/// 表格中的一列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// 例如 `10-16-2026 (Fri)`
    pub label: String,

    /// 銷售額原始輸入
    pub sales: String,

    /// 單日用量（已捨入）
    pub usage: CaseQuantities,

    pub kind: RowKind,

    /// 庫存欄位；到貨日當天及之後不收集，為 None
    pub stock: Option<StockCells>,
}

/// 到貨日之前可編輯的庫存欄位（原始輸入）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockCells {
    pub on_hand_large: String,
    pub on_hand_small: String,
    pub on_order_large: String,
    pub on_order_small: String,
}

impl From<&DayRecord> for StockCells {
    fn from(record: &DayRecord) -> Self {
        Self {
            on_hand_large: record.on_hand_large.raw.clone(),
            on_hand_small: record.on_hand_small.raw.clone(),
            on_order_large: record.on_order_large.raw.clone(),
            on_order_small: record.on_order_small.raw.clone(),
        }
    }
}

/// 計劃報表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanReport {
    /// 視窗是否已生成
    pub ready: bool,

    /// 可選的最早到貨日（yyyy-MM-dd）
    pub min_delivery_date: String,

    /// 到貨日（M-d-yyyy），未設定時為空字串
    pub delivery_date: String,

    /// 鎖定的用量係數
    pub usage_factors: UsageFactors,

    pub rows: Vec<ReportRow>,

    /// 建議訂購量（已捨入）
    pub suggested_order: CaseQuantities,

    /// 各尺寸的浪費警告
    pub waste_warnings: Vec<WasteWarning>,
}

impl PlanReport {
    /// 由計算結果與對應的視窗建立報表
    pub fn build(
        result: &PlanResult,
        window: &PlanningWindow,
        config: &PlanningConfig,
        delivery_date: Option<NaiveDate>,
        min_delivery_date: NaiveDate,
    ) -> Self {
        let rows = result
            .rows
            .iter()
            .map(|row| ReportRow {
                label: day_label(row.date),
                sales: row.sales.raw.clone(),
                usage: row.daily_usage,
                kind: row.class.kind,
                stock: window
                    .get(row.index)
                    .filter(|_| row.class.stock_editable)
                    .map(StockCells::from),
            })
            .collect();

        Self {
            ready: result.is_ready(),
            min_delivery_date: min_delivery_date.format(INPUT_DATE_FORMAT).to_string(),
            delivery_date: delivery_date.map(display_date).unwrap_or_default(),
            usage_factors: config.usage,
            rows,
            suggested_order: result.suggested_order_display(),
            waste_warnings: result.waste_warnings.clone(),
        }
    }

    /// 已觸發的警告訊息
    pub fn warning_messages(&self) -> Vec<String> {
        self.waste_warnings
            .iter()
            .filter(|w| w.flagged)
            .map(WasteWarning::message)
            .collect()
    }

    /// 序列化為 JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::PlanningSession;
    use chrono::NaiveDate;
    use meatplan_calc::RowKind;
    use meatplan_core::DayField;

    fn session() -> PlanningSession {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let mut session = PlanningSession::new(today);
        session.set_delivery_date_str("2026-10-17").unwrap();
        session.set_duration_str("2").unwrap();
        session
    }

    #[test]
    fn test_unconfigured_report() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let report = PlanningSession::new(today).report();

        assert!(!report.ready);
        assert!(report.rows.is_empty());
        assert_eq!(report.delivery_date, "");
        assert_eq!(report.min_delivery_date, "2026-10-16");
        assert!(report.warning_messages().is_empty());
    }

    #[test]
    fn test_report_rows() {
        let mut session = session();
        session.set_cell(0, DayField::SalesAmount, "1000").unwrap();
        session.set_cell(0, DayField::OnHandLarge, "9").unwrap();

        let report = session.report();
        assert!(report.ready);
        assert_eq!(report.delivery_date, "10-17-2026");
        assert_eq!(report.rows.len(), 4);

        let first = &report.rows[0];
        assert_eq!(first.label, "10-16-2026 (Fri)");
        assert_eq!(first.sales, "1000");
        assert_eq!(first.usage.large.to_string(), "0.64");
        assert_eq!(first.kind, RowKind::Ordinary);
        assert_eq!(first.stock.as_ref().unwrap().on_hand_large, "9");

        assert_eq!(report.rows[1].kind, RowKind::Delivery);
        assert!(report.rows[1].stock.is_none());
        assert_eq!(report.rows[3].kind, RowKind::Consumption);
    }

    #[test]
    fn test_report_warnings_and_json() {
        let mut session = session();
        session.set_cell(0, DayField::OnHandLarge, "3").unwrap();
        for i in 0..4 {
            session.set_cell(i, DayField::SalesAmount, "500").unwrap();
        }

        let report = session.report();
        // 時界第 1..=3 列：銷售 1500 → 大 0.96；浪費 3 - 0.96 = 2.04
        assert_eq!(
            report.warning_messages(),
            vec!["Warning: 2.04 cases of large meat may go unused.".to_string()]
        );
        assert_eq!(report.suggested_order.small.to_string(), "0.30");

        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["delivery_date"], "10-17-2026");
        assert_eq!(value["rows"][1]["kind"], "Delivery");
        assert_eq!(value["ready"], true);
    }
}
