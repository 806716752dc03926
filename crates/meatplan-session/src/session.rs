//! 計劃會話：持有視窗並在邊界處理輸入變更

use chrono::NaiveDate;
use meatplan_calc::{ArrivalIndex, PlanCalculator, PlanResult, RowClassifier, WindowGenerator};
use meatplan_core::calendar::{days_between, parse_input_date};
use meatplan_core::{CellValue, DayField, PlanError, PlanningConfig, PlanningWindow, Result};
use uuid::Uuid;

use crate::report::PlanReport;

/// 計劃會話
///
/// 會話獨佔計劃視窗。到貨日或天數變更時整體重建視窗，之前輸入的每日資料全部捨棄。
/// 衍生結果每次讀取都重新計算。
#[derive(Debug, Clone)]
pub struct PlanningSession {
    /// 會話ID
    id: Uuid,

    /// 今天（視窗第 0 列）
    today: NaiveDate,

    /// 到貨日
    delivery_date: Option<NaiveDate>,

    /// 新訂單需維持的天數
    duration_days: Option<u32>,

    /// 計劃視窗
    window: PlanningWindow,

    calculator: PlanCalculator,
}

impl PlanningSession {
    /// 天數上限（一年）
    pub const MAX_DURATION_DAYS: u32 = 366;

    /// 到貨日最多可排在今天之後的天數
    pub const MAX_LEAD_DAYS: i64 = 366;

    /// 創建新的會話（使用鎖定的用量係數）
    pub fn new(today: NaiveDate) -> Self {
        Self::with_config(today, PlanningConfig::default())
    }

    /// 以指定配置創建會話
    pub fn with_config(today: NaiveDate, config: PlanningConfig) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!("創建計劃會話 {}（今天 {}）", id, today);
        Self {
            id,
            today,
            delivery_date: None,
            duration_days: None,
            window: PlanningWindow::empty(),
            calculator: PlanCalculator::new(config),
        }
    }

    /// 以本地時間的今天創建會話
    pub fn starting_today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// 可選的最早到貨日
    pub fn min_delivery_date(&self) -> NaiveDate {
        self.today
    }

    pub fn delivery_date(&self) -> Option<NaiveDate> {
        self.delivery_date
    }

    pub fn duration_days(&self) -> Option<u32> {
        self.duration_days
    }

    pub fn window(&self) -> &PlanningWindow {
        &self.window
    }

    pub fn config(&self) -> &PlanningConfig {
        self.calculator.config()
    }

    /// 到貨列
    pub fn arrival(&self) -> ArrivalIndex {
        ArrivalIndex::locate(&self.window, self.delivery_date)
    }

    /// 設定到貨日；不可早於今天，也不可晚於今天之後 [`Self::MAX_LEAD_DAYS`] 天
    pub fn set_delivery_date(&mut self, delivery_date: Option<NaiveDate>) -> Result<()> {
        if let Some(date) = delivery_date {
            if date < self.today {
                return Err(PlanError::DeliveryInPast {
                    delivery: date,
                    today: self.today,
                });
            }
            if days_between(self.today, date) > Self::MAX_LEAD_DAYS {
                return Err(PlanError::InvalidDate(format!(
                    "{}: 到貨日最多為今天之後 {} 天",
                    date,
                    Self::MAX_LEAD_DAYS
                )));
            }
        }

        if self.delivery_date != delivery_date {
            self.delivery_date = delivery_date;
            self.regenerate();
        }
        Ok(())
    }

    /// 以表單文字（yyyy-MM-dd）設定到貨日，空白表示清除
    pub fn set_delivery_date_str(&mut self, input: &str) -> Result<()> {
        let date = if input.trim().is_empty() {
            None
        } else {
            Some(parse_input_date(input)?)
        };
        self.set_delivery_date(date)
    }

    /// 設定天數；必須為 1 到 [`Self::MAX_DURATION_DAYS`] 之間的整數
    pub fn set_duration(&mut self, duration_days: Option<u32>) -> Result<()> {
        if let Some(days) = duration_days {
            if days == 0 || days > Self::MAX_DURATION_DAYS {
                return Err(PlanError::InvalidDuration(days.to_string()));
            }
        }

        if self.duration_days != duration_days {
            self.duration_days = duration_days;
            self.regenerate();
        }
        Ok(())
    }

    /// 以表單文字設定天數，空白表示清除
    pub fn set_duration_str(&mut self, input: &str) -> Result<()> {
        let trimmed = input.trim();
        let duration = if trimmed.is_empty() {
            None
        } else {
            let days = trimmed
                .parse::<u32>()
                .map_err(|_| PlanError::InvalidDuration(input.to_string()))?;
            Some(days)
        };
        self.set_duration(duration)
    }

    /// 編輯單一儲存格
    ///
    /// 庫存欄位只能在到貨日之前的列編輯。
    pub fn set_cell(&mut self, index: usize, field: DayField, raw: &str) -> Result<()> {
        let len = self.window.len();
        if index >= len {
            return Err(PlanError::RowOutOfRange { index, len });
        }
        if field.is_stock() && !RowClassifier::is_stock_editable(index, self.arrival()) {
            return Err(PlanError::FieldLocked { index, field });
        }

        self.window.set_field(index, field, CellValue::parse(raw))
    }

    /// 以欄位名稱編輯儲存格
    pub fn set_cell_by_name(&mut self, index: usize, field: &str, raw: &str) -> Result<()> {
        let field = field.parse::<DayField>()?;
        self.set_cell(index, field, raw)
    }

    /// 重新計算結果
    pub fn result(&self) -> PlanResult {
        self.calculator
            .calculate(&self.window, self.delivery_date, self.duration_days)
    }

    /// 重新產生報表
    pub fn report(&self) -> PlanReport {
        PlanReport::build(
            &self.result(),
            &self.window,
            self.calculator.config(),
            self.delivery_date,
            self.min_delivery_date(),
        )
    }

    /// 整體重建視窗，捨棄舊的輸入
    fn regenerate(&mut self) {
        let window = WindowGenerator::generate(self.delivery_date, self.duration_days, self.today);
        let discarded = self.window.replace(window);
        tracing::debug!(
            "會話 {} 重建視窗：{} 列 → {} 列",
            self.id,
            discarded.len(),
            self.window.len()
        );
    }
}
