//! 日曆工具：日期差、日期序列與顯示格式

use chrono::{Duration, NaiveDate};

use crate::{PlanError, Result};

/// 顯示用日期格式（M-d-yyyy）
pub const DISPLAY_DATE_FORMAT: &str = "%-m-%-d-%Y";

/// 輸入用日期格式（yyyy-MM-dd）
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// 兩個日期之間的整日數（可能為負）
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// 到貨前的天數，過去的日期視為 0
pub fn days_to_arrive(today: NaiveDate, delivery: NaiveDate) -> u32 {
    u32::try_from(days_between(today, delivery).max(0)).unwrap_or(u32::MAX)
}

/// 從起始日開始的連續日期（含起始日，共 `count` 天）
///
/// 超出日期範圍的部分會被截斷；呼叫端需先以 [`add_days`] 確認末日存在。
pub fn consecutive_days(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    start.iter_days().take(count).collect()
}

/// 起始日加上天數
pub fn add_days(date: NaiveDate, days: u32) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(i64::from(days)))
}

/// 解析輸入日期（yyyy-MM-dd）
pub fn parse_input_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), INPUT_DATE_FORMAT)
        .map_err(|e| PlanError::InvalidDate(format!("{}: {}", input, e)))
}

/// 顯示日期，例如 `10-16-2026`
pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// 列標籤，例如 `10-16-2026 (Fri)`
pub fn day_label(date: NaiveDate) -> String {
    format!("{} ({})", display_date(date), date.format("%a"))
}
