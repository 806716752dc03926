//! 計劃視窗模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::{CellValue, DayField, DayRecord};
use crate::{PlanError, Result};

/// 計劃視窗：從今天到（到貨日 + 天數）的連續每日記錄
///
/// 索引 0 為今天，日期遞增且連續。視窗只能整體替換，不做增量合併。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningWindow {
    records: Vec<DayRecord>,
}

impl PlanningWindow {
    /// 空視窗（尚未可計劃）
    pub fn empty() -> Self {
        Self::default()
    }

    /// 由連續日期建立視窗，所有欄位未設定
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            records: dates.into_iter().map(DayRecord::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&DayRecord> {
        self.records.get(index)
    }

    pub fn first(&self) -> Option<&DayRecord> {
        self.records.first()
    }

    /// 最後一列的索引
    pub fn last_index(&self) -> Option<usize> {
        self.records.len().checked_sub(1)
    }

    /// 查找日期所在的列
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.records.iter().position(|r| r.date == date)
    }

    /// 取代單一列的單一欄位，其他列與欄位不變
    pub fn set_field(&mut self, index: usize, field: DayField, value: CellValue) -> Result<()> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(PlanError::RowOutOfRange { index, len })?;
        record.set(field, value);
        Ok(())
    }

    /// 以原始輸入文字設定欄位
    pub fn set_raw(&mut self, index: usize, field: DayField, raw: &str) -> Result<()> {
        self.set_field(index, field, CellValue::parse(raw))
    }

    /// 整體替換視窗，回傳舊視窗
    pub fn replace(&mut self, other: PlanningWindow) -> PlanningWindow {
        std::mem::replace(self, other)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a PlanningWindow {
    type Item = &'a DayRecord;
    type IntoIter = std::slice::Iter<'a, DayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
