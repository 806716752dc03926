//! 每日記錄模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::quantity::CaseQuantities;
use crate::PlanError;

/// 每日記錄中可編輯的欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DayField {
    /// 銷售額（$）
    SalesAmount,
    /// 現有庫存（大）
    OnHandLarge,
    /// 現有庫存（小）
    OnHandSmall,
    /// 在途訂單（大）
    OnOrderLarge,
    /// 在途訂單（小）
    OnOrderSmall,
}

impl DayField {
    pub const ALL: [DayField; 5] = [
        DayField::SalesAmount,
        DayField::OnHandLarge,
        DayField::OnHandSmall,
        DayField::OnOrderLarge,
        DayField::OnOrderSmall,
    ];

    /// 庫存欄位（現有/在途），只在到貨日之前收集
    pub const STOCK: [DayField; 4] = [
        DayField::OnHandLarge,
        DayField::OnHandSmall,
        DayField::OnOrderLarge,
        DayField::OnOrderSmall,
    ];

    /// 是否為庫存欄位
    pub fn is_stock(&self) -> bool {
        !matches!(self, DayField::SalesAmount)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DayField::SalesAmount => "salesAmount",
            DayField::OnHandLarge => "onHandLarge",
            DayField::OnHandSmall => "onHandSmall",
            DayField::OnOrderLarge => "onOrderLarge",
            DayField::OnOrderSmall => "onOrderSmall",
        }
    }
}

impl fmt::Display for DayField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DayField {
    type Err = PlanError;

    /// 接受表單欄位名稱（camelCase 或 snake_case，`sales` 為銷售額的簡寫）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sales" | "salesAmount" | "sales_amount" => Ok(DayField::SalesAmount),
            "onHandLarge" | "on_hand_large" => Ok(DayField::OnHandLarge),
            "onHandSmall" | "on_hand_small" => Ok(DayField::OnHandSmall),
            "onOrderLarge" | "on_order_large" => Ok(DayField::OnOrderLarge),
            "onOrderSmall" | "on_order_small" => Ok(DayField::OnOrderSmall),
            other => Err(PlanError::UnknownField(other.to_string())),
        }
    }
}

/// 單一儲存格：保留使用者輸入的原始文字與解析後的數值
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellValue {
    /// 原始輸入文字（用於回顯）
    pub raw: String,

    /// 解析後的數值；空白、無法解析或負數為 None
    pub value: Option<Decimal>,
}

impl CellValue {
    /// 解析輸入文字
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let value = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .ok()
            .filter(|v| !v.is_sign_negative());

        Self {
            raw: raw.to_string(),
            value,
        }
    }

    /// 未設定（空白）
    pub fn is_unset(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// 計算用數值：未設定或無法解析時為 0
    pub fn amount(&self) -> Decimal {
        self.value.unwrap_or(Decimal::ZERO)
    }
}

impl From<Decimal> for CellValue {
    fn from(value: Decimal) -> Self {
        Self::parse(&value.to_string())
    }
}

/// 每日記錄（計劃視窗中的一列）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// 日期
    pub date: NaiveDate,

    /// 銷售額預測
    pub sales_amount: CellValue,

    /// 現有庫存（大）
    pub on_hand_large: CellValue,

    /// 現有庫存（小）
    pub on_hand_small: CellValue,

    /// 在途訂單（大）
    pub on_order_large: CellValue,

    /// 在途訂單（小）
    pub on_order_small: CellValue,
}

impl DayRecord {
    /// 創建所有欄位皆未設定的記錄
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            sales_amount: CellValue::default(),
            on_hand_large: CellValue::default(),
            on_hand_small: CellValue::default(),
            on_order_large: CellValue::default(),
            on_order_small: CellValue::default(),
        }
    }

    pub fn field(&self, field: DayField) -> &CellValue {
        match field {
            DayField::SalesAmount => &self.sales_amount,
            DayField::OnHandLarge => &self.on_hand_large,
            DayField::OnHandSmall => &self.on_hand_small,
            DayField::OnOrderLarge => &self.on_order_large,
            DayField::OnOrderSmall => &self.on_order_small,
        }
    }

    fn field_mut(&mut self, field: DayField) -> &mut CellValue {
        match field {
            DayField::SalesAmount => &mut self.sales_amount,
            DayField::OnHandLarge => &mut self.on_hand_large,
            DayField::OnHandSmall => &mut self.on_hand_small,
            DayField::OnOrderLarge => &mut self.on_order_large,
            DayField::OnOrderSmall => &mut self.on_order_small,
        }
    }

    /// 取代單一欄位
    pub fn set(&mut self, field: DayField, value: CellValue) {
        *self.field_mut(field) = value;
    }

    /// 計算用銷售額
    pub fn sales(&self) -> Decimal {
        self.sales_amount.amount()
    }

    /// 現有庫存（大/小）
    pub fn on_hand(&self) -> CaseQuantities {
        CaseQuantities::new(self.on_hand_large.amount(), self.on_hand_small.amount())
    }

    /// 在途訂單（大/小）
    pub fn on_order(&self) -> CaseQuantities {
        CaseQuantities::new(self.on_order_large.amount(), self.on_order_small.amount())
    }
}
