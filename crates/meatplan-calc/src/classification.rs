//! 列分類：到貨日、消耗日與庫存欄位是否可編輯

use chrono::NaiveDate;
use meatplan_core::PlanningWindow;
use serde::{Deserialize, Serialize};

/// 到貨日不在視窗中時，浪費時界的起點
pub const HORIZON_FALLBACK_INDEX: usize = 0;

/// 到貨日不在視窗中時，高亮的列（無）
pub const HIGHLIGHT_FALLBACK: Option<usize> = None;

/// 到貨日不在視窗中時，庫存欄位可編輯的列數（無）
pub const STOCK_CUTOFF_FALLBACK: usize = 0;

/// 到貨列索引
///
/// 兩種用途的回退值刻意不同：時界計算回退到第 0 列，高亮則回退到無。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalIndex(Option<usize>);

impl ArrivalIndex {
    /// 在視窗中查找到貨日
    pub fn locate(window: &PlanningWindow, delivery_date: Option<NaiveDate>) -> Self {
        Self(delivery_date.and_then(|d| window.index_of(d)))
    }

    pub fn found(index: usize) -> Self {
        Self(Some(index))
    }

    pub fn missing() -> Self {
        Self(None)
    }

    /// 實際找到的索引
    pub fn get(&self) -> Option<usize> {
        self.0
    }

    /// 浪費時界的起點
    pub fn horizon_start(&self) -> usize {
        self.0.unwrap_or(HORIZON_FALLBACK_INDEX)
    }

    /// 需高亮為到貨日的列
    pub fn highlight(&self) -> Option<usize> {
        self.0.or(HIGHLIGHT_FALLBACK)
    }

    /// 庫存欄位只在此索引之前收集與加總
    pub fn stock_cutoff(&self) -> usize {
        self.0.unwrap_or(STOCK_CUTOFF_FALLBACK)
    }
}

/// 列類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowKind {
    /// 到貨日
    Delivery,
    /// 消耗日（到貨後的維持天數內）
    Consumption,
    /// 其他
    Ordinary,
}

/// 單列分類結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowClass {
    pub kind: RowKind,

    /// 現有/在途欄位是否可編輯
    pub stock_editable: bool,
}

/// 列分類器
pub struct RowClassifier;

impl RowClassifier {
    /// 分類第 `index` 列
    pub fn classify(index: usize, arrival: ArrivalIndex, duration_days: u32) -> RowClass {
        let kind = match arrival.highlight() {
            Some(arrive) if index == arrive => RowKind::Delivery,
            Some(arrive)
                if index > arrive && (index as u64) <= arrive as u64 + u64::from(duration_days) =>
            {
                RowKind::Consumption
            }
            _ => RowKind::Ordinary,
        };

        RowClass {
            kind,
            stock_editable: Self::is_stock_editable(index, arrival),
        }
    }

    /// 庫存欄位只在到貨日之前可編輯
    pub fn is_stock_editable(index: usize, arrival: ArrivalIndex) -> bool {
        index < arrival.stock_cutoff()
    }

    /// 分類整個視窗
    pub fn classify_window(
        window: &PlanningWindow,
        arrival: ArrivalIndex,
        duration_days: u32,
    ) -> Vec<RowClass> {
        (0..window.len())
            .map(|i| Self::classify(i, arrival, duration_days))
            .collect()
    }
}
