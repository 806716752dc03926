//! 箱數模型

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// 肉品尺寸類別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeatSize {
    /// 大肉
    Large,
    /// 小肉
    Small,
}

impl MeatSize {
    pub const ALL: [MeatSize; 2] = [MeatSize::Large, MeatSize::Small];

    /// 顯示名稱（用於警告訊息）
    pub fn label(&self) -> &'static str {
        match self {
            MeatSize::Large => "large",
            MeatSize::Small => "small",
        }
    }
}

impl fmt::Display for MeatSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 大/小兩種尺寸的箱數
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseQuantities {
    pub large: Decimal,
    pub small: Decimal,
}

impl CaseQuantities {
    pub const ZERO: CaseQuantities = CaseQuantities {
        large: Decimal::ZERO,
        small: Decimal::ZERO,
    };

    pub fn new(large: Decimal, small: Decimal) -> Self {
        Self { large, small }
    }

    /// 取得指定尺寸的數量
    pub fn get(&self, size: MeatSize) -> Decimal {
        match size {
            MeatSize::Large => self.large,
            MeatSize::Small => self.small,
        }
    }

    /// 相減並以 0 為下限
    pub fn saturating_sub(self, other: CaseQuantities) -> CaseQuantities {
        CaseQuantities {
            large: self.large.saturating_sub(other.large).max(Decimal::ZERO),
            small: self.small.saturating_sub(other.small).max(Decimal::ZERO),
        }
    }

    /// 顯示用捨入（四捨五入，遠離零）
    pub fn rounded(&self, scale: u32) -> CaseQuantities {
        CaseQuantities {
            large: round_for_display(self.large, scale),
            small: round_for_display(self.small, scale),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.large.is_zero() && self.small.is_zero()
    }
}

impl Add for CaseQuantities {
    type Output = CaseQuantities;

    fn add(self, rhs: CaseQuantities) -> CaseQuantities {
        CaseQuantities {
            large: self.large.saturating_add(rhs.large),
            small: self.small.saturating_add(rhs.small),
        }
    }
}

impl Sub for CaseQuantities {
    type Output = CaseQuantities;

    fn sub(self, rhs: CaseQuantities) -> CaseQuantities {
        CaseQuantities {
            large: self.large.saturating_sub(rhs.large),
            small: self.small.saturating_sub(rhs.small),
        }
    }
}

/// 加總，溢位時取上限
pub fn saturating_sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v))
}

/// 顯示用捨入，固定小數位數（例如 0.3 → 0.30）
pub fn round_for_display(value: Decimal, scale: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);
    rounded
}
