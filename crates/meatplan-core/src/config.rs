//! 計劃配置模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::quantity::{CaseQuantities, MeatSize};
use crate::{PlanError, Result};

/// 用量係數：每 $1,000 銷售額所需的箱數
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageFactors {
    /// 大肉（箱 / $1k）
    pub large: Decimal,

    /// 小肉（箱 / $1k）
    pub small: Decimal,
}

impl UsageFactors {
    /// 鎖定的係數：大 0.64、小 0.15
    pub const LOCKED: UsageFactors = UsageFactors {
        large: Decimal::from_parts(64, 0, 0, false, 2),
        small: Decimal::from_parts(15, 0, 0, false, 2),
    };

    /// 銷售額換算基數
    pub const SALES_UNIT: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

    pub fn new(large: Decimal, small: Decimal) -> Self {
        Self { large, small }
    }

    /// 取得指定尺寸的係數
    pub fn factor(&self, size: MeatSize) -> Decimal {
        match size {
            MeatSize::Large => self.large,
            MeatSize::Small => self.small,
        }
    }

    /// 將銷售額換算為所需箱數（未捨入，溢位時取上限）
    pub fn cases_for_sales(&self, sales: Decimal) -> CaseQuantities {
        let thousands = sales / Self::SALES_UNIT;
        CaseQuantities::new(
            thousands.saturating_mul(self.large),
            thousands.saturating_mul(self.small),
        )
    }
}

impl Default for UsageFactors {
    fn default() -> Self {
        Self::LOCKED
    }
}

/// 計劃參數配置
///
/// 由程式設定，不開放給使用者編輯。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// 用量係數
    pub usage: UsageFactors,

    /// 保存期限（天），從到貨日起算，決定浪費風險的時界
    pub shelf_life_days: u32,

    /// 顯示用小數位數
    pub display_scale: u32,
}

impl PlanningConfig {
    /// 預設保存期限
    pub const DEFAULT_SHELF_LIFE_DAYS: u32 = 4;

    /// 預設顯示小數位數
    pub const DEFAULT_DISPLAY_SCALE: u32 = 2;

    /// 創建新的計劃配置
    pub fn new(usage: UsageFactors) -> Self {
        Self {
            usage,
            shelf_life_days: Self::DEFAULT_SHELF_LIFE_DAYS,
            display_scale: Self::DEFAULT_DISPLAY_SCALE,
        }
    }

    /// 建構器模式：設置用量係數
    pub fn with_usage_factors(mut self, usage: UsageFactors) -> Self {
        self.usage = usage;
        self
    }

    /// 建構器模式：設置保存期限
    pub fn with_shelf_life_days(mut self, days: u32) -> Self {
        self.shelf_life_days = days;
        self
    }

    /// 建構器模式：設置顯示小數位數
    pub fn with_display_scale(mut self, scale: u32) -> Self {
        self.display_scale = scale;
        self
    }

    /// 從 JSON 載入並驗證配置
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PlanningConfig =
            serde_json::from_str(json).map_err(|e| PlanError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 驗證配置
    pub fn validate(&self) -> Result<()> {
        if self.usage.large.is_sign_negative() || self.usage.small.is_sign_negative() {
            return Err(PlanError::InvalidConfig(format!(
                "用量係數不可為負: large={}, small={}",
                self.usage.large, self.usage.small
            )));
        }
        if self.shelf_life_days == 0 {
            return Err(PlanError::InvalidConfig("保存期限至少 1 天".to_string()));
        }
        Ok(())
    }
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self::new(UsageFactors::LOCKED)
    }
}
