//! 以 JSON 配置與固定日期計算一週訂單，並輸出報表 JSON

use chrono::NaiveDate;
use meatplan::{PlanningConfig, PlanningSession};

const CONFIG: &str = r#"{
    "usage": { "large": "0.64", "small": "0.15" },
    "shelf_life_days": 4,
    "display_scale": 2
}"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = PlanningConfig::from_json(CONFIG)?;
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).ok_or_else(|| anyhow::anyhow!("無效的日期"))?;

    let mut session = PlanningSession::with_config(today, config);
    session.set_delivery_date_str("2026-10-19")?;
    session.set_duration_str("7")?;

    // 表單輸入：(列, 欄位, 文字)
    let edits = [
        (0, "sales", "2100"),
        (1, "sales", "1950"),
        (2, "sales", "2300"),
        (3, "sales", "2800"),
        (4, "sales", "2600"),
        (5, "sales", "3200"),
        (6, "sales", "3500"),
        (7, "sales", "2400"),
        (8, "sales", "2200"),
        (9, "sales", "2000"),
        (10, "sales", "2900"),
        (0, "onHandLarge", "8"),
        (0, "onHandSmall", "2"),
        (1, "onOrderLarge", "6"),
        (2, "onOrderSmall", "1.5"),
    ];
    for (index, field, raw) in edits {
        session.set_cell_by_name(index, field, raw)?;
    }

    println!("{}", session.report().to_json()?);

    Ok(())
}
