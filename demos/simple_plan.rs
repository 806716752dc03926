//! 簡單訂肉計劃示例

use meatplan::{DayField, PlanningSession};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== 簡單訂肉計劃示例 ===\n");

    let mut session = PlanningSession::starting_today();
    let delivery = meatplan::model::calendar::add_days(session.today(), 2)
        .ok_or_else(|| anyhow::anyhow!("日期溢出"))?;

    session.set_delivery_date(Some(delivery))?;
    session.set_duration(Some(4))?;

    // 每日銷售預測
    let sales = ["1800", "2100", "2500", "2300", "2700", "3000", "2400"];
    for (i, amount) in sales.iter().enumerate() {
        session.set_cell(i, DayField::SalesAmount, amount)?;
    }

    // 現有庫存與在途訂單（只在到貨日之前輸入）
    session.set_cell(0, DayField::OnHandLarge, "5")?;
    session.set_cell(0, DayField::OnHandSmall, "1")?;
    session.set_cell(1, DayField::OnOrderLarge, "2")?;

    let report = session.report();
    println!("到貨日: {}", report.delivery_date);
    for row in &report.rows {
        println!(
            "  {:<18} 銷售 {:>6}  大 {:>5}  小 {:>5}  {:?}",
            row.label, row.sales, row.usage.large, row.usage.small, row.kind
        );
    }

    println!("\n建議訂購量:");
    println!("  大: {} cases", report.suggested_order.large);
    println!("  小: {} cases", report.suggested_order.small);

    for message in report.warning_messages() {
        println!("{}", message);
    }

    Ok(())
}
