use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A sale row left-joined with its customer and product. The joined columns are
/// nullable so a dangling reference still reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SaleDetail {
    pub sale_id: i32,
    pub sale_date: DateTime<Utc>,
    pub quantity: i32,
    pub customer_id: i32,
    pub product_id: i32,
    pub customer_name: Option<String>,
    pub product_name: Option<String>,
    pub price: Option<Decimal>,
}
