use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub hourly_rate: Decimal,
    pub active: bool,
    pub created_at: String,
}
