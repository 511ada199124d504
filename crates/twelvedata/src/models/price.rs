use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::wire::decimal;

/// Latest traded price (`/price`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RealTimePrice {
    #[serde(with = "decimal")]
    pub price: Decimal,
}
