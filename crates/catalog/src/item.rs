use serde::{Deserialize, Serialize};

use itemdex_core::normalize_amount;

/// One catalog entry.
///
/// Flags and amounts are kept exactly as they appear in the data file; they
/// are only interpreted when a query compares against them. Keys beyond the
/// known fields are carried in `extra` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub members: String,
    pub shop: String,
    pub street_price: String,
    pub high_alchemy: String,
    pub low_alchemy: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Amount-bearing fields that range filters can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    StreetPrice,
    HighAlchemy,
    LowAlchemy,
}

impl Item {
    /// Raw stored text of an amount field.
    pub fn amount_text(&self, field: AmountField) -> &str {
        match field {
            AmountField::StreetPrice => &self.street_price,
            AmountField::HighAlchemy => &self.high_alchemy,
            AmountField::LowAlchemy => &self.low_alchemy,
        }
    }

    /// Normalized integer value of an amount field (recomputed on every call).
    pub fn amount(&self, field: AmountField) -> i64 {
        normalize_amount(self.amount_text(field))
    }
}
