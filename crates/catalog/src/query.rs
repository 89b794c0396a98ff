//! Query evaluation over the catalog.
//!
//! Both operations are pure reads: results borrow from the catalog and keep
//! catalog order.

use serde::Serialize;

use itemdex_core::{DomainError, DomainResult};

use crate::item::{AmountField, Item};
use crate::store::Catalog;

/// Filter criteria for list queries.
///
/// Every field is optional; present fields are AND-combined. Amount bounds
/// are inclusive and compare against the normalized amount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    /// Case-insensitive substring of the item name.
    pub name: Option<String>,
    /// Exact text of the members flag (`"true"` / `"false"`).
    pub members: Option<String>,
    /// Exact text of the shop flag.
    pub shop: Option<String>,
    pub min_street_price: Option<i64>,
    pub max_street_price: Option<i64>,
    pub min_high_alch: Option<i64>,
    pub max_high_alch: Option<i64>,
    pub min_low_alch: Option<i64>,
    pub max_low_alch: Option<i64>,
}

impl Criteria {
    fn bounds(&self) -> [(AmountField, Option<i64>, Option<i64>); 3] {
        [
            (AmountField::StreetPrice, self.min_street_price, self.max_street_price),
            (AmountField::HighAlchemy, self.min_high_alch, self.max_high_alch),
            (AmountField::LowAlchemy, self.min_low_alch, self.max_low_alch),
        ]
    }

    // `needle` is the already-lowercased name filter.
    fn matches(&self, item: &Item, needle: Option<&str>) -> bool {
        if let Some(needle) = needle {
            if !item.name.to_lowercase().contains(needle) {
                return false;
            }
        }
        if let Some(members) = &self.members {
            if item.members != *members {
                return false;
            }
        }
        if let Some(shop) = &self.shop {
            if item.shop != *shop {
                return false;
            }
        }

        self.bounds().into_iter().all(|(field, min, max)| {
            if min.is_none() && max.is_none() {
                return true;
            }
            let value = item.amount(field);
            min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
        })
    }
}

/// Matching items plus their count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterResult<'a> {
    pub total: usize,
    pub items: Vec<&'a Item>,
}

/// Items matching `criteria`, in catalog order.
pub fn filter<'a>(catalog: &'a Catalog, criteria: &Criteria) -> FilterResult<'a> {
    let needle = criteria.name.as_deref().map(str::to_lowercase);
    let items: Vec<&Item> = catalog
        .items()
        .iter()
        .filter(|item| criteria.matches(item, needle.as_deref()))
        .collect();

    FilterResult {
        total: items.len(),
        items,
    }
}

/// First item whose name equals `name`, ignoring case.
///
/// The `NotFound` error carries `name` exactly as supplied.
pub fn find_exact<'a>(catalog: &'a Catalog, name: &str) -> DomainResult<&'a Item> {
    let wanted = name.to_lowercase();
    catalog
        .items()
        .iter()
        .find(|item| item.name.to_lowercase() == wanted)
        .ok_or_else(|| DomainError::not_found(name))
}
