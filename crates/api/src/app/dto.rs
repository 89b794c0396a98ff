use serde::Deserialize;

use itemdex_catalog::Criteria;
use itemdex_core::{DomainError, DomainResult};

// -------------------------
// Request DTOs
// -------------------------

/// Query parameters accepted by `GET /items`.
///
/// Kept as raw strings so that conversion errors surface through
/// [`ListItemsQuery::into_criteria`] rather than as extractor rejections.
/// Empty values are treated as absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemsQuery {
    pub name: Option<String>,
    pub members: Option<String>,
    pub shop: Option<String>,
    pub min_street_price: Option<String>,
    pub max_street_price: Option<String>,
    pub min_high_alch: Option<String>,
    pub max_high_alch: Option<String>,
    pub min_low_alch: Option<String>,
    pub max_low_alch: Option<String>,
}

impl ListItemsQuery {
    pub fn into_criteria(self) -> DomainResult<Criteria> {
        Ok(Criteria {
            name: non_empty(self.name),
            members: non_empty(self.members),
            shop: non_empty(self.shop),
            min_street_price: parse_bound("minStreetPrice", self.min_street_price)?,
            max_street_price: parse_bound("maxStreetPrice", self.max_street_price)?,
            min_high_alch: parse_bound("minHighAlch", self.min_high_alch)?,
            max_high_alch: parse_bound("maxHighAlch", self.max_high_alch)?,
            min_low_alch: parse_bound("minLowAlch", self.min_low_alch)?,
            max_low_alch: parse_bound("maxLowAlch", self.max_low_alch)?,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_bound(param: &str, raw: Option<String>) -> DomainResult<Option<i64>> {
    let Some(raw) = non_empty(raw) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<i64>()
        .map(Some)
        .map_err(|e| DomainError::validation(format!("{param} must be an integer, got {raw:?}: {e}")))
}
