//! Table projection: category filter + stable quantity sort.
//!
//! Everything here is a pure function of its inputs and is recomputed on every
//! render; nothing is cached.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::record::InventoryRecord;

/// Rows with a quantity strictly below this are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Direction of the quantity sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header indicator.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Optional category filter. An empty category means "all categories".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    category: Option<String>,
}

impl FilterState {
    pub fn new(category: Option<String>) -> Self {
        Self {
            category: category.filter(|c| !c.is_empty()),
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn matches(&self, record: &InventoryRecord) -> bool {
        in_category(record, self.category())
    }
}

fn in_category(record: &InventoryRecord, category: Option<&str>) -> bool {
    category.is_none_or(|c| record.category() == c)
}

/// The two view inputs owned by the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub filter: FilterState,
    pub sort: SortDirection,
}

impl ViewState {
    pub fn project<'a>(&self, records: &'a [InventoryRecord]) -> Vec<&'a InventoryRecord> {
        project(records, self.filter.category(), self.sort)
    }
}

/// Filter by category (when set), then stable-sort by quantity.
///
/// Equal quantities keep their store order in both directions.
pub fn project<'a>(
    records: &'a [InventoryRecord],
    category: Option<&str>,
    direction: SortDirection,
) -> Vec<&'a InventoryRecord> {
    let mut rows: Vec<&InventoryRecord> = records
        .iter()
        .filter(|r| in_category(r, category))
        .collect();

    // `sort_by` is stable.
    match direction {
        SortDirection::Ascending => rows.sort_by(|a, b| a.quantity().cmp(&b.quantity())),
        SortDirection::Descending => rows.sort_by(|a, b| b.quantity().cmp(&a.quantity())),
    }

    rows
}

/// Distinct categories in first-seen order.
pub fn categories(records: &[InventoryRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(InventoryRecord::category)
        .filter(|c| seen.insert(*c))
        .map(str::to_string)
        .collect()
}

pub fn is_low_stock(record: &InventoryRecord) -> bool {
    is_low_stock_at(record, LOW_STOCK_THRESHOLD)
}

/// Not-a-number quantities are never low stock.
pub fn is_low_stock_at(record: &InventoryRecord, threshold: i64) -> bool {
    record.quantity().value().is_some_and(|q| q < threshold)
}
