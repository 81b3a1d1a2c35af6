//! # Table Columns
//!
//! Column order and metadata for the product table, plus drag-and-drop
//! reordering.
//!
//! ## Reorder
//! ```text
//! drag "id" onto "category"
//!
//!   before:  [id] image  name [category] price stock status actions
//!             │                   ▲
//!             └── removed ────────┘ reinserted at category's index (3)
//!
//!   after:   image  name  category [id] price stock status actions
//! ```
//!
//! The target index is read before the dragged column is removed, so a
//! forward drag lands just after the target and a backward drag lands
//! just before it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::query::{SortConfig, SortKey};

/// Column identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ColumnId {
    Id,
    Image,
    Name,
    Category,
    Price,
    Stock,
    Status,
    Actions,
}

impl ColumnId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColumnId::Id => "id",
            ColumnId::Image => "image",
            ColumnId::Name => "name",
            ColumnId::Category => "category",
            ColumnId::Price => "price",
            ColumnId::Stock => "stock",
            ColumnId::Status => "status",
            ColumnId::Actions => "actions",
        }
    }

    /// Field backing this column, if it has a sortable one.
    pub const fn sort_key(&self) -> Option<SortKey> {
        match self {
            ColumnId::Id => Some(SortKey::Id),
            ColumnId::Name => Some(SortKey::Name),
            ColumnId::Category => Some(SortKey::Category),
            ColumnId::Price => Some(SortKey::Price),
            ColumnId::Stock => Some(SortKey::Stock),
            ColumnId::Status => Some(SortKey::Status),
            ColumnId::Image | ColumnId::Actions => None,
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(ColumnId::Id),
            "image" => Ok(ColumnId::Image),
            "name" => Ok(ColumnId::Name),
            "category" => Ok(ColumnId::Category),
            "price" => Ok(ColumnId::Price),
            "stock" => Ok(ColumnId::Stock),
            "status" => Ok(ColumnId::Status),
            "actions" => Ok(ColumnId::Actions),
            other => Err(CoreError::UnknownColumn(other.to_string())),
        }
    }
}

/// One table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ColumnSpec {
    pub id: ColumnId,
    pub label: String,
    pub sortable: bool,
}

impl ColumnSpec {
    pub fn new(id: ColumnId, label: &str, sortable: bool) -> Self {
        ColumnSpec {
            id,
            label: label.to_string(),
            sortable,
        }
    }

    /// Sort key a header click on this column selects. `None` for
    /// non-sortable columns.
    pub fn sort_key(&self) -> Option<SortKey> {
        if self.sortable {
            self.id.sort_key()
        } else {
            None
        }
    }
}

/// The table layout the dashboard starts with.
pub fn default_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new(ColumnId::Id, "ID", true),
        ColumnSpec::new(ColumnId::Image, "Image", false),
        ColumnSpec::new(ColumnId::Name, "Name", true),
        ColumnSpec::new(ColumnId::Category, "Category", true),
        ColumnSpec::new(ColumnId::Price, "Price", true),
        ColumnSpec::new(ColumnId::Stock, "Stock", true),
        ColumnSpec::new(ColumnId::Status, "Status", true),
        ColumnSpec::new(ColumnId::Actions, "Actions", false),
    ]
}

/// Moves `dragged` to the position `target` occupies.
///
/// Unchanged when the ids are equal or either is missing.
pub fn reorder(columns: &[ColumnSpec], dragged: ColumnId, target: ColumnId) -> Vec<ColumnSpec> {
    let mut reordered = columns.to_vec();
    reorder_in_place(&mut reordered, dragged, target);
    reordered
}

/// In-place form of [`reorder`]. Returns whether the order changed.
pub fn reorder_in_place(columns: &mut Vec<ColumnSpec>, dragged: ColumnId, target: ColumnId) -> bool {
    if dragged == target {
        return false;
    }

    let dragged_index = columns.iter().position(|c| c.id == dragged);
    let target_index = columns.iter().position(|c| c.id == target);

    let (Some(from), Some(to)) = (dragged_index, target_index) else {
        return false;
    };

    let column = columns.remove(from);
    columns.insert(to, column);
    true
}

/// Header click: toggles the sort when the column is sortable.
/// Returns whether the sort changed.
pub fn click_header(sort: &mut SortConfig, column: &ColumnSpec) -> bool {
    match column.sort_key() {
        Some(key) => {
            sort.toggle(key);
            true
        }
        None => false,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortDirection;

    fn order(columns: &[ColumnSpec]) -> Vec<&'static str> {
        columns.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_forward_drag_lands_at_target_index() {
        let columns = reorder(&default_columns(), ColumnId::Id, ColumnId::Category);
        assert_eq!(
            order(&columns),
            vec!["image", "name", "category", "id", "price", "stock", "status", "actions"]
        );
    }

    #[test]
    fn test_backward_drag_lands_before_target() {
        let columns = reorder(&default_columns(), ColumnId::Actions, ColumnId::Name);
        assert_eq!(
            order(&columns),
            vec!["id", "image", "actions", "name", "category", "price", "stock", "status"]
        );
    }

    #[test]
    fn test_same_or_missing_id_is_noop() {
        let columns = default_columns();
        assert_eq!(reorder(&columns, ColumnId::Price, ColumnId::Price), columns);

        let mut partial = default_columns();
        partial.retain(|c| c.id != ColumnId::Image);
        assert_eq!(reorder(&partial, ColumnId::Image, ColumnId::Id), partial);
        assert_eq!(reorder(&partial, ColumnId::Id, ColumnId::Image), partial);
        assert!(!reorder_in_place(&mut partial, ColumnId::Id, ColumnId::Image));
    }

    #[test]
    fn test_reorder_keeps_every_column_once() {
        let mut columns = default_columns();
        assert!(reorder_in_place(&mut columns, ColumnId::Stock, ColumnId::Id));
        assert!(reorder_in_place(&mut columns, ColumnId::Image, ColumnId::Actions));

        let mut ids = order(&columns);
        ids.sort_unstable();
        let mut expected = order(&default_columns());
        expected.sort_unstable();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_click_header_only_toggles_sortable_columns() {
        let columns = default_columns();
        let mut sort = SortConfig::default();

        assert!(!click_header(&mut sort, &columns[1])); // image
        assert_eq!(sort, SortConfig::default());

        assert!(click_header(&mut sort, &columns[4])); // price
        assert_eq!(sort, SortConfig::new(SortKey::Price, SortDirection::Asc));

        assert!(click_header(&mut sort, &columns[4]));
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn test_column_id_parse() {
        assert_eq!("actions".parse::<ColumnId>().unwrap(), ColumnId::Actions);
        assert!(matches!(
            "sku".parse::<ColumnId>(),
            Err(CoreError::UnknownColumn(_))
        ));
    }
}
