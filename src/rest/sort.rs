//! Single-column sort descriptors.
//!
//! Tables sort by one column at a time and report it as a one-entry map
//! `{column: direction}`. The backend expects an `orders` parameter holding
//! either `column` (ascending) or `column desc`.

use serde_json::{Map, Value};

/// The direction marker tables send for ascending order.
pub const ASCEND: &str = "ascend";

/// Sort direction.
///
/// Only the literal [`ASCEND`] marker is ascending. Every other direction
/// value, recognized or not, sorts descending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending order.
    Ascend,
    /// Descending order.
    Descend,
}

impl SortOrder {
    /// Interprets a direction value.
    #[must_use]
    pub fn parse(direction: &str) -> Self {
        if direction == ASCEND {
            Self::Ascend
        } else {
            Self::Descend
        }
    }
}

impl From<&str> for SortOrder {
    fn from(direction: &str) -> Self {
        Self::parse(direction)
    }
}

/// A column to sort by and its direction.
///
/// # Example
///
/// ```rust
/// use admin_console::rest::SortDescriptor;
///
/// assert_eq!(SortDescriptor::new("name", "ascend").orders().as_deref(), Some("name"));
/// assert_eq!(SortDescriptor::new("name", "descend").orders().as_deref(), Some("name desc"));
/// assert_eq!(SortDescriptor::new("name", "sideways").orders().as_deref(), Some("name desc"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortDescriptor {
    column: String,
    order: SortOrder,
}

impl SortDescriptor {
    /// Creates a descriptor from a column and a raw direction value.
    #[must_use]
    pub fn new(column: impl Into<String>, direction: &str) -> Self {
        Self {
            column: column.into(),
            order: SortOrder::parse(direction),
        }
    }

    /// Creates an ascending descriptor.
    #[must_use]
    pub fn ascend(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            order: SortOrder::Ascend,
        }
    }

    /// Creates a descending descriptor.
    #[must_use]
    pub fn descend(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            order: SortOrder::Descend,
        }
    }

    /// Reads the first `{column: direction}` entry of a table sorter.
    ///
    /// Returns `None` for an empty sorter. A direction that is not a string
    /// sorts descending.
    #[must_use]
    pub fn from_sorter(sorter: &Map<String, Value>) -> Option<Self> {
        let (column, direction) = sorter.iter().next()?;
        Some(Self::new(
            column.clone(),
            direction.as_str().unwrap_or_default(),
        ))
    }

    /// Returns the column name.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Returns the sort direction.
    #[must_use]
    pub const fn order(&self) -> SortOrder {
        self.order
    }

    /// Returns the `orders` clause, or `None` when the column is empty.
    #[must_use]
    pub fn orders(&self) -> Option<String> {
        if self.column.is_empty() {
            return None;
        }
        Some(match self.order {
            SortOrder::Ascend => self.column.clone(),
            SortOrder::Descend => format!("{} desc", self.column),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_ascend_marker_is_ascending() {
        assert_eq!(SortOrder::parse("ascend"), SortOrder::Ascend);
        assert_eq!(SortOrder::parse("descend"), SortOrder::Descend);
        assert_eq!(SortOrder::parse("ASCEND"), SortOrder::Descend);
        assert_eq!(SortOrder::parse("asc"), SortOrder::Descend);
        assert_eq!(SortOrder::parse(""), SortOrder::Descend);
    }

    #[test]
    fn test_orders_clause() {
        assert_eq!(SortDescriptor::ascend("colA").orders(), Some("colA".to_string()));
        assert_eq!(
            SortDescriptor::descend("colA").orders(),
            Some("colA desc".to_string())
        );
    }

    #[test]
    fn test_empty_column_has_no_orders() {
        assert_eq!(SortDescriptor::ascend("").orders(), None);
    }

    #[test]
    fn test_from_sorter() {
        let sorter = json!({"createdAt": "ascend"});
        let descriptor = SortDescriptor::from_sorter(sorter.as_object().unwrap()).unwrap();
        assert_eq!(descriptor.column(), "createdAt");
        assert_eq!(descriptor.order(), SortOrder::Ascend);

        let sorter = json!({"createdAt": null});
        let descriptor = SortDescriptor::from_sorter(sorter.as_object().unwrap()).unwrap();
        assert_eq!(descriptor.order(), SortOrder::Descend);

        assert!(SortDescriptor::from_sorter(&Map::new()).is_none());
    }
}
