//! Canonical table names.
//!
//! These are the names the browsing frontend uses in `get_<table>` and
//! `get_raw_data/<parentJobId>/<table>` requests, and the keys under which
//! each entity appears in a serialized [`RecordSet`](crate::RecordSet).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eleven generated tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    User,
    Address,
    Category,
    Subcategory,
    Product,
    ProductsSku,
    Wishlist,
    Payment,
    Order,
    OrderItem,
    Cart,
}

impl Table {
    /// All tables, in generation dependency order.
    pub const ALL: [Table; 11] = [
        Table::User,
        Table::Address,
        Table::Category,
        Table::Subcategory,
        Table::Product,
        Table::ProductsSku,
        Table::Wishlist,
        Table::Payment,
        Table::Order,
        Table::OrderItem,
        Table::Cart,
    ];

    /// The wire name of the table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::User => "user",
            Table::Address => "address",
            Table::Category => "category",
            Table::Subcategory => "subcategory",
            Table::Product => "product",
            Table::ProductsSku => "products_sku",
            Table::Wishlist => "wishlist",
            Table::Payment => "payment",
            Table::Order => "order",
            Table::OrderItem => "order_item",
            Table::Cart => "cart",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a table name is not one of the known tables.
#[derive(Debug, thiserror::Error)]
#[error("Invalid table name: {0} (expected one of: user, address, category, subcategory, product, products_sku, wishlist, payment, order, order_item, cart)")]
pub struct TableParseError(pub String);

impl FromStr for Table {
    type Err = TableParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Table::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| TableParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_names() {
        for table in Table::ALL {
            let parsed: Table = table.as_str().parse().unwrap();
            assert_eq!(parsed, table);
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "orders".parse::<Table>().unwrap_err();
        assert!(err.to_string().contains("Invalid table name: orders"));
        assert!(err.to_string().contains("products_sku"));
    }

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(Table::ProductsSku.to_string(), "products_sku");
        assert_eq!(Table::OrderItem.to_string(), "order_item");
    }
}
