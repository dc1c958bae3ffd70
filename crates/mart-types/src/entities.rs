//! Entity value records for the demo shop.
//!
//! Field names follow the column names the browsing frontend displays
//! (`created_at`, `deleted_at`, `products_sku_id`, ...). `deleted_at` and
//! `updated_at` are generated up front to simulate a later lifecycle event;
//! they always satisfy `deleted_at >= created_at` / `updated_at >= created_at`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Biological sex recorded on a user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    /// All variants, in generation order.
    pub const ALL: [Sex; 3] = [Sex::Male, Sex::Female, Sex::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
        }
    }
}

/// Settlement state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Success,
    Pending,
    Failed,
    Refunded,
}

impl PaymentStatus {
    /// All variants, in generation order.
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Success,
        PaymentStatus::Pending,
        PaymentStatus::Failed,
        PaymentStatus::Refunded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Success => "Success",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Refunded => "Refunded",
        }
    }
}

/// A shop customer account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub real_name: String,
    pub phone_number: String,
    pub sex: Sex,
    pub job: String,
    pub company: String,
    pub email: String,
    pub password: String,
    pub birth_of_date: NaiveDate,
    /// Year-only arithmetic: current year minus birth year.
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub deleted_at: DateTime<Utc>,
}

/// A delivery or billing address owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub address_line: String,
    pub country: String,
    pub city: String,
    pub postal_code: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: DateTime<Utc>,
}

/// Top-level catalog category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: DateTime<Utc>,
}

/// Second-level catalog node under a [`Category`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: String,
    /// Id of the parent category.
    pub parent_id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: DateTime<Utc>,
}

/// A sellable product under a subcategory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Holds the *subcategory* id. The column was named `category_id` in the
    /// shipped schema and the name is part of the wire contract.
    pub category_id: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: DateTime<Utc>,
}

/// Stock-keeping unit: the sellable variant of a product with its own
/// price and stock level.
///
/// The id is composite: the last 3 characters of the category, subcategory
/// and product ids plus a random 5-digit serial, hyphen-joined, so the
/// ancestry is visible without a lookup table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sku {
    pub id: String,
    pub product_id: String,
    /// Unit price in [5.00, 500.00], always 2 decimal places.
    pub price: Decimal,
    /// Stock on hand, in [0, 9_999_999].
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub deleted_at: DateTime<Utc>,
}

/// A user's saved SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    pub id: String,
    pub user_id: String,
    pub products_sku_id: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: DateTime<Utc>,
}

/// Payment record backing an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub id: String,
    /// Stamped 0.00 at generation time; the downstream aggregation pipeline
    /// owns the final amount.
    pub amount: Decimal,
    pub provider: String,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Order header linking a user to a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetails {
    pub id: String,
    pub user_id: String,
    pub payment_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One SKU line on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    pub products_sku_id: String,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A cart line tied to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: String,
    pub order_id: String,
    pub products_sku_id: String,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One generated row of every entity kind, produced by a single driver
/// invocation.
///
/// Serializes as an object keyed by table name, which is also the on-disk
/// line format of job-folder chunk files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSet {
    pub user: User,
    pub address: Address,
    pub category: Category,
    pub subcategory: Subcategory,
    pub product: Product,
    pub products_sku: Sku,
    pub wishlist: Wishlist,
    pub payment: PaymentDetails,
    pub order: OrderDetails,
    pub order_item: OrderItem,
    pub cart: Cart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sex::Male).unwrap(), "\"male\"");
        assert_eq!(serde_json::to_string(&Sex::Other).unwrap(), "\"other\"");
    }

    #[test]
    fn test_payment_status_serializes_capitalized() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Refunded).unwrap(),
            "\"Refunded\""
        );
    }

    #[test]
    fn test_sku_price_round_trips_with_two_decimals() {
        let sku = Sku {
            id: "abc-def-ghi-12345".to_string(),
            product_id: "product_id-x".to_string(),
            price: Decimal::new(42999, 2),
            quantity: 7,
            created_at: Utc::now(),
            deleted_at: Utc::now(),
        };

        let json = serde_json::to_string(&sku).unwrap();
        let back: Sku = serde_json::from_str(&json).unwrap();
        assert_eq!(back.price, sku.price);
        assert_eq!(back.price.scale(), 2);
    }
}
