//! Core types for the fakemart dataset generator.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - The eleven demo-shop entity records ([`User`], [`Category`], [`Sku`], ...)
//! - [`RecordSet`] - one generated row of every entity kind, keyed by table
//! - [`Table`] - the canonical table names the browsing frontend asks for
//! - [`wire`] - JSON payload shapes of the external backend's HTTP contract
//!
//! # Architecture
//!
//! ```text
//! mart-types (this crate)
//!    │
//!    ├─── mart-generator  (builds entity values)
//!    ├─── mart-populate   (writes them to CSV/JSONL sinks)
//!    └─── mart-jobstore   (groups them into job folders on disk)
//! ```
//!
//! Entities are immutable value records: no entity holds a live reference to
//! another, relationships are expressed purely through copied id strings.

pub mod entities;
pub mod tables;
pub mod wire;

// Re-exports for convenience
pub use entities::{
    Address, Cart, Category, OrderDetails, OrderItem, PaymentDetails, PaymentStatus, Product,
    RecordSet, Sex, Sku, Subcategory, User, Wishlist,
};
pub use tables::{Table, TableParseError};
