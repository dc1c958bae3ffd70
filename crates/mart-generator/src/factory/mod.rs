//! One factory per entity kind.
//!
//! Each factory takes only the directly-referenced parent records, stamps
//! `created_at` from the context clock, derives the later lifecycle stamp
//! (`deleted_at` within a year, `updated_at` within a month), and returns a
//! plain value. No I/O, no global state.

mod address;
mod catalog;
mod orders;
mod sku;
mod user;
mod wishlist;

pub use address::address;
pub use catalog::{category, product, subcategory};
pub use orders::{cart, order, order_item, payment};
pub use sku::sku;
pub use user::user;
pub use wishlist::wishlist;

use crate::generator::GenContext;
use chrono::{DateTime, Duration, Utc};

/// `created_at` plus a deletion stamp 1–365 days out.
pub(crate) fn deleted_window(ctx: &mut GenContext) -> (DateTime<Utc>, DateTime<Utc>) {
    let created_at = ctx.now();
    let deleted_at = created_at + Duration::days(ctx.rng.int_range(1, 365));
    (created_at, deleted_at)
}

/// `created_at` plus an update stamp 0–30 days out (shorter window than
/// deletion).
pub(crate) fn updated_window(ctx: &mut GenContext) -> (DateTime<Utc>, DateTime<Utc>) {
    let created_at = ctx.now();
    let updated_at = created_at + Duration::days(ctx.rng.int_range(0, 30));
    (created_at, updated_at)
}
