//! Fake-entity generator for the fakemart demo shop.
//!
//! This crate produces plausible but fictitious e-commerce rows (users,
//! addresses, a category → subcategory → product → SKU catalog chain, and
//! payment → order → order-item/cart purchase chains) from a seeded RNG, so
//! the same seed reproduces the same dataset.
//!
//! # Architecture
//!
//! ```text
//! Profile (YAML) ──┐
//!                  ▼
//!          ┌──────────────┐
//!          │  Generator   │  dependency-ordered driver
//!          │              │
//!          │  - provider  │  RandomProvider (seeded StdRng)
//!          │  - dirty     │  opt-in field corruption
//!          │  - clock     │  system or fixed (tests)
//!          └──────┬───────┘
//!                 │ factory::* (one function per entity kind)
//!                 ▼
//!             RecordSet  (one row of each of the 11 tables)
//! ```
//!
//! # Example
//!
//! ```rust
//! use mart_generator::Generator;
//!
//! let mut generator = Generator::new(42);
//! let set = generator.record_set().unwrap();
//! assert_eq!(set.address.user_id, set.user.id);
//! assert_eq!(set.products_sku.id.split('-').count(), 4);
//! ```
//!
//! Relationships are carried as copied id strings only; each record set is
//! internally consistent (the SKU id embeds the 3-character suffixes of its
//! category/subcategory/product ancestors) and sets share nothing across
//! invocations.

pub mod corpus;
pub mod dirty;
pub mod factory;
pub mod generator;
pub mod ids;
pub mod profile;
pub mod provider;

// Re-exports for convenience
pub use dirty::DirtyConfig;
pub use generator::{clamp_row_count, GenContext, Generator, GeneratorError, MAX_ROW_COUNT, MIN_ROW_COUNT};
pub use ids::SkuIdError;
pub use profile::{Profile, ProfileError};
pub use provider::RandomProvider;
