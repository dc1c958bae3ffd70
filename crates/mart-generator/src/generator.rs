//! Dependency-ordered generation driver.

use crate::dirty::DirtyConfig;
use crate::factory;
use crate::ids::SkuIdError;
use crate::provider::RandomProvider;
use chrono::{DateTime, Utc};
use mart_types::RecordSet;

/// Requested row counts are clamped (not rejected) to this range.
pub const MIN_ROW_COUNT: u64 = 1;
pub const MAX_ROW_COUNT: u64 = 999_999;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Composite SKU id construction failed
    #[error("SKU id error: {0}")]
    SkuId(#[from] SkuIdError),
}

/// Clamp a requested row count into `[MIN_ROW_COUNT, MAX_ROW_COUNT]`.
pub fn clamp_row_count(requested: u64) -> u64 {
    requested.clamp(MIN_ROW_COUNT, MAX_ROW_COUNT)
}

/// Wall clock used for `created_at` stamps. Tests pin it for reproducible
/// record sets; production uses the system clock.
#[derive(Debug, Clone, Copy)]
enum Clock {
    System,
    Fixed(DateTime<Utc>),
}

/// Shared state threaded through every factory call.
pub struct GenContext {
    /// Seeded random source
    pub rng: RandomProvider,
    /// Field-corruption settings
    pub dirty: DirtyConfig,
    clock: Clock,
}

impl GenContext {
    /// The `created_at` stamp for the entity being built.
    pub fn now(&self) -> DateTime<Utc> {
        match self.clock {
            Clock::System => Utc::now(),
            Clock::Fixed(at) => at,
        }
    }
}

/// Driver that assembles one [`RecordSet`] per invocation.
///
/// Factories run in dependency order so every reference field points at an
/// already-built row: user → address, category → subcategory → product →
/// SKU → wishlist, payment → order → order item and cart. A failure in any
/// factory aborts the whole invocation; there is no retry or partial output.
///
/// The generator is deterministic per seed: two drivers built with the same
/// seed (and, in tests, the same pinned clock) produce identical sets.
pub struct Generator {
    ctx: GenContext,
}

impl Generator {
    /// Create a generator with the given seed and no field corruption.
    pub fn new(seed: u64) -> Self {
        Self {
            ctx: GenContext {
                rng: RandomProvider::from_seed(seed),
                dirty: DirtyConfig::OFF,
                clock: Clock::System,
            },
        }
    }

    /// Enable dirty-data injection.
    pub fn with_dirty(mut self, dirty: DirtyConfig) -> Self {
        self.ctx.dirty = dirty;
        self
    }

    /// Pin the clock, making generation fully reproducible.
    pub fn with_fixed_now(mut self, now: DateTime<Utc>) -> Self {
        self.ctx.clock = Clock::Fixed(now);
        self
    }

    /// Generate one row of every entity kind.
    pub fn record_set(&mut self) -> Result<RecordSet, GeneratorError> {
        let ctx = &mut self.ctx;

        let user = factory::user(ctx);
        let address = factory::address(ctx, &user);
        let category = factory::category(ctx);
        let subcategory = factory::subcategory(ctx, &category);
        let product = factory::product(ctx, &subcategory);
        let products_sku = factory::sku(ctx, &category, &subcategory, &product)?;
        let wishlist = factory::wishlist(ctx, &products_sku, &user);
        let payment = factory::payment(ctx);
        let order = factory::order(ctx, &user, &payment);
        let order_item = factory::order_item(ctx, &products_sku, &order);
        let cart = factory::cart(ctx, &products_sku, &order);

        Ok(RecordSet {
            user,
            address,
            category,
            subcategory,
            product,
            products_sku,
            wishlist,
            payment,
            order,
            order_item,
            cart,
        })
    }

    #[cfg(test)]
    pub(crate) fn context_for_tests(&mut self) -> &mut GenContext {
        &mut self.ctx
    }

    /// Generate `count` record sets (count is taken as-is; callers clamp
    /// requested user input with [`clamp_row_count`]).
    pub fn record_sets(&mut self, count: u64) -> Result<Vec<RecordSet>, GeneratorError> {
        let mut sets = Vec::with_capacity(count as usize);
        for _ in 0..count {
            sets.push(self.record_set()?);
        }
        Ok(sets)
    }
}
