//! Wishlist factory.

use crate::dirty::{corrupt, invalid_ref};
use crate::generator::GenContext;
use crate::ids;
use mart_types::{Sku, User, Wishlist};

/// Generate one wishlist entry saving `sku` for `user`.
pub fn wishlist(ctx: &mut GenContext, sku: &Sku, user: &User) -> Wishlist {
    let (created_at, deleted_at) = super::deleted_window(ctx);
    let id = ids::entity_id("wishlist", ctx.rng.uuid());

    let user_id = corrupt(&mut ctx.rng, &ctx.dirty, user.id.clone(), |rng| {
        invalid_ref(rng, "user")
    });
    let products_sku_id = corrupt(&mut ctx.rng, &ctx.dirty, sku.id.clone(), |rng| {
        invalid_ref(rng, "sku")
    });

    Wishlist {
        id,
        user_id,
        products_sku_id,
        created_at,
        deleted_at,
    }
}

#[cfg(test)]
mod tests {
    use crate::generator::Generator;

    #[test]
    fn test_wishlist_references_its_parents() {
        let mut generator = Generator::new(42);
        let set = generator.record_set().unwrap();

        assert!(set.wishlist.id.starts_with("wishlist_id-"));
        assert_eq!(set.wishlist.user_id, set.user.id);
        assert_eq!(set.wishlist.products_sku_id, set.products_sku.id);
        assert!(set.wishlist.deleted_at >= set.wishlist.created_at);
    }
}
