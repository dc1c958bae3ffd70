//! SKU factory.

use crate::dirty::corrupt;
use crate::generator::GenContext;
use crate::ids::{self, SkuIdError, SKU_SERIAL_MAX, SKU_SERIAL_MIN};
use mart_types::{Category, Product, Sku, Subcategory};
use rust_decimal::Decimal;

/// Generate one SKU for `product`, traceable to its whole ancestry.
///
/// The id embeds the last 3 characters of the category, subcategory and
/// product ids; too-short ancestor ids are rejected.
pub fn sku(
    ctx: &mut GenContext,
    category: &Category,
    subcategory: &Subcategory,
    product: &Product,
) -> Result<Sku, SkuIdError> {
    let (created_at, deleted_at) = super::deleted_window(ctx);

    let serial = ctx.rng.int_range(SKU_SERIAL_MIN, SKU_SERIAL_MAX);
    let id = ids::sku_id(&category.id, &subcategory.id, &product.id, serial)?;

    let clean_price = ctx
        .rng
        .decimal_range(Decimal::new(500, 2), Decimal::new(50000, 2));
    let price = corrupt(&mut ctx.rng, &ctx.dirty, clean_price, |rng| {
        *rng.pick(&[Decimal::new(-5000, 2), Decimal::new(99_999_999, 2)])
    });

    let clean_quantity = ctx.rng.int_range(0, 9_999_999);
    let quantity = corrupt(&mut ctx.rng, &ctx.dirty, clean_quantity, |rng| {
        *rng.pick(&[-100, 99_999_999])
    });

    Ok(Sku {
        id,
        product_id: product.id.clone(),
        price,
        quantity,
        created_at,
        deleted_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Generator;

    #[test]
    fn test_sku_rejects_short_ancestor_ids() {
        let mut driver = Generator::new(42);
        let set = driver.record_set().unwrap();

        let mut category = set.category.clone();
        category.id = "xy".to_string();

        let ctx = driver.context_for_tests();
        let err = sku(ctx, &category, &set.subcategory, &set.product).unwrap_err();
        assert!(matches!(err, SkuIdError::AncestorTooShort(_)));
    }

    #[test]
    fn test_dirty_sku_takes_out_of_domain_values() {
        use crate::dirty::DirtyConfig;
        let mut driver = Generator::new(42).with_dirty(DirtyConfig::new(1.0));
        let set = driver.record_set().unwrap();
        let sku = set.products_sku;

        assert!(sku.price == Decimal::new(-5000, 2) || sku.price == Decimal::new(99_999_999, 2));
        assert!(sku.quantity == -100 || sku.quantity == 99_999_999);
    }
}
