//! Purchase chain factories: payment, order, order item, cart line.

use crate::corpus;
use crate::dirty::{corrupt, invalid_label, invalid_ref};
use crate::generator::GenContext;
use crate::ids;
use mart_types::{Cart, OrderDetails, OrderItem, PaymentDetails, PaymentStatus, Sku, User};
use rust_decimal::Decimal;

/// Generate one payment record.
pub fn payment(ctx: &mut GenContext) -> PaymentDetails {
    let (created_at, updated_at) = super::updated_window(ctx);
    let id = ids::entity_id("payment_details", ctx.rng.uuid());

    let clean_provider = (*ctx.rng.pick(corpus::CARD_PROVIDERS)).to_string();
    let provider = corrupt(&mut ctx.rng, &ctx.dirty, clean_provider, |rng| {
        invalid_label(rng, "Provider")
    });

    let status = *ctx.rng.pick(&PaymentStatus::ALL);

    PaymentDetails {
        id,
        // Stamped zero; the downstream aggregation owns the amount
        amount: Decimal::new(0, 2),
        provider,
        status,
        created_at,
        updated_at,
    }
}

/// Generate one order header for `user` paid by `payment`.
pub fn order(ctx: &mut GenContext, user: &User, payment: &PaymentDetails) -> OrderDetails {
    let (created_at, updated_at) = super::updated_window(ctx);
    let id = ids::entity_id("order_details", ctx.rng.uuid());

    let user_id = corrupt(&mut ctx.rng, &ctx.dirty, user.id.clone(), |rng| {
        invalid_ref(rng, "user")
    });
    let payment_id = corrupt(&mut ctx.rng, &ctx.dirty, payment.id.clone(), |rng| {
        invalid_ref(rng, "payment")
    });

    OrderDetails {
        id,
        user_id,
        payment_id,
        created_at,
        updated_at,
    }
}

/// Generate one order line putting `sku` on `order`.
pub fn order_item(ctx: &mut GenContext, sku: &Sku, order: &OrderDetails) -> OrderItem {
    let (created_at, updated_at) = super::updated_window(ctx);
    let id = ids::entity_id("order_item", ctx.rng.uuid());

    let order_id = corrupt(&mut ctx.rng, &ctx.dirty, order.id.clone(), |rng| {
        invalid_ref(rng, "order")
    });
    let products_sku_id = corrupt(&mut ctx.rng, &ctx.dirty, sku.id.clone(), |rng| {
        invalid_ref(rng, "sku")
    });

    let clean_quantity = ctx.rng.int_range(1, 99_999_999);
    let quantity = corrupt(&mut ctx.rng, &ctx.dirty, clean_quantity, |rng| {
        *rng.pick(&[-50, 999_999_999])
    });

    OrderItem {
        id,
        order_id,
        products_sku_id,
        quantity,
        created_at,
        updated_at,
    }
}

/// Generate one cart line tied to `order`.
pub fn cart(ctx: &mut GenContext, sku: &Sku, order: &OrderDetails) -> Cart {
    let (created_at, updated_at) = super::updated_window(ctx);
    let id = ids::entity_id("cart", ctx.rng.uuid());

    let order_id = corrupt(&mut ctx.rng, &ctx.dirty, order.id.clone(), |rng| {
        invalid_ref(rng, "order")
    });
    let products_sku_id = corrupt(&mut ctx.rng, &ctx.dirty, sku.id.clone(), |rng| {
        invalid_ref(rng, "sku")
    });

    Cart {
        id,
        order_id,
        products_sku_id,
        // Basket-scale quantity, unlike the bulk order-item range
        quantity: ctx.rng.int_range(1, 5),
        created_at,
        updated_at,
    }
}
