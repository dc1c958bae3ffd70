//! Address factory.

use crate::corpus;
use crate::dirty::{corrupt, invalid_label};
use crate::generator::GenContext;
use crate::ids;
use mart_types::{Address, User};

/// Generate one address owned by `user`.
pub fn address(ctx: &mut GenContext, user: &User) -> Address {
    let (created_at, deleted_at) = super::deleted_window(ctx);
    let id = ids::entity_id("address", ctx.rng.uuid());

    let clean_title = (*ctx.rng.pick(corpus::ADDRESS_TITLES)).to_string();
    let title = corrupt(&mut ctx.rng, &ctx.dirty, clean_title, |rng| {
        invalid_label(rng, "Title")
    });

    let clean_line = format!(
        "{} {} {}",
        ctx.rng.int_range(1, 9999),
        ctx.rng.pick(corpus::STREET_NAMES),
        ctx.rng.pick(corpus::STREET_SUFFIXES)
    );
    let address_line = corrupt(&mut ctx.rng, &ctx.dirty, clean_line, |rng| {
        invalid_label(rng, "Address")
    });

    // Country and city stay index-aligned so the pair is coherent
    let index = ctx.rng.int_range(0, corpus::COUNTRIES.len() as i64 - 1) as usize;
    let country = corpus::COUNTRIES[index].to_string();
    let city = corpus::CITIES[index].to_string();

    let clean_postal = ctx.rng.digits(5);
    let postal_code = corrupt(&mut ctx.rng, &ctx.dirty, clean_postal, |rng| {
        format!("INVALID{}", rng.digits(3))
    });

    Address {
        id,
        user_id: user.id.clone(),
        title,
        address_line,
        country,
        city,
        postal_code,
        created_at,
        deleted_at,
    }
}

#[cfg(test)]
mod tests {
    use crate::generator::Generator;

    #[test]
    fn test_address_belongs_to_user_and_pairs_geography() {
        let mut generator = Generator::new(42);
        let set = generator.record_set().unwrap();
        let address = set.address;

        assert!(address.id.starts_with("address_id-"));
        assert_eq!(address.user_id, set.user.id);
        assert_eq!(address.postal_code.len(), 5);

        use crate::corpus::{CITIES, COUNTRIES};
        let country_index = COUNTRIES
            .iter()
            .position(|c| *c == address.country)
            .unwrap();
        assert_eq!(CITIES[country_index], address.city);
    }
}
