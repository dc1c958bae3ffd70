//! User account factory.

use crate::corpus;
use crate::dirty::corrupt;
use crate::generator::GenContext;
use crate::ids;
use chrono::{Datelike, Duration};
use mart_types::{Sex, User};

/// Widest plausible age window, in days (the profile corpus allows ages up
/// to 150 years).
const MAX_AGE_DAYS: i64 = 150 * 365;

/// Generate one user account.
pub fn user(ctx: &mut GenContext) -> User {
    let (created_at, deleted_at) = super::deleted_window(ctx);
    let id = ids::entity_id("user", ctx.rng.uuid());

    let first = *ctx.rng.pick(corpus::FIRST_NAMES);
    let last = *ctx.rng.pick(corpus::LAST_NAMES);

    let real_name = corrupt(
        &mut ctx.rng,
        &ctx.dirty,
        format!("{first} {last}"),
        |rng| format!("InvalidName{}", rng.int_range(1, 1000)),
    );

    let clean_username = format!(
        "{}{}{}",
        first[..1].to_lowercase(),
        last.to_lowercase(),
        ctx.rng.int_range(1, 99)
    );
    let username = corrupt(&mut ctx.rng, &ctx.dirty, clean_username, |rng| {
        format!("{}@invalid", rng.digits(4))
    });

    let clean_phone = format!(
        "+1-{}-{}-{}",
        ctx.rng.digits(3),
        ctx.rng.digits(3),
        ctx.rng.digits(4)
    );
    let phone_number = corrupt(&mut ctx.rng, &ctx.dirty, clean_phone, |rng| {
        format!("invalid-phone-{}", rng.int_range(1, 1000))
    });

    let sex = *ctx.rng.pick(&Sex::ALL);

    let clean_job = format!(
        "{} {}",
        ctx.rng.pick(corpus::JOB_PREFIXES),
        ctx.rng.pick(corpus::JOB_BASES)
    );
    let job = corrupt(&mut ctx.rng, &ctx.dirty, clean_job, |rng| {
        format!("Invalid Job {}", rng.int_range(1, 100))
    });

    let clean_company = format!(
        "{} {}",
        ctx.rng.pick(corpus::COMPANY_BASES),
        ctx.rng.pick(corpus::COMPANY_SUFFIXES)
    );
    let company = corrupt(&mut ctx.rng, &ctx.dirty, clean_company, |rng| {
        format!("Invalid Company {}", rng.int_range(1, 100))
    });

    let clean_email = format!(
        "{}.{}{}@{}",
        first.to_lowercase(),
        last.to_lowercase(),
        ctx.rng.int_range(1, 999),
        ctx.rng.pick(corpus::EMAIL_DOMAINS)
    );
    let email = corrupt(&mut ctx.rng, &ctx.dirty, clean_email, |rng| {
        format!("invalid.email{}@bad", rng.int_range(1, 1000))
    });

    let len = ctx.rng.int_range(10, 14) as usize;
    let clean_password = ctx.rng.charset_string(corpus::PASSWORD_CHARSET, len);
    // Too-simple password is the invalid form
    let password = corrupt(&mut ctx.rng, &ctx.dirty, clean_password, |_| {
        "123".to_string()
    });

    let today = created_at.date_naive();
    let clean_birth = today - Duration::days(ctx.rng.int_range(0, MAX_AGE_DAYS));
    // Invalid form is a birth date in the future
    let birth_of_date = corrupt(&mut ctx.rng, &ctx.dirty, clean_birth, |rng| {
        today + Duration::days(rng.int_range(1, 3650))
    });

    // Year-only arithmetic, as displayed by the frontend
    let age = created_at.year() - birth_of_date.year();

    User {
        id,
        username,
        real_name,
        phone_number,
        sex,
        job,
        company,
        email,
        password,
        birth_of_date,
        age,
        created_at,
        deleted_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Generator;

    #[test]
    fn test_user_fields_are_plausible() {
        let mut generator = Generator::new(42);
        let set = generator.record_set().unwrap();
        let user = set.user;

        assert!(user.id.starts_with("user_id-"));
        assert!(user.email.contains('@'));
        assert!(user.phone_number.starts_with("+1-"));
        assert!(user.real_name.contains(' '));
        assert!((10..=14).contains(&user.password.len()));
        assert!((0..=150).contains(&user.age));
    }
}
