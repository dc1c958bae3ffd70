//! Seeded random source behind all field generation.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Random source injected into every factory.
///
/// Wraps a seeded [`StdRng`] so the same seed reproduces the same dataset.
/// Callers own range validity: every `min > max` (or empty-slice) call is a
/// programming error and fails fast rather than being silently swapped.
pub struct RandomProvider {
    rng: StdRng,
}

impl RandomProvider {
    /// Create a provider seeded for reproducible generation.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `[min, max]` (inclusive).
    pub fn int_range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min <= max, "int_range: min {min} > max {max}");
        self.rng.random_range(min..=max)
    }

    /// Uniform 2-decimal value in `[min, max]` (inclusive).
    ///
    /// Draws whole cents, so the result always has scale 2 and every
    /// representable 2-decimal value in the range is equally likely.
    pub fn decimal_range(&mut self, min: Decimal, max: Decimal) -> Decimal {
        assert!(min <= max, "decimal_range: min {min} > max {max}");
        let min_cents = (min * Decimal::ONE_HUNDRED)
            .to_i64()
            .expect("decimal_range: min out of cent range");
        let max_cents = (max * Decimal::ONE_HUNDRED)
            .to_i64()
            .expect("decimal_range: max out of cent range");
        Decimal::new(self.rng.random_range(min_cents..=max_cents), 2)
    }

    /// Uniform timestamp in `[start, end]` (inclusive, second granularity).
    pub fn date_between(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> DateTime<Utc> {
        assert!(start <= end, "date_between: start {start} > end {end}");
        let ts = self.rng.random_range(start.timestamp()..=end.timestamp());
        DateTime::from_timestamp(ts, 0).unwrap_or(start)
    }

    /// Uniform choice from a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "pick: empty candidate slice");
        &items[self.rng.random_range(0..items.len())]
    }

    /// True with probability `p` (`p` must be in `[0, 1]`).
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }

    /// Random UUIDv4 drawn from the seeded RNG (deterministic under a seed,
    /// unlike `Uuid::new_v4`).
    pub fn uuid(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes);

        // Set version (4) and variant (RFC 4122) bits
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;

        Uuid::from_bytes(bytes)
    }

    /// Random number with exactly `n` digits (no leading zero).
    pub fn digits(&mut self, n: usize) -> String {
        if n == 0 {
            return String::new();
        }

        let mut result = String::with_capacity(n);
        result.push(char::from_digit(self.rng.random_range(1..10), 10).unwrap());
        for _ in 1..n {
            result.push(char::from_digit(self.rng.random_range(0..10), 10).unwrap());
        }
        result
    }

    /// Random string of `len` characters drawn from `charset`.
    pub fn charset_string(&mut self, charset: &str, len: usize) -> String {
        let chars: Vec<char> = charset.chars().collect();
        assert!(!chars.is_empty(), "charset_string: empty charset");
        (0..len)
            .map(|_| chars[self.rng.random_range(0..chars.len())])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_int_range_inclusive_bounds() {
        let mut rng = RandomProvider::from_seed(42);

        for _ in 0..200 {
            let v = rng.int_range(10, 20);
            assert!((10..=20).contains(&v));
        }
        // Degenerate range is allowed
        assert_eq!(rng.int_range(7, 7), 7);
    }

    #[test]
    #[should_panic(expected = "int_range: min")]
    fn test_int_range_rejects_swapped_bounds() {
        let mut rng = RandomProvider::from_seed(42);
        rng.int_range(20, 10);
    }

    #[test]
    fn test_decimal_range_always_two_decimals() {
        let mut rng = RandomProvider::from_seed(42);
        let min = Decimal::new(500, 2);
        let max = Decimal::new(50000, 2);

        for _ in 0..200 {
            let v = rng.decimal_range(min, max);
            assert_eq!(v.scale(), 2);
            assert!(v >= min && v <= max);
        }
    }

    #[test]
    fn test_date_between_inclusive() {
        let mut rng = RandomProvider::from_seed(42);
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();

        for _ in 0..100 {
            let dt = rng.date_between(start, end);
            assert!(dt >= start && dt <= end);
        }
    }

    #[test]
    #[should_panic(expected = "date_between: start")]
    fn test_date_between_rejects_swapped_bounds() {
        let mut rng = RandomProvider::from_seed(42);
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        rng.date_between(start, end);
    }

    #[test]
    fn test_uuid_is_version_4_and_deterministic() {
        let mut rng1 = RandomProvider::from_seed(42);
        let mut rng2 = RandomProvider::from_seed(42);

        let a = rng1.uuid();
        let b = rng2.uuid();
        assert_eq!(a, b);
        assert_eq!(a.get_version_num(), 4);

        // Consecutive draws differ
        assert_ne!(rng1.uuid(), a);
    }

    #[test]
    fn test_digits_length_and_no_leading_zero() {
        let mut rng = RandomProvider::from_seed(42);

        for _ in 0..50 {
            let s = rng.digits(5);
            assert_eq!(s.len(), 5);
            assert!(s.chars().all(|c| c.is_ascii_digit()));
            assert_ne!(s.as_bytes()[0], b'0');
        }
        assert_eq!(rng.digits(0), "");
    }

    #[test]
    fn test_pick_and_charset_string() {
        let mut rng = RandomProvider::from_seed(7);
        let items = ["a", "b", "c"];

        for _ in 0..20 {
            assert!(items.contains(rng.pick(&items)));
        }

        let s = rng.charset_string("xyz", 8);
        assert_eq!(s.len(), 8);
        assert!(s.chars().all(|c| "xyz".contains(c)));
    }
}
