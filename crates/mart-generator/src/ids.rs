//! Identifier construction.
//!
//! Standalone entities get `"<kind>_id-" + UUIDv4`. SKU ids are composite:
//! the last 3 characters of the category, subcategory and product ids plus a
//! 5-digit serial, hyphen-joined, so a SKU's ancestry is readable without a
//! lookup table.

use uuid::Uuid;

/// Characters taken from the tail of each ancestor id.
pub const ANCESTOR_SUFFIX_LEN: usize = 3;

/// Serial range appended to SKU ids.
pub const SKU_SERIAL_MIN: i64 = 10_000;
pub const SKU_SERIAL_MAX: i64 = 99_999;

/// Error building a composite SKU id.
#[derive(Debug, thiserror::Error)]
pub enum SkuIdError {
    /// An ancestor id has fewer characters than the suffix length.
    #[error("Ancestor id too short for SKU suffix (need at least {ANCESTOR_SUFFIX_LEN} chars): {0:?}")]
    AncestorTooShort(String),

    /// The serial is outside the 5-digit range.
    #[error("SKU serial out of range [{SKU_SERIAL_MIN}, {SKU_SERIAL_MAX}]: {0}")]
    SerialOutOfRange(i64),
}

/// Standalone entity id: `"<kind>_id-<uuid>"`.
pub fn entity_id(kind: &str, uuid: Uuid) -> String {
    format!("{kind}_id-{uuid}")
}

/// Composite SKU id: `"<cat3>-<sub3>-<prod3>-<serial>"`.
///
/// Ancestor ids shorter than [`ANCESTOR_SUFFIX_LEN`] characters are rejected
/// rather than sliced out of range.
pub fn sku_id(
    category_id: &str,
    subcategory_id: &str,
    product_id: &str,
    serial: i64,
) -> Result<String, SkuIdError> {
    if !(SKU_SERIAL_MIN..=SKU_SERIAL_MAX).contains(&serial) {
        return Err(SkuIdError::SerialOutOfRange(serial));
    }

    Ok(format!(
        "{}-{}-{}-{serial}",
        tail(category_id)?,
        tail(subcategory_id)?,
        tail(product_id)?
    ))
}

/// Last [`ANCESTOR_SUFFIX_LEN`] characters of an id.
fn tail(id: &str) -> Result<&str, SkuIdError> {
    let chars = id.chars().count();
    if chars < ANCESTOR_SUFFIX_LEN {
        return Err(SkuIdError::AncestorTooShort(id.to_string()));
    }
    let (byte_start, _) = id
        .char_indices()
        .nth(chars - ANCESTOR_SUFFIX_LEN)
        .unwrap_or((0, ' '));
    Ok(&id[byte_start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_prefix() {
        let id = entity_id("category", Uuid::nil());
        assert!(id.starts_with("category_id-"));
        assert_eq!(id.len(), "category_id-".len() + 36);
    }

    #[test]
    fn test_sku_id_embeds_ancestor_tails() {
        let id = sku_id("category_id-abc", "subcategory_id-def", "product_id-ghi", 12345).unwrap();
        assert_eq!(id, "abc-def-ghi-12345");
    }

    #[test]
    fn test_sku_id_rejects_short_ancestor() {
        let err = sku_id("ab", "subcategory_id-def", "product_id-ghi", 12345).unwrap_err();
        assert!(matches!(err, SkuIdError::AncestorTooShort(ref id) if id == "ab"));
    }

    #[test]
    fn test_sku_id_rejects_out_of_range_serial() {
        let err = sku_id("abc", "def", "ghi", 9_999).unwrap_err();
        assert!(matches!(err, SkuIdError::SerialOutOfRange(9_999)));

        let err = sku_id("abc", "def", "ghi", 100_000).unwrap_err();
        assert!(matches!(err, SkuIdError::SerialOutOfRange(100_000)));
    }

    #[test]
    fn test_tail_is_character_based() {
        // Multi-byte characters must not split
        let id = sku_id("catégorie", "sous-cat", "produit", 54321).unwrap();
        assert!(id.starts_with("rie-"));
    }
}
