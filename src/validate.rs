//! Pre-submit validation
//!
//! Checks run in a fixed order and stop at the first failure, so the
//! message shown to the user is always the most fundamental problem.

use crate::error::ValidationError;
use crate::types::ListingDraft;

/// Allowed listing title length in characters
pub const NAME_LEN: std::ops::RangeInclusive<usize> = 10..=62;
/// Allowed bedroom and bathroom counts
pub const ROOM_RANGE: std::ops::RangeInclusive<i64> = 1..=10;
/// Allowed regular price
pub const REGULAR_PRICE_RANGE: std::ops::RangeInclusive<i64> = 50..=10_000_000;
/// Allowed discounted price
pub const DISCOUNT_PRICE_RANGE: std::ops::RangeInclusive<i64> = 0..=10_000_000;

/// Coerce raw numeric input to an integer
///
/// Surrounding whitespace is ignored and an empty field counts as zero.
/// Returns `None` when the text is not an integer.
pub fn coerce_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse().ok()
}

/// Validate a draft before submission
pub fn validate(draft: &ListingDraft) -> Result<(), ValidationError> {
    if draft.image_urls.is_empty() {
        return Err(ValidationError::MissingImages);
    }

    // Unparseable prices fall through to the field checks below
    if draft.offer
        && let (Some(regular), Some(discount)) = (
            coerce_int(&draft.regular_price),
            coerce_int(&draft.discount_price),
        )
        && regular < discount
    {
        return Err(ValidationError::PriceInversion);
    }

    check_fields(draft)
}

fn check_fields(draft: &ListingDraft) -> Result<(), ValidationError> {
    let name_len = draft.name.chars().count();
    if !NAME_LEN.contains(&name_len) {
        return Err(invalid(
            "name",
            format!(
                "must be between {} and {} characters",
                NAME_LEN.start(),
                NAME_LEN.end()
            ),
        ));
    }
    if draft.description.trim().is_empty() {
        return Err(invalid("description", "is required".to_string()));
    }
    if draft.address.trim().is_empty() {
        return Err(invalid("address", "is required".to_string()));
    }

    check_range("bedrooms", &draft.bedrooms, &ROOM_RANGE)?;
    check_range("bathrooms", &draft.bathrooms, &ROOM_RANGE)?;
    check_range("regularPrice", &draft.regular_price, &REGULAR_PRICE_RANGE)?;
    if draft.offer {
        check_range("discountPrice", &draft.discount_price, &DISCOUNT_PRICE_RANGE)?;
    }
    Ok(())
}

fn check_range(
    field: &'static str,
    raw: &str,
    range: &std::ops::RangeInclusive<i64>,
) -> Result<i64, ValidationError> {
    let value = coerce_int(raw).ok_or_else(|| invalid(field, "must be a whole number".to_string()))?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(invalid(
            field,
            format!("must be between {} and {}", range.start(), range.end()),
        ))
    }
}

fn invalid(field: &'static str, reason: String) -> ValidationError {
    ValidationError::InvalidField { field, reason }
}
