//! Input validation functions
//!
//! Pure checks used by both services before anything touches storage.
//! Request structs additionally derive `validator::Validate` for field bounds.

use uuid::Uuid;

use crate::errors::ValidationError;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;
pub const MAX_COMMENT_CHARS: usize = 1000;
pub const DEFAULT_COMMENT_LIMIT: i64 = 50;
pub const MAX_COMMENT_LIMIT: i64 = 200;
pub const MAX_FOOD_NAME_CHARS: usize = 200;

/// Validate a star rating
pub fn validate_rating(rating: i32) -> Result<(), ValidationError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ValidationError::RatingOutOfRange {
            min: MIN_RATING,
            max: MAX_RATING,
            actual: rating,
        });
    }
    Ok(())
}

/// Trim a comment and check it is non-empty and within the length bound.
/// Length is counted in characters, not bytes.
pub fn normalize_comment(text: &str) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyComment);
    }
    if trimmed.chars().count() > MAX_COMMENT_CHARS {
        return Err(ValidationError::CommentTooLong {
            max: MAX_COMMENT_CHARS,
        });
    }
    Ok(trimmed.to_string())
}

/// Clamp a requested comment page size into `(0, MAX_COMMENT_LIMIT]`
pub fn clamp_comment_limit(limit: Option<i64>) -> i64 {
    match limit {
        Some(n) if n > MAX_COMMENT_LIMIT => MAX_COMMENT_LIMIT,
        Some(n) if n > 0 => n,
        _ => DEFAULT_COMMENT_LIMIT,
    }
}

/// Parse a path or body id, naming the entity in the error
pub fn parse_id(what: &'static str, raw: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ValidationError::InvalidId {
        what,
        value: raw.to_string(),
    })
}

/// Validate a food name
pub fn validate_food_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField("foodName"));
    }
    if trimmed.chars().count() > MAX_FOOD_NAME_CHARS {
        return Err(ValidationError::InvalidValue {
            field: "foodName",
            value: format!("longer than {} characters", MAX_FOOD_NAME_CHARS),
        });
    }
    Ok(())
}

/// Author shown next to a comment
pub fn display_name(first_name: &str, last_name: &str) -> String {
    let name = format!("{} {}", first_name.trim(), last_name.trim());
    let name = name.trim();
    if name.is_empty() {
        "Unknown".to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    fn test_rating_in_range_accepted(#[case] rating: i32) {
        assert!(validate_rating(rating).is_ok());
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    #[case(-1)]
    #[case(i32::MIN)]
    fn test_rating_out_of_range_rejected(#[case] rating: i32) {
        assert_eq!(
            validate_rating(rating),
            Err(ValidationError::RatingOutOfRange {
                min: 1,
                max: 5,
                actual: rating
            })
        );
    }

    #[test]
    fn test_normalize_comment() {
        assert_eq!(normalize_comment("  tasty  ").unwrap(), "tasty");
        assert_eq!(normalize_comment(""), Err(ValidationError::EmptyComment));
        assert_eq!(normalize_comment(" \n\t "), Err(ValidationError::EmptyComment));

        // Boundary: exactly 1000 chars after trimming is fine
        let max = format!("  {}  ", "a".repeat(1000));
        assert_eq!(normalize_comment(&max).unwrap().len(), 1000);

        let too_long = "a".repeat(1001);
        assert_eq!(
            normalize_comment(&too_long),
            Err(ValidationError::CommentTooLong { max: 1000 })
        );
    }

    #[test]
    fn test_comment_length_counts_chars() {
        // 1000 two-byte characters is 2000 bytes but still allowed
        let text = "ž".repeat(1000);
        assert!(normalize_comment(&text).is_ok());
    }

    #[rstest]
    #[case(None, 50)]
    #[case(Some(0), 50)]
    #[case(Some(-3), 50)]
    #[case(Some(1), 1)]
    #[case(Some(200), 200)]
    #[case(Some(201), 200)]
    #[case(Some(i64::MAX), 200)]
    fn test_clamp_comment_limit(#[case] requested: Option<i64>, #[case] expected: i64) {
        assert_eq!(clamp_comment_limit(requested), expected);
    }

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id("food", &id.to_string()).unwrap(), id);
        assert_eq!(
            parse_id("food", "not-an-id"),
            Err(ValidationError::InvalidId {
                what: "food",
                value: "not-an-id".to_string()
            })
        );
    }

    #[test]
    fn test_validate_food_name() {
        assert!(validate_food_name("Lasagna").is_ok());
        assert!(validate_food_name("   ").is_err());
        assert!(validate_food_name(&"x".repeat(201)).is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("Ana", "Petrovic"), "Ana Petrovic");
        assert_eq!(display_name("Ana", ""), "Ana");
        assert_eq!(display_name("", "  "), "Unknown");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_rating_range(rating in 1i32..=5) {
            prop_assert!(validate_rating(rating).is_ok());
        }

        #[test]
        fn prop_rating_above_max_rejected(rating in 6i32..10_000) {
            prop_assert!(validate_rating(rating).is_err());
        }

        #[test]
        fn prop_rating_below_min_rejected(rating in -10_000i32..1) {
            prop_assert!(validate_rating(rating).is_err());
        }

        #[test]
        fn prop_clamped_limit_in_bounds(limit in proptest::option::of(any::<i64>())) {
            let clamped = clamp_comment_limit(limit);
            prop_assert!(clamped > 0 && clamped <= MAX_COMMENT_LIMIT);
        }

        #[test]
        fn prop_normalized_comment_has_no_outer_whitespace(text in "\\PC{1,200}") {
            if let Ok(normalized) = normalize_comment(&text) {
                prop_assert_eq!(normalized.trim(), normalized.as_str());
                prop_assert!(!normalized.is_empty());
            }
        }
    }
}
