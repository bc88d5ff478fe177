//! # Validation Rules
//!
//! Pure checks applied by the item store before any mutation commits. Nothing here has
//! side effects; collaborators never call these directly, the store hooks do.
//!
//! ```rust
//! use shopping_list::validation::{validate_name, validate_quantity};
//!
//! assert_eq!(validate_name("  Milk ").unwrap(), "Milk");
//! assert!(validate_name("   ").is_err());
//! assert!(validate_quantity(0).is_err());
//! ```

use thiserror::Error;

/// Input validation failures. The `Display` text is shown to the user.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Item name cannot be empty")]
    EmptyName,

    #[error("Quantity must be greater than 0")]
    InvalidQuantity(i64),
}

/// True iff the name has at least one non-whitespace character.
pub fn is_valid_name(text: &str) -> bool {
    !text.trim().is_empty()
}

/// True iff the quantity is strictly positive.
///
/// Integer-ness is carried by the type; fractional input never reaches the store.
pub fn is_valid_quantity(quantity: i64) -> bool {
    quantity > 0
}

/// Returns the trimmed name.
pub fn validate_name(text: &str) -> Result<String, ValidationError> {
    if !is_valid_name(text) {
        return Err(ValidationError::EmptyName);
    }
    Ok(text.trim().to_string())
}

pub fn validate_quantity(quantity: i64) -> Result<i64, ValidationError> {
    if !is_valid_quantity(quantity) {
        return Err(ValidationError::InvalidQuantity(quantity));
    }
    Ok(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert!(is_valid_name("Eggs"));
        assert!(is_valid_name("  x  "));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name(" \t\n "));
        assert_eq!(validate_name("\tBread \n"), Ok("Bread".to_string()));
        assert_eq!(validate_name("  "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_quantities() {
        assert!(is_valid_quantity(1));
        assert!(is_valid_quantity(i64::MAX));
        assert!(!is_valid_quantity(0));
        assert!(!is_valid_quantity(-3));
        assert_eq!(validate_quantity(12), Ok(12));
        assert_eq!(
            validate_quantity(-3),
            Err(ValidationError::InvalidQuantity(-3))
        );
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Item name cannot be empty");
        assert_eq!(
            ValidationError::InvalidQuantity(0).to_string(),
            "Quantity must be greater than 0"
        );
    }
}
