//! Product Validation

use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::domain::{
    products::{data::NewProduct, labels::Label},
    validation::ValidationErrors,
};

pub const NAME_MAX_CHARS: usize = 200;

pub const NAME_REQUIRED: &str = "The product name cannot be null";
pub const NAME_BLANK: &str = "The product name cannot be blank";
pub const NAME_TOO_LONG: &str = "The product name cannot exceed 200 characters";
pub const PRICE_REQUIRED: &str = "The product price cannot be null";
pub const PRICE_NEGATIVE: &str = "The product price cannot be negative";
pub const LABELS_REQUIRED: &str = "The product labels cannot be null";
pub const LABELS_RESTRICTED: &str = "Restricted set of labels: [drink, food, clothes, limited]";

/// Product input that passed validation and can be persisted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProduct {
    pub name: String,
    pub price: Decimal,
    pub labels: SmallVec<[Label; 4]>,
}

/// Check every field of `product`, collecting one message per failing field.
///
/// # Errors
///
/// Returns the field to message map when any field is missing or invalid.
pub fn validate_product(product: NewProduct) -> Result<ValidProduct, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = match product.name {
        None => {
            errors.add("name", NAME_REQUIRED);
            None
        }
        Some(name) if name.trim().is_empty() => {
            errors.add("name", NAME_BLANK);
            None
        }
        Some(name) if name.chars().count() > NAME_MAX_CHARS => {
            errors.add("name", NAME_TOO_LONG);
            None
        }
        Some(name) => Some(name),
    };

    let price = match product.price {
        None => {
            errors.add("price", PRICE_REQUIRED);
            None
        }
        Some(price) if price.is_sign_negative() && !price.is_zero() => {
            errors.add("price", PRICE_NEGATIVE);
            None
        }
        Some(price) => Some(price),
    };

    let labels = match product.labels {
        None => {
            errors.add("labels", LABELS_REQUIRED);
            None
        }
        Some(raw) => {
            let mut labels: SmallVec<[Label; 4]> = SmallVec::new();

            for value in &raw {
                match value.parse::<Label>() {
                    Ok(label) if !labels.contains(&label) => labels.push(label),
                    Ok(_) => {}
                    Err(_) => errors.add("labels", LABELS_RESTRICTED),
                }
            }

            Some(labels)
        }
    };

    match (name, price, labels) {
        (Some(name), Some(price), Some(labels)) if errors.is_empty() => Ok(ValidProduct {
            name,
            price,
            labels,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn valid_input() -> NewProduct {
        NewProduct {
            name: Some("Lemonade".to_string()),
            price: Some(Decimal::new(250, 2)),
            labels: Some(vec!["drink".to_string(), "limited".to_string()]),
        }
    }

    #[test]
    fn accepts_valid_product() -> TestResult {
        let product = validate_product(valid_input())?;

        assert_eq!(product.name, "Lemonade");
        assert_eq!(product.price, Decimal::new(250, 2));
        assert_eq!(product.labels.as_slice(), &[Label::Drink, Label::Limited]);

        Ok(())
    }

    #[test]
    fn accepts_empty_label_list_and_zero_price() -> TestResult {
        let product = validate_product(NewProduct {
            price: Some(Decimal::ZERO),
            labels: Some(Vec::new()),
            ..valid_input()
        })?;

        assert!(product.labels.is_empty());
        assert_eq!(product.price, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn duplicate_labels_collapse() -> TestResult {
        let product = validate_product(NewProduct {
            labels: Some(vec![
                "food".to_string(),
                "food".to_string(),
                "drink".to_string(),
            ]),
            ..valid_input()
        })?;

        assert_eq!(product.labels.as_slice(), &[Label::Food, Label::Drink]);

        Ok(())
    }

    #[test]
    fn reports_every_missing_field() {
        let Err(errors) = validate_product(NewProduct::default()) else {
            panic!("expected validation failure");
        };

        assert_eq!(errors.get("name"), Some(NAME_REQUIRED));
        assert_eq!(errors.get("price"), Some(PRICE_REQUIRED));
        assert_eq!(errors.get("labels"), Some(LABELS_REQUIRED));
    }

    #[test]
    fn rejects_long_name() {
        let result = validate_product(NewProduct {
            name: Some("x".repeat(NAME_MAX_CHARS + 1)),
            ..valid_input()
        });

        assert_eq!(
            result.err().and_then(|e| e.get("name").map(str::to_string)),
            Some(NAME_TOO_LONG.to_string())
        );
    }

    #[test]
    fn name_limit_counts_characters_not_bytes() {
        let result = validate_product(NewProduct {
            name: Some("é".repeat(NAME_MAX_CHARS)),
            ..valid_input()
        });

        assert!(result.is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        let result = validate_product(NewProduct {
            name: Some("   ".to_string()),
            ..valid_input()
        });

        assert_eq!(
            result.err().and_then(|e| e.get("name").map(str::to_string)),
            Some(NAME_BLANK.to_string())
        );
    }

    #[test]
    fn rejects_negative_price() {
        let result = validate_product(NewProduct {
            price: Some(Decimal::new(-1, 2)),
            ..valid_input()
        });

        assert_eq!(
            result.err().and_then(|e| e.get("price").map(str::to_string)),
            Some(PRICE_NEGATIVE.to_string())
        );
    }

    #[test]
    fn rejects_unknown_label() {
        let result = validate_product(NewProduct {
            labels: Some(vec!["drink".to_string(), "toys".to_string()]),
            ..valid_input()
        });

        assert_eq!(
            result.err().and_then(|e| e.get("labels").map(str::to_string)),
            Some(LABELS_RESTRICTED.to_string())
        );
    }
}
