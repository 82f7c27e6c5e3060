//! # Registration Validation
//!
//! Gates entry into the inventory store. Raw form text goes in, a
//! [`Product`] or a [`ValidationError`] comes out.
//!
//! ```text
//! ProductForm ──► blank check ──► parse (bad text → 0) ──► positivity ──► Product
//!                     │                                         │
//!                     ▼                                         ▼
//!               MissingField                             NonPositiveValue
//!                                                               │
//!                                              line value cap ──┴──► ValueTooLarge
//! ```
//!
//! Unparseable numbers are not a separate error. They are coerced to zero
//! and then rejected by the positivity rule, so `"abc"` as a price reports
//! `NonPositiveValue`.
//!
//! A line's value (`price × quantity`) is capped at [`MAX_LINE_VALUE`], which
//! keeps `InventoryStore::total_value` finite for any number of products.

use std::fmt;

use crate::core::product::Product;

/// Largest accepted `unit_price × quantity` for a single product.
pub const MAX_LINE_VALUE: f64 = 1e12;

/// The four registration form fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Category,
    Price,
    Quantity,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Category,
        FormField::Price,
        FormField::Quantity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Product name",
            FormField::Category => "Category",
            FormField::Price => "Price",
            FormField::Quantity => "Quantity",
        }
    }
}

/// Raw, unvalidated registration input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
}

impl ProductForm {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Category => &self.category,
            FormField::Price => &self.price,
            FormField::Quantity => &self.quantity,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Category => &mut self.category,
            FormField::Price => &mut self.price,
            FormField::Quantity => &mut self.quantity,
        }
    }
}

/// Why a registration was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A field was empty or whitespace only.
    MissingField { field: FormField },
    /// Price or quantity parsed to a value ≤ 0 (unparseable text counts as 0).
    NonPositiveValue { field: FormField },
    /// `price × quantity` exceeds [`MAX_LINE_VALUE`].
    ValueTooLarge { field: FormField },
}

impl ValidationError {
    /// The field that caused the rejection.
    pub fn field(&self) -> FormField {
        match self {
            ValidationError::MissingField { field } => *field,
            ValidationError::NonPositiveValue { field } => *field,
            ValidationError::ValueTooLarge { field } => *field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField { field } => {
                write!(f, "All fields are required (missing: {})", field.label())
            }
            ValidationError::NonPositiveValue { field } => {
                write!(
                    f,
                    "Quantity and price must be greater than 0 ({})",
                    field.label()
                )
            }
            ValidationError::ValueTooLarge { field } => {
                write!(
                    f,
                    "Price times quantity must not exceed {MAX_LINE_VALUE} ({})",
                    field.label()
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate raw form input and build a [`Product`].
///
/// Name and category are stored trimmed. Has no side effects either way.
pub fn validate(form: &ProductForm) -> ValidationResult<Product> {
    if let Some(field) = FormField::ALL
        .into_iter()
        .find(|&f| form.field(f).trim().is_empty())
    {
        return Err(ValidationError::MissingField { field });
    }

    let unit_price = parse_price(&form.price);
    let quantity = parse_quantity(&form.quantity);

    if unit_price <= 0.0 {
        return Err(ValidationError::NonPositiveValue {
            field: FormField::Price,
        });
    }
    if quantity == 0 {
        return Err(ValidationError::NonPositiveValue {
            field: FormField::Quantity,
        });
    }
    if unit_price * f64::from(quantity) > MAX_LINE_VALUE {
        return Err(ValidationError::ValueTooLarge {
            field: FormField::Price,
        });
    }

    Ok(Product::new(
        form.name.trim().to_string(),
        form.category.trim().to_string(),
        unit_price,
        quantity,
    ))
}

/// Parse a price, coercing unparseable or non-finite text to 0.
fn parse_price(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .unwrap_or(0.0)
}

/// Parse a quantity, coercing unparseable text (including negatives) to 0.
fn parse_quantity(text: &str) -> u32 {
    text.trim().parse::<u32>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str, category: &str, price: &str, quantity: &str) -> ValidationResult<Product> {
        validate(&ProductForm::new(name, category, price, quantity))
    }

    #[test]
    fn test_valid_input_builds_product() {
        let product = check("Hammer", "Tools", "9.99", "3").unwrap();
        assert_eq!(product.name, "Hammer");
        assert_eq!(product.category, "Tools");
        assert_eq!(product.unit_price, 9.99);
        assert_eq!(product.quantity, 3);
    }

    #[test]
    fn test_empty_name_is_missing_field() {
        assert_eq!(
            check("", "Tools", "10", "5"),
            Err(ValidationError::MissingField {
                field: FormField::Name
            })
        );
    }

    #[test]
    fn test_blank_fields_are_missing() {
        assert_eq!(
            check("Hammer", "   ", "10", "5").unwrap_err().field(),
            FormField::Category
        );
        assert_eq!(
            check("Hammer", "Tools", "\t", "5").unwrap_err().field(),
            FormField::Price
        );
        assert_eq!(
            check("Hammer", "Tools", "10", "").unwrap_err().field(),
            FormField::Quantity
        );
    }

    #[test]
    fn test_first_missing_field_is_reported() {
        assert_eq!(
            check("", "", "", ""),
            Err(ValidationError::MissingField {
                field: FormField::Name
            })
        );
    }

    #[test]
    fn test_missing_field_wins_over_non_positive() {
        assert!(matches!(
            check("Hammer", "", "0", "0"),
            Err(ValidationError::MissingField { .. })
        ));
    }

    #[test]
    fn test_zero_price_is_non_positive() {
        assert_eq!(
            check("Hammer", "Tools", "0", "5"),
            Err(ValidationError::NonPositiveValue {
                field: FormField::Price
            })
        );
    }

    #[test]
    fn test_negative_quantity_is_non_positive() {
        assert_eq!(
            check("Hammer", "Tools", "10", "-1"),
            Err(ValidationError::NonPositiveValue {
                field: FormField::Quantity
            })
        );
    }

    #[test]
    fn test_negative_price_is_non_positive() {
        assert!(matches!(
            check("Hammer", "Tools", "-2.5", "1"),
            Err(ValidationError::NonPositiveValue {
                field: FormField::Price
            })
        ));
    }

    #[test]
    fn test_unparseable_numbers_coerce_to_zero() {
        assert_eq!(
            check("Hammer", "Tools", "ten", "5").unwrap_err(),
            ValidationError::NonPositiveValue {
                field: FormField::Price
            }
        );
        assert_eq!(
            check("Hammer", "Tools", "10", "3.5").unwrap_err(),
            ValidationError::NonPositiveValue {
                field: FormField::Quantity
            }
        );
    }

    #[test]
    fn test_non_finite_price_is_rejected() {
        for price in ["NaN", "inf", "-inf"] {
            assert_eq!(
                check("Hammer", "Tools", price, "1").unwrap_err().field(),
                FormField::Price,
                "price {price:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_line_value_above_cap_is_too_large() {
        assert_eq!(
            check("Big", "X", "1e308", "10"),
            Err(ValidationError::ValueTooLarge {
                field: FormField::Price
            })
        );
        assert_eq!(
            check("Big", "X", "1000001", "1000000"),
            Err(ValidationError::ValueTooLarge {
                field: FormField::Price
            })
        );

        // Exactly at the cap is fine
        let product = check("Big", "X", "1000000", "1000000").unwrap();
        assert_eq!(product.line_value(), MAX_LINE_VALUE);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let product = check("  Hammer ", " Tools", " 4.5 ", " 2 ").unwrap();
        assert_eq!(product.name, "Hammer");
        assert_eq!(product.category, "Tools");
        assert_eq!(product.unit_price, 4.5);
        assert_eq!(product.quantity, 2);
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let missing = ValidationError::MissingField {
            field: FormField::Category,
        };
        assert_eq!(
            missing.to_string(),
            "All fields are required (missing: Category)"
        );

        let non_positive = ValidationError::NonPositiveValue {
            field: FormField::Quantity,
        };
        assert!(non_positive.to_string().contains("greater than 0"));
        assert!(non_positive.to_string().contains("Quantity"));

        let too_large = ValidationError::ValueTooLarge {
            field: FormField::Price,
        };
        assert_eq!(
            too_large.to_string(),
            "Price times quantity must not exceed 1000000000000 (Price)"
        );
    }
}
