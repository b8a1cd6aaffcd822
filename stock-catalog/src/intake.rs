use serde::{Deserialize, Serialize};
use std::fmt;
use crate::product::Product;

/// Fields of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Category,
    Price,
    Quantity,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormField::Name => "name",
            FormField::Category => "category",
            FormField::Price => "price",
            FormField::Quantity => "quantity",
        };
        f.write_str(label)
    }
}

/// Reasons raw form input is rejected before it reaches the inventory
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("All fields are required: {0} is missing")]
    MissingField(FormField),

    #[error("All fields are required: {0} is not a valid number")]
    InvalidNumber(FormField),

    #[error("Price cannot be less than 0 (got {0})")]
    NegativePrice(f64),

    #[error("Quantity must be at least 1 (got {0})")]
    QuantityBelowMinimum(i32),
}

/// Raw text collected by the registration screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
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

    /// Validate the form and build a [`Product`].
    ///
    /// Presence and parse failures are reported before range failures, so
    /// a form with an empty name and a negative price reports the name.
    pub fn parse(&self) -> Result<Product, IntakeError> {
        require(&self.name, FormField::Name)?;
        require(&self.category, FormField::Category)?;
        let price = parse_price(&self.price)?;
        let quantity = parse_quantity(&self.quantity)?;

        if price < 0.0 {
            return Err(IntakeError::NegativePrice(price));
        }
        if quantity < 1 {
            return Err(IntakeError::QuantityBelowMinimum(quantity));
        }

        // quantity >= 1 here, so the conversion cannot lose the sign
        let quantity = quantity.unsigned_abs();

        Ok(Product::new(self.name.clone(), self.category.clone(), price, quantity))
    }
}

fn require(value: &str, field: FormField) -> Result<(), IntakeError> {
    if value.is_empty() {
        Err(IntakeError::MissingField(field))
    } else {
        Ok(())
    }
}

fn parse_price(raw: &str) -> Result<f64, IntakeError> {
    let raw = raw.trim();
    require(raw, FormField::Price)?;
    match raw.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(IntakeError::InvalidNumber(FormField::Price)),
    }
}

fn parse_quantity(raw: &str) -> Result<i32, IntakeError> {
    let raw = raw.trim();
    require(raw, FormField::Quantity)?;
    raw.parse::<i32>()
        .map_err(|_| IntakeError::InvalidNumber(FormField::Quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        let product = ProductForm::new("Widget", "Tools", "9.99", "3").parse().unwrap();
        assert_eq!(product, Product::new("Widget", "Tools", 9.99, 3));
    }

    #[test]
    fn test_zero_price_accepted() {
        let product = ProductForm::new("Sample", "Freebies", "0", "1").parse().unwrap();
        assert_eq!(product.price, 0.0);
        assert_eq!(product.quantity, 1);
    }

    #[test]
    fn test_numeric_fields_are_trimmed() {
        let product = ProductForm::new("Widget", "Tools", " 2.50 ", "\t4\n").parse().unwrap();
        assert_eq!(product.price, 2.5);
        assert_eq!(product.quantity, 4);
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            ProductForm::new("", "Tools", "1", "1").parse(),
            Err(IntakeError::MissingField(FormField::Name))
        );
        assert_eq!(
            ProductForm::new("Widget", "", "1", "1").parse(),
            Err(IntakeError::MissingField(FormField::Category))
        );
        assert_eq!(
            ProductForm::new("Widget", "Tools", "  ", "1").parse(),
            Err(IntakeError::MissingField(FormField::Price))
        );
        assert_eq!(
            ProductForm::new("Widget", "Tools", "1", "").parse(),
            Err(IntakeError::MissingField(FormField::Quantity))
        );
    }

    #[test]
    fn test_unparseable_numbers() {
        assert_eq!(
            ProductForm::new("Widget", "Tools", "abc", "1").parse(),
            Err(IntakeError::InvalidNumber(FormField::Price))
        );
        assert_eq!(
            ProductForm::new("Widget", "Tools", "NaN", "1").parse(),
            Err(IntakeError::InvalidNumber(FormField::Price))
        );
        assert_eq!(
            ProductForm::new("Widget", "Tools", "1", "2.5").parse(),
            Err(IntakeError::InvalidNumber(FormField::Quantity))
        );
        assert_eq!(
            ProductForm::new("Widget", "Tools", "1", "99999999999").parse(),
            Err(IntakeError::InvalidNumber(FormField::Quantity))
        );
    }

    #[test]
    fn test_range_checks() {
        assert_eq!(
            ProductForm::new("Widget", "Tools", "-0.01", "1").parse(),
            Err(IntakeError::NegativePrice(-0.01))
        );
        assert_eq!(
            ProductForm::new("Widget", "Tools", "1", "0").parse(),
            Err(IntakeError::QuantityBelowMinimum(0))
        );
        assert_eq!(
            ProductForm::new("Widget", "Tools", "1", "-3").parse(),
            Err(IntakeError::QuantityBelowMinimum(-3))
        );
    }

    #[test]
    fn test_presence_reported_before_range() {
        assert_eq!(
            ProductForm::new("", "Tools", "-5", "0").parse(),
            Err(IntakeError::MissingField(FormField::Name))
        );
        assert_eq!(
            ProductForm::new("Widget", "Tools", "-5", "x").parse(),
            Err(IntakeError::InvalidNumber(FormField::Quantity))
        );
        // Price is checked before quantity
        assert_eq!(
            ProductForm::new("Widget", "Tools", "-5", "0").parse(),
            Err(IntakeError::NegativePrice(-5.0))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            IntakeError::MissingField(FormField::Category).to_string(),
            "All fields are required: category is missing"
        );
        assert_eq!(
            IntakeError::QuantityBelowMinimum(0).to_string(),
            "Quantity must be at least 1 (got 0)"
        );
    }
}
