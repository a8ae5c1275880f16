use crate::domain::requests::pagination::SortKey;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSortBy {
    #[default]
    ProductId,
    ProductName,
    Price,
}

impl SortKey for ProductSortBy {
    fn from_param(param: &str) -> Option<Self> {
        match param {
            "ProductID" => Some(Self::ProductId),
            "ProductName" => Some(Self::ProductName),
            "Price" => Some(Self::Price),
            _ => None,
        }
    }

    fn as_param(&self) -> &'static str {
        match self {
            Self::ProductId => "ProductID",
            Self::ProductName => "ProductName",
            Self::Price => "Price",
        }
    }
}

/// Exclusive upper bound of a `NUMERIC(18, 2)` price.
fn max_price() -> Decimal {
    Decimal::from(10_000_000_000_000_000_i64)
}

pub(crate) fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        return Err(ValidationError::new("range").with_message("Price cannot be negative".into()));
    }
    // Stored with two decimals, so round before comparing.
    if price.round_dp(2) >= max_price() {
        return Err(ValidationError::new("range").with_message("Price is too large".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[serde(rename = "productName")]
    #[validate(length(min = 1, max = 200, message = "Product name is required"))]
    #[schema(example = "Wireless Mouse")]
    pub product_name: String,

    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = f64, example = 24.99)]
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(rename = "productID", default)]
    #[schema(example = 1)]
    pub product_id: i32,

    #[serde(rename = "productName")]
    #[validate(length(min = 1, max = 200, message = "Product name is required"))]
    #[schema(example = "Wireless Mouse")]
    pub product_name: String,

    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = f64, example = 24.99)]
    pub price: Decimal,
}
