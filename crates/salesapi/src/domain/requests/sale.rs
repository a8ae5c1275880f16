use crate::domain::requests::pagination::SortKey;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaleSortBy {
    SaleId,
    #[default]
    SaleDate,
    CustomerName,
    ProductName,
    Quantity,
    TotalPrice,
}

impl SortKey for SaleSortBy {
    fn from_param(param: &str) -> Option<Self> {
        match param {
            "SaleID" => Some(Self::SaleId),
            "SaleDate" => Some(Self::SaleDate),
            "CustomerName" => Some(Self::CustomerName),
            "ProductName" => Some(Self::ProductName),
            "Quantity" => Some(Self::Quantity),
            "TotalPrice" => Some(Self::TotalPrice),
            _ => None,
        }
    }

    fn as_param(&self) -> &'static str {
        match self {
            Self::SaleId => "SaleID",
            Self::SaleDate => "SaleDate",
            Self::CustomerName => "CustomerName",
            Self::ProductName => "ProductName",
            Self::Quantity => "Quantity",
            Self::TotalPrice => "TotalPrice",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSaleRequest {
    #[serde(rename = "productID")]
    #[validate(range(min = 1, message = "A product must be selected"))]
    #[schema(example = 2)]
    pub product_id: i32,

    #[serde(rename = "customerID")]
    #[validate(range(min = 1, message = "A customer must be selected"))]
    #[schema(example = 5)]
    pub customer_id: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 3)]
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSaleRequest {
    #[serde(rename = "saleID", default)]
    #[schema(example = 1)]
    pub sale_id: i32,

    #[serde(rename = "productID")]
    #[validate(range(min = 1, message = "A product must be selected"))]
    #[schema(example = 2)]
    pub product_id: i32,

    #[serde(rename = "customerID")]
    #[validate(range(min = 1, message = "A customer must be selected"))]
    #[schema(example = 5)]
    pub customer_id: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 3)]
    pub quantity: i32,
}
