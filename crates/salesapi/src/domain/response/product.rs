use crate::model::product::Product as ProductModel;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    #[serde(rename = "productID")]
    pub product_id: i32,
    #[serde(rename = "productName")]
    pub product_name: String,
    #[schema(value_type = f64, example = 10.0)]
    pub price: Decimal,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            product_id: value.product_id,
            product_name: value.product_name,
            price: value.price,
        }
    }
}
