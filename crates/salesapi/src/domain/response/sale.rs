use crate::model::sale::SaleDetail;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const UNKNOWN_CUSTOMER: &str = "Unknown Customer";
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// A sale joined with its customer and product for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SaleResponse {
    #[serde(rename = "saleID")]
    pub sale_id: i32,
    #[serde(rename = "saleDate")]
    pub sale_date: DateTime<Utc>,
    pub quantity: i32,
    #[serde(rename = "customerID")]
    pub customer_id: i32,
    #[serde(rename = "productID")]
    pub product_id: i32,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    #[serde(rename = "productName")]
    pub product_name: String,
    /// Unit price of the product.
    #[schema(value_type = f64, example = 10.0)]
    pub price: Decimal,
    /// `quantity * price`, never stored.
    #[schema(value_type = f64, example = 30.0)]
    pub total: Decimal,
}

impl From<SaleDetail> for SaleResponse {
    fn from(value: SaleDetail) -> Self {
        let price = value.price.unwrap_or(Decimal::ZERO);

        SaleResponse {
            sale_id: value.sale_id,
            sale_date: value.sale_date,
            quantity: value.quantity,
            customer_id: value.customer_id,
            product_id: value.product_id,
            customer_name: value
                .customer_name
                .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string()),
            product_name: value
                .product_name
                .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string()),
            price,
            total: Decimal::from(value.quantity) * price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn detail() -> SaleDetail {
        SaleDetail {
            sale_id: 1,
            sale_date: Utc::now(),
            quantity: 3,
            customer_id: 5,
            product_id: 2,
            customer_name: Some("Ada Lovelace".into()),
            product_name: Some("Widget".into()),
            price: Some(dec!(10.00)),
        }
    }

    #[test]
    fn total_is_quantity_times_price() {
        let sale = SaleResponse::from(detail());
        assert_eq!(sale.total, dec!(30.00));
        assert_eq!(sale.customer_name, "Ada Lovelace");
        assert_eq!(sale.product_name, "Widget");
    }

    #[test]
    fn missing_references_fall_back() {
        let sale = SaleResponse::from(SaleDetail {
            customer_name: None,
            product_name: None,
            price: None,
            ..detail()
        });

        assert_eq!(sale.customer_name, UNKNOWN_CUSTOMER);
        assert_eq!(sale.product_name, UNKNOWN_PRODUCT);
        assert_eq!(sale.price, Decimal::ZERO);
        assert_eq!(sale.total, Decimal::ZERO);
    }

    #[test]
    fn wire_field_names() {
        let json = serde_json::to_value(SaleResponse::from(detail())).unwrap();
        for key in [
            "saleID",
            "saleDate",
            "quantity",
            "customerID",
            "productID",
            "customerName",
            "productName",
            "price",
            "total",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["total"], 30.0);
    }
}
