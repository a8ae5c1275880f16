use crate::model::customer::Customer as CustomerModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerResponse {
    #[serde(rename = "customerID")]
    pub customer_id: i32,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
}

impl From<CustomerModel> for CustomerResponse {
    fn from(value: CustomerModel) -> Self {
        CustomerResponse {
            customer_id: value.customer_id,
            full_name: value.full_name,
            email: value.email,
        }
    }
}
