use crate::domain::requests::pagination::SortKey;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CustomerSortBy {
    #[default]
    CustomerId,
    FullName,
    Email,
}

impl SortKey for CustomerSortBy {
    fn from_param(param: &str) -> Option<Self> {
        match param {
            "CustomerID" => Some(Self::CustomerId),
            "FullName" => Some(Self::FullName),
            "Email" => Some(Self::Email),
            _ => None,
        }
    }

    fn as_param(&self) -> &'static str {
        match self {
            Self::CustomerId => "CustomerID",
            Self::FullName => "FullName",
            Self::Email => "Email",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCustomerRequest {
    #[serde(rename = "fullName")]
    #[validate(length(min = 1, max = 200, message = "Full name is required"))]
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,

    #[validate(email(message = "Email must be a valid address"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomerRequest {
    #[serde(rename = "customerID", default)]
    #[schema(example = 1)]
    pub customer_id: i32,

    #[serde(rename = "fullName")]
    #[validate(length(min = 1, max = 200, message = "Full name is required"))]
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,

    #[validate(email(message = "Email must be a valid address"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_params_are_exact() {
        assert_eq!(
            CustomerSortBy::from_param("FullName"),
            Some(CustomerSortBy::FullName)
        );
        assert_eq!(CustomerSortBy::from_param("Email"), Some(CustomerSortBy::Email));
        assert_eq!(CustomerSortBy::from_param("fullName"), None);
        assert_eq!(CustomerSortBy::default().as_param(), "CustomerID");
    }

    #[test]
    fn bad_email_is_rejected() {
        let req = CreateCustomerRequest {
            full_name: "Grace Hopper".into(),
            email: "not-an-email".into(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn wire_names_match_the_dashboard() {
        let req: UpdateCustomerRequest = serde_json::from_str(
            r#"{"customerID": 7, "fullName": "Grace Hopper", "email": "grace@example.com"}"#,
        )
        .unwrap();
        assert_eq!(req.customer_id, 7);
        assert_eq!(req.full_name, "Grace Hopper");
        assert!(req.validate().is_ok());
    }
}
