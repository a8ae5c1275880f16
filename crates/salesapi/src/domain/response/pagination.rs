use crate::domain::requests::pagination::PageRequest;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of a list endpoint plus the counts the dashboard pages with.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub page_number: i32,
    pub page_size: i32,
    pub total_count: i64,
    pub total_pages: i64,
    /// Sum of `quantity * price` over every sale, independent of the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub total_revenue: Option<Decimal>,
}

impl<T> PagedResponse<T> {
    pub fn new<S>(data: Vec<T>, page: &PageRequest<S>, total_count: i64) -> Self {
        Self {
            data,
            page_number: page.page_number,
            page_size: page.page_size,
            total_count,
            total_pages: page.total_pages(total_count),
            total_revenue: None,
        }
    }

    pub fn with_revenue(mut self, total_revenue: Decimal) -> Self {
        self.total_revenue = Some(total_revenue);
        self
    }
}
