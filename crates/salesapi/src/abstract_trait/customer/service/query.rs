use crate::domain::{
    requests::pagination::FindAllQuery,
    response::{pagination::PagedResponse, customer::CustomerResponse},
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCustomerQueryService = Arc<dyn CustomerQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CustomerQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<PagedResponse<CustomerResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<CustomerResponse, ServiceError>;
}
