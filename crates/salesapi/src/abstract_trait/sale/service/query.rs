use crate::domain::{
    requests::pagination::FindAllQuery,
    response::{pagination::PagedResponse, sale::SaleResponse},
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynSaleQueryService = Arc<dyn SaleQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait SaleQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<PagedResponse<SaleResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<SaleResponse, ServiceError>;
}
