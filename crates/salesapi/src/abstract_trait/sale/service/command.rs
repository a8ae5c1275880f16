use crate::domain::{
    requests::sale::{CreateSaleRequest, UpdateSaleRequest},
    response::sale::SaleResponse,
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynSaleCommandService = Arc<dyn SaleCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait SaleCommandServiceTrait {
    async fn create_sale(&self, req: &CreateSaleRequest) -> Result<SaleResponse, ServiceError>;
    /// `id` comes from the path and must match the id carried in `req`.
    async fn update_sale(&self, id: i32, req: &UpdateSaleRequest) -> Result<(), ServiceError>;
    async fn delete_sale(&self, id: i32) -> Result<(), ServiceError>;
}
