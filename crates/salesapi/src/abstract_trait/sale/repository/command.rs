use crate::{
    domain::requests::sale::{CreateSaleRequest, UpdateSaleRequest},
    model::sale::SaleDetail,
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynSaleCommandRepository = Arc<dyn SaleCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SaleCommandRepositoryTrait {
    async fn create_sale(&self, req: &CreateSaleRequest) -> Result<SaleDetail, RepositoryError>;
    async fn update_sale(&self, req: &UpdateSaleRequest) -> Result<SaleDetail, RepositoryError>;
    async fn delete_sale(&self, id: i32) -> Result<(), RepositoryError>;
}
