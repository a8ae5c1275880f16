use crate::{
    domain::requests::{pagination::PageRequest, sale::SaleSortBy},
    model::sale::SaleDetail,
};
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynSaleQueryRepository = Arc<dyn SaleQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SaleQueryRepositoryTrait {
    /// Returns one sorted page and the total row count.
    async fn find_all(
        &self,
        page: &PageRequest<SaleSortBy>,
    ) -> Result<(Vec<SaleDetail>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<SaleDetail>, RepositoryError>;

    /// `SUM(quantity * price)` over every sale, zero when there are none.
    async fn total_revenue(&self) -> Result<Decimal, RepositoryError>;
}
