use crate::{
    domain::requests::{pagination::PageRequest, customer::CustomerSortBy},
    model::customer::Customer as CustomerModel,
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCustomerQueryRepository = Arc<dyn CustomerQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CustomerQueryRepositoryTrait {
    /// Returns one sorted page and the total row count.
    async fn find_all(
        &self,
        page: &PageRequest<CustomerSortBy>,
    ) -> Result<(Vec<CustomerModel>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<CustomerModel>, RepositoryError>;
}
