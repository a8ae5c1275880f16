use crate::{
    domain::requests::customer::{CreateCustomerRequest, UpdateCustomerRequest},
    model::customer::Customer as CustomerModel,
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCustomerCommandRepository = Arc<dyn CustomerCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CustomerCommandRepositoryTrait {
    async fn create_customer(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<CustomerModel, RepositoryError>;
    async fn update_customer(
        &self,
        req: &UpdateCustomerRequest,
    ) -> Result<CustomerModel, RepositoryError>;
    /// Fails with `Conflict` while any sale still references the customer.
    async fn delete_customer(&self, id: i32) -> Result<(), RepositoryError>;
}
