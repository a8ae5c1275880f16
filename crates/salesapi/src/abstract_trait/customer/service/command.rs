use crate::domain::{
    requests::customer::{CreateCustomerRequest, UpdateCustomerRequest},
    response::customer::CustomerResponse,
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCustomerCommandService = Arc<dyn CustomerCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CustomerCommandServiceTrait {
    async fn create_customer(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<CustomerResponse, ServiceError>;
    /// `id` comes from the path and must match the id carried in `req`.
    async fn update_customer(
        &self,
        id: i32,
        req: &UpdateCustomerRequest,
    ) -> Result<(), ServiceError>;
    async fn delete_customer(&self, id: i32) -> Result<(), ServiceError>;
}
