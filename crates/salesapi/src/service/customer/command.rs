use crate::{
    abstract_trait::customer::{
        repository::DynCustomerCommandRepository, service::CustomerCommandServiceTrait,
    },
    domain::{
        requests::customer::{CreateCustomerRequest, UpdateCustomerRequest},
        response::customer::CustomerResponse,
    },
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, OperationTracker},
};

pub const CUSTOMER_HAS_SALES: &str = "This customer has existing sales and cannot be deleted.";

#[derive(Clone)]
pub struct CustomerCommandService {
    command: DynCustomerCommandRepository,
    tracker: OperationTracker,
}

impl CustomerCommandService {
    pub fn new(command: DynCustomerCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("customer_command_service", registry);

        Self {
            command,
            tracker: OperationTracker::new("customer-command-service", metrics),
        }
    }
}

#[async_trait]
impl CustomerCommandServiceTrait for CustomerCommandService {
    async fn create_customer(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<CustomerResponse, ServiceError> {
        let tracing_ctx = self
            .tracker
            .start("CreateCustomer", vec![KeyValue::new("component", "customer")]);

        match self.command.create_customer(req).await {
            Ok(customer) => {
                self.tracker.success(&tracing_ctx, Method::Post, "Customer created");
                Ok(CustomerResponse::from(customer))
            }
            Err(e) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Post,
                    &format!("Failed to create customer: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn update_customer(
        &self,
        id: i32,
        req: &UpdateCustomerRequest,
    ) -> Result<(), ServiceError> {
        let tracing_ctx = self.tracker.start(
            "UpdateCustomer",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("customer.id", i64::from(id)),
            ],
        );

        if id != req.customer_id {
            self.tracker.failure(
                &tracing_ctx,
                Method::Put,
                &format!("Path id {id} does not match body id {}", req.customer_id),
            );
            return Err(ServiceError::IdMismatch);
        }

        match self.command.update_customer(req).await {
            Ok(_) => {
                self.tracker.success(&tracing_ctx, Method::Put, "Customer updated");
                Ok(())
            }
            Err(RepositoryError::NotFound) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Put,
                    &format!("Customer {id} not found"),
                );
                Err(ServiceError::NotFound)
            }
            Err(e) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Put,
                    &format!("Failed to update customer {id}: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn delete_customer(&self, id: i32) -> Result<(), ServiceError> {
        let tracing_ctx = self.tracker.start(
            "DeleteCustomer",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("customer.id", i64::from(id)),
            ],
        );

        match self.command.delete_customer(id).await {
            Ok(()) => {
                self.tracker.success(&tracing_ctx, Method::Delete, "Customer deleted");
                Ok(())
            }
            Err(RepositoryError::NotFound) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Delete,
                    &format!("Customer {id} not found"),
                );
                Err(ServiceError::NotFound)
            }
            Err(RepositoryError::Conflict(reason)) => {
                self.tracker.failure(&tracing_ctx, Method::Delete, &reason);
                Err(ServiceError::ReferentialIntegrity(
                    CUSTOMER_HAS_SALES.to_string(),
                ))
            }
            Err(e) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Delete,
                    &format!("Failed to delete customer {id}: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
