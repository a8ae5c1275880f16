use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::product::ProductResponse,
    },
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, OperationTracker},
};

pub const PRODUCT_HAS_SALES: &str = "This product has existing sales and cannot be deleted.";

#[derive(Clone)]
pub struct ProductCommandService {
    command: DynProductCommandRepository,
    tracker: OperationTracker,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_command_service", registry);

        Self {
            command,
            tracker: OperationTracker::new("product-command-service", metrics),
        }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let tracing_ctx = self.tracker.start(
            "CreateProduct",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.name", req.product_name.clone()),
            ],
        );

        match self.command.create_product(req).await {
            Ok(product) => {
                self.tracker.success(&tracing_ctx, Method::Post, "Product created");
                Ok(ProductResponse::from(product))
            }
            Err(e) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Post,
                    &format!("Failed to create product: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<(), ServiceError> {
        let tracing_ctx = self.tracker.start(
            "UpdateProduct",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", i64::from(id)),
            ],
        );

        if id != req.product_id {
            self.tracker.failure(
                &tracing_ctx,
                Method::Put,
                &format!("Path id {id} does not match body id {}", req.product_id),
            );
            return Err(ServiceError::IdMismatch);
        }

        match self.command.update_product(req).await {
            Ok(_) => {
                self.tracker.success(&tracing_ctx, Method::Put, "Product updated");
                Ok(())
            }
            Err(RepositoryError::NotFound) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Put,
                    &format!("Product {id} not found"),
                );
                Err(ServiceError::NotFound)
            }
            Err(e) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Put,
                    &format!("Failed to update product {id}: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        let tracing_ctx = self.tracker.start(
            "DeleteProduct",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", i64::from(id)),
            ],
        );

        match self.command.delete_product(id).await {
            Ok(()) => {
                self.tracker.success(&tracing_ctx, Method::Delete, "Product deleted");
                Ok(())
            }
            Err(RepositoryError::NotFound) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Delete,
                    &format!("Product {id} not found"),
                );
                Err(ServiceError::NotFound)
            }
            Err(RepositoryError::Conflict(reason)) => {
                self.tracker.failure(&tracing_ctx, Method::Delete, &reason);
                Err(ServiceError::ReferentialIntegrity(
                    PRODUCT_HAS_SALES.to_string(),
                ))
            }
            Err(e) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Delete,
                    &format!("Failed to delete product {id}: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
