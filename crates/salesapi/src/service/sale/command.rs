use crate::{
    abstract_trait::sale::{
        repository::DynSaleCommandRepository, service::SaleCommandServiceTrait,
    },
    domain::{
        requests::sale::{CreateSaleRequest, UpdateSaleRequest},
        response::sale::SaleResponse,
    },
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, OperationTracker},
};

#[derive(Clone)]
pub struct SaleCommandService {
    command: DynSaleCommandRepository,
    tracker: OperationTracker,
}

impl SaleCommandService {
    pub fn new(command: DynSaleCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("sale_command_service", registry);

        Self {
            command,
            tracker: OperationTracker::new("sale-command-service", metrics),
        }
    }
}

#[async_trait]
impl SaleCommandServiceTrait for SaleCommandService {
    async fn create_sale(&self, req: &CreateSaleRequest) -> Result<SaleResponse, ServiceError> {
        let tracing_ctx = self.tracker.start(
            "CreateSale",
            vec![
                KeyValue::new("component", "sale"),
                KeyValue::new("customer.id", i64::from(req.customer_id)),
                KeyValue::new("product.id", i64::from(req.product_id)),
                KeyValue::new("sale.quantity", i64::from(req.quantity)),
            ],
        );

        match self.command.create_sale(req).await {
            Ok(sale) => {
                self.tracker.success(&tracing_ctx, Method::Post, "Sale created");
                Ok(SaleResponse::from(sale))
            }
            Err(e) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Post,
                    &format!("Failed to create sale: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn update_sale(&self, id: i32, req: &UpdateSaleRequest) -> Result<(), ServiceError> {
        let tracing_ctx = self.tracker.start(
            "UpdateSale",
            vec![
                KeyValue::new("component", "sale"),
                KeyValue::new("sale.id", i64::from(id)),
            ],
        );

        if id != req.sale_id {
            self.tracker.failure(
                &tracing_ctx,
                Method::Put,
                &format!("Path id {id} does not match body id {}", req.sale_id),
            );
            return Err(ServiceError::IdMismatch);
        }

        match self.command.update_sale(req).await {
            Ok(_) => {
                self.tracker.success(&tracing_ctx, Method::Put, "Sale updated");
                Ok(())
            }
            Err(RepositoryError::NotFound) => {
                self.tracker.failure(&tracing_ctx, Method::Put, &format!("Sale {id} not found"));
                Err(ServiceError::NotFound)
            }
            Err(e) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Put,
                    &format!("Failed to update sale {id}: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn delete_sale(&self, id: i32) -> Result<(), ServiceError> {
        let tracing_ctx = self.tracker.start(
            "DeleteSale",
            vec![
                KeyValue::new("component", "sale"),
                KeyValue::new("sale.id", i64::from(id)),
            ],
        );

        match self.command.delete_sale(id).await {
            Ok(()) => {
                self.tracker.success(&tracing_ctx, Method::Delete, "Sale deleted");
                Ok(())
            }
            Err(RepositoryError::NotFound) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Delete,
                    &format!("Sale {id} not found"),
                );
                Err(ServiceError::NotFound)
            }
            Err(e) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Delete,
                    &format!("Failed to delete sale {id}: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
