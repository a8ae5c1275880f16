use crate::{
    abstract_trait::customer::{
        repository::DynCustomerQueryRepository, service::CustomerQueryServiceTrait,
    },
    domain::{
        requests::{
            pagination::{FindAllQuery, SortKey},
            customer::CustomerSortBy,
        },
        response::{pagination::PagedResponse, customer::CustomerResponse},
    },
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, OperationTracker},
};
use tracing::info;

#[derive(Clone)]
pub struct CustomerQueryService {
    query: DynCustomerQueryRepository,
    tracker: OperationTracker,
}

impl CustomerQueryService {
    pub fn new(query: DynCustomerQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("customer_query_service", registry);

        Self {
            query,
            tracker: OperationTracker::new("customer-query-service", metrics),
        }
    }
}

#[async_trait]
impl CustomerQueryServiceTrait for CustomerQueryService {
    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<PagedResponse<CustomerResponse>, ServiceError> {
        let page = req.page_request::<CustomerSortBy>();

        let tracing_ctx = self.tracker.start(
            "FindAllCustomers",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("page.number", i64::from(page.page_number)),
                KeyValue::new("page.size", i64::from(page.page_size)),
                KeyValue::new("sort.by", page.sort.as_param()),
                KeyValue::new("sort.ascending", page.ascending),
            ],
        );

        match self.query.find_all(&page).await {
            Ok((customers, total)) => {
                info!("👥 Retrieved {} of {} customers", customers.len(), total);
                self.tracker.success(&tracing_ctx, Method::Get, "Customers retrieved");

                let data = customers.into_iter().map(CustomerResponse::from).collect();
                Ok(PagedResponse::new(data, &page, total))
            }
            Err(e) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Get,
                    &format!("Failed to retrieve customers: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<CustomerResponse, ServiceError> {
        let tracing_ctx = self.tracker.start(
            "FindCustomerById",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("customer.id", i64::from(id)),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(customer)) => {
                self.tracker.success(&tracing_ctx, Method::Get, "Customer retrieved");
                Ok(CustomerResponse::from(customer))
            }
            Ok(None) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Get,
                    &format!("Customer {id} not found"),
                );
                Err(ServiceError::NotFound)
            }
            Err(e) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Get,
                    &format!("Failed to retrieve customer {id}: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
