use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{
        requests::{
            pagination::{FindAllQuery, SortKey},
            product::ProductSortBy,
        },
        response::{pagination::PagedResponse, product::ProductResponse},
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
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    tracker: OperationTracker,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_query_service", registry);

        Self {
            query,
            tracker: OperationTracker::new("product-query-service", metrics),
        }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<PagedResponse<ProductResponse>, ServiceError> {
        let page = req.page_request::<ProductSortBy>();

        let tracing_ctx = self.tracker.start(
            "FindAllProducts",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("page.number", i64::from(page.page_number)),
                KeyValue::new("page.size", i64::from(page.page_size)),
                KeyValue::new("sort.by", page.sort.as_param()),
                KeyValue::new("sort.ascending", page.ascending),
            ],
        );

        match self.query.find_all(&page).await {
            Ok((products, total)) => {
                info!("📦 Retrieved {} of {} products", products.len(), total);
                self.tracker.success(&tracing_ctx, Method::Get, "Products retrieved");

                let data = products.into_iter().map(ProductResponse::from).collect();
                Ok(PagedResponse::new(data, &page, total))
            }
            Err(e) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Get,
                    &format!("Failed to retrieve products: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        let tracing_ctx = self.tracker.start(
            "FindProductById",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", i64::from(id)),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(product)) => {
                self.tracker.success(&tracing_ctx, Method::Get, "Product retrieved");
                Ok(ProductResponse::from(product))
            }
            Ok(None) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Get,
                    &format!("Product {id} not found"),
                );
                Err(ServiceError::NotFound)
            }
            Err(e) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Get,
                    &format!("Failed to retrieve product {id}: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
