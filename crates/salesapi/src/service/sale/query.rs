use crate::{
    abstract_trait::sale::{repository::DynSaleQueryRepository, service::SaleQueryServiceTrait},
    domain::{
        requests::{
            pagination::{FindAllQuery, SortKey},
            sale::SaleSortBy,
        },
        response::{pagination::PagedResponse, sale::SaleResponse},
    },
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, OperationTracker},
};
use tracing::info;

#[derive(Clone)]
pub struct SaleQueryService {
    query: DynSaleQueryRepository,
    tracker: OperationTracker,
}

impl SaleQueryService {
    pub fn new(query: DynSaleQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("sale_query_service", registry);

        Self {
            query,
            tracker: OperationTracker::new("sale-query-service", metrics),
        }
    }
}

#[async_trait]
impl SaleQueryServiceTrait for SaleQueryService {
    /// Pages the joined sales and attaches the revenue over all of them.
    async fn find_all(
        &self,
        req: &FindAllQuery,
    ) -> Result<PagedResponse<SaleResponse>, ServiceError> {
        let page = req.page_request::<SaleSortBy>();

        let tracing_ctx = self.tracker.start(
            "FindAllSales",
            vec![
                KeyValue::new("component", "sale"),
                KeyValue::new("page.number", i64::from(page.page_number)),
                KeyValue::new("page.size", i64::from(page.page_size)),
                KeyValue::new("sort.by", page.sort.as_param()),
                KeyValue::new("sort.ascending", page.ascending),
            ],
        );

        let result = async {
            let (sales, total) = self.query.find_all(&page).await?;
            let revenue = self.query.total_revenue().await?;
            Ok::<_, RepositoryError>((sales, total, revenue))
        }
        .await;

        match result {
            Ok((sales, total, revenue)) => {
                info!(
                    "🧾 Retrieved {} of {} sales, revenue {}",
                    sales.len(),
                    total,
                    revenue
                );
                self.tracker.success(&tracing_ctx, Method::Get, "Sales retrieved");

                let data = sales.into_iter().map(SaleResponse::from).collect();
                Ok(PagedResponse::new(data, &page, total).with_revenue(revenue))
            }
            Err(e) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Get,
                    &format!("Failed to retrieve sales: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<SaleResponse, ServiceError> {
        let tracing_ctx = self.tracker.start(
            "FindSaleById",
            vec![
                KeyValue::new("component", "sale"),
                KeyValue::new("sale.id", i64::from(id)),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(sale)) => {
                self.tracker.success(&tracing_ctx, Method::Get, "Sale retrieved");
                Ok(SaleResponse::from(sale))
            }
            Ok(None) => {
                self.tracker.failure(&tracing_ctx, Method::Get, &format!("Sale {id} not found"));
                Err(ServiceError::NotFound)
            }
            Err(e) => {
                self.tracker.failure(
                    &tracing_ctx,
                    Method::Get,
                    &format!("Failed to retrieve sale {id}: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
