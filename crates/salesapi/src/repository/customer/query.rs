use crate::{
    abstract_trait::customer::repository::CustomerQueryRepositoryTrait,
    domain::requests::{customer::CustomerSortBy, pagination::PageRequest},
    model::customer::Customer as CustomerModel,
    repository::{OrderBy, push_page},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{Postgres, QueryBuilder};
use tracing::{error, info};

const SELECT_CUSTOMERS: &str = "SELECT c.customer_id, c.full_name, c.email FROM customers c";

impl OrderBy for CustomerSortBy {
    fn order_expr(&self) -> &'static str {
        match self {
            CustomerSortBy::CustomerId => "c.customer_id",
            CustomerSortBy::FullName => "c.full_name",
            CustomerSortBy::Email => "c.email",
        }
    }

    fn tiebreaker() -> &'static str {
        "c.customer_id"
    }
}

#[derive(Clone)]
pub struct CustomerQueryRepository {
    db: ConnectionPool,
}

impl CustomerQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerQueryRepositoryTrait for CustomerQueryRepository {
    async fn find_all(
        &self,
        page: &PageRequest<CustomerSortBy>,
    ) -> Result<(Vec<CustomerModel>, i64), RepositoryError> {
        info!(
            "🔍 Fetching customers page {} (size {}) sorted by {:?}",
            page.page_number, page.page_size, page.sort
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to count customers: {:?}", e);
                RepositoryError::from(e)
            })?;

        let mut builder = QueryBuilder::<Postgres>::new(SELECT_CUSTOMERS);
        push_page(&mut builder, page);

        let customers = builder
            .build_query_as::<CustomerModel>()
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch customers: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok((customers, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CustomerModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, CustomerModel>(&format!("{SELECT_CUSTOMERS} WHERE c.customer_id = $1"))
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch customer {}: {:?}", id, e);
                RepositoryError::from(e)
            })
    }
}
