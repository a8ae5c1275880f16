use crate::{
    abstract_trait::sale::repository::SaleQueryRepositoryTrait,
    domain::requests::{pagination::PageRequest, sale::SaleSortBy},
    model::sale::SaleDetail,
    repository::{OrderBy, push_page},
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{Postgres, QueryBuilder};
use tracing::{error, info};

const SELECT_SALE_DETAILS: &str = r#"
    SELECT
        s.sale_id, s.sale_date, s.quantity, s.customer_id, s.product_id,
        c.full_name AS customer_name,
        p.product_name,
        p.price
    FROM sales s
    LEFT JOIN customers c ON c.customer_id = s.customer_id
    LEFT JOIN products p ON p.product_id = s.product_id
"#;

impl OrderBy for SaleSortBy {
    fn order_expr(&self) -> &'static str {
        match self {
            SaleSortBy::SaleId => "s.sale_id",
            SaleSortBy::SaleDate => "s.sale_date",
            SaleSortBy::CustomerName => "c.full_name",
            SaleSortBy::ProductName => "p.product_name",
            SaleSortBy::Quantity => "s.quantity",
            SaleSortBy::TotalPrice => "(s.quantity * p.price)",
        }
    }

    fn tiebreaker() -> &'static str {
        "s.sale_id"
    }
}

#[derive(Clone)]
pub struct SaleQueryRepository {
    db: ConnectionPool,
}

impl SaleQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SaleQueryRepositoryTrait for SaleQueryRepository {
    async fn find_all(
        &self,
        page: &PageRequest<SaleSortBy>,
    ) -> Result<(Vec<SaleDetail>, i64), RepositoryError> {
        info!(
            "🔍 Fetching sales page {} (size {}) sorted by {:?}",
            page.page_number, page.page_size, page.sort
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to count sales: {:?}", e);
                RepositoryError::from(e)
            })?;

        let mut builder = QueryBuilder::<Postgres>::new(SELECT_SALE_DETAILS);
        push_page(&mut builder, page);

        let sales = builder
            .build_query_as::<SaleDetail>()
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch sales: {:?}", e);
                RepositoryError::from(e)
            })?;

        info!("✅ Found {} sales (total {})", sales.len(), total);

        Ok((sales, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<SaleDetail>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sale = sqlx::query_as::<_, SaleDetail>(&format!(
            "{SELECT_SALE_DETAILS} WHERE s.sale_id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch sale {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(sale)
    }

    async fn total_revenue(&self) -> Result<Decimal, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let revenue: Decimal = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(s.quantity * p.price), 0)
            FROM sales s
            JOIN products p ON p.product_id = s.product_id
            "#,
        )
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to compute total revenue: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(revenue)
    }
}
