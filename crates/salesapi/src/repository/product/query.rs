use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    domain::requests::{pagination::PageRequest, product::ProductSortBy},
    model::product::Product as ProductModel,
    repository::{OrderBy, push_page},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{Postgres, QueryBuilder};
use tracing::{error, info};

const SELECT_PRODUCTS: &str = "SELECT p.product_id, p.product_name, p.price FROM products p";

impl OrderBy for ProductSortBy {
    fn order_expr(&self) -> &'static str {
        match self {
            ProductSortBy::ProductId => "p.product_id",
            ProductSortBy::ProductName => "p.product_name",
            ProductSortBy::Price => "p.price",
        }
    }

    fn tiebreaker() -> &'static str {
        "p.product_id"
    }
}

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        page: &PageRequest<ProductSortBy>,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
        info!(
            "🔍 Fetching products page {} (size {}) sorted by {:?}",
            page.page_number, page.page_size, page.sort
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to count products: {:?}", e);
                RepositoryError::from(e)
            })?;

        let mut builder = QueryBuilder::<Postgres>::new(SELECT_PRODUCTS);
        push_page(&mut builder, page);

        let products = builder
            .build_query_as::<ProductModel>()
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products: {:?}", e);
                RepositoryError::from(e)
            })?;

        info!("✅ Found {} products (total {})", products.len(), total);

        Ok((products, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(&format!(
            "{SELECT_PRODUCTS} WHERE p.product_id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(product)
    }
}
