use crate::{
    abstract_trait::sale::repository::SaleCommandRepositoryTrait,
    domain::requests::sale::{CreateSaleRequest, UpdateSaleRequest},
    model::sale::SaleDetail,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info, warn};

// Write and joined read in one statement.
const INSERT_SALE: &str = r#"
    WITH written AS (
        INSERT INTO sales (quantity, customer_id, product_id)
        VALUES ($1, $2, $3)
        RETURNING sale_id, sale_date, quantity, customer_id, product_id
    )
    SELECT
        w.sale_id, w.sale_date, w.quantity, w.customer_id, w.product_id,
        c.full_name AS customer_name,
        p.product_name,
        p.price
    FROM written w
    LEFT JOIN customers c ON c.customer_id = w.customer_id
    LEFT JOIN products p ON p.product_id = w.product_id
"#;

const UPDATE_SALE: &str = r#"
    WITH written AS (
        UPDATE sales
        SET quantity = $2,
            customer_id = $3,
            product_id = $4
        WHERE sale_id = $1
        RETURNING sale_id, sale_date, quantity, customer_id, product_id
    )
    SELECT
        w.sale_id, w.sale_date, w.quantity, w.customer_id, w.product_id,
        c.full_name AS customer_name,
        p.product_name,
        p.price
    FROM written w
    LEFT JOIN customers c ON c.customer_id = w.customer_id
    LEFT JOIN products p ON p.product_id = w.product_id
"#;

pub struct SaleCommandRepository {
    db: ConnectionPool,
}

impl SaleCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SaleCommandRepositoryTrait for SaleCommandRepository {
    async fn create_sale(&self, req: &CreateSaleRequest) -> Result<SaleDetail, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sale = sqlx::query_as::<_, SaleDetail>(INSERT_SALE)
            .bind(req.quantity)
            .bind(req.customer_id)
            .bind(req.product_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to create sale for customer {} / product {}: {:?}",
                    req.customer_id, req.product_id, err
                );
                RepositoryError::from(err)
            })?;

        info!(
            "✅ Created sale ID {} ({} x product {})",
            sale.sale_id, sale.quantity, sale.product_id
        );
        Ok(sale)
    }

    async fn update_sale(&self, req: &UpdateSaleRequest) -> Result<SaleDetail, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sale = sqlx::query_as::<_, SaleDetail>(UPDATE_SALE)
            .bind(req.sale_id)
            .bind(req.quantity)
            .bind(req.customer_id)
            .bind(req.product_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update sale {}: {:?}", req.sale_id, err);
                RepositoryError::from(err)
            })?
            .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated sale ID {}", sale.sale_id);
        Ok(sale)
    }

    async fn delete_sale(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM sales WHERE sale_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete sale {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            warn!("⚠️ Sale ID {} not found for deletion", id);
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted sale ID {}", id);
        Ok(())
    }
}
