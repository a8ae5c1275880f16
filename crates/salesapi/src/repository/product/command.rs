use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info, warn};

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (product_name, price)
            VALUES ($1, $2)
            RETURNING product_id, product_name, price
            "#,
        )
        .bind(&req.product_name)
        .bind(req.price)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", req.product_name, err);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created product ID {} ({})",
            product.product_id, product.product_name
        );
        Ok(product)
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET product_name = $2,
                price = $3
            WHERE product_id = $1
            RETURNING product_id, product_name, price
            "#,
        )
        .bind(req.product_id)
        .bind(&req.product_name)
        .bind(req.price)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product {}: {:?}", req.product_id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated product ID {}", product.product_id);
        Ok(product)
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // Locking the row blocks concurrent sale inserts that reference it.
        let locked: Option<i32> = sqlx::query_scalar(
            "SELECT product_id FROM products WHERE product_id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        if locked.is_none() {
            warn!("⚠️ Product ID {} not found for deletion", id);
            return Err(RepositoryError::NotFound);
        }

        let referenced: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM sales WHERE product_id = $1)")
                .bind(id)
                .fetch_one(&mut *tx)
                .await
                .map_err(RepositoryError::from)?;

        if referenced {
            warn!("⚠️ Product ID {} is referenced by existing sales", id);
            return Err(RepositoryError::Conflict(format!(
                "product {id} is referenced by existing sales"
            )));
        }

        sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|err| match RepositoryError::from(err) {
                RepositoryError::ForeignKey(msg) => RepositoryError::Conflict(msg),
                other => {
                    error!("❌ Failed to delete product {}: {:?}", id, other);
                    other
                }
            })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🗑️ Deleted product ID {}", id);
        Ok(())
    }
}
