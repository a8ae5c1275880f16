use crate::{
    abstract_trait::customer::repository::CustomerCommandRepositoryTrait,
    domain::requests::customer::{CreateCustomerRequest, UpdateCustomerRequest},
    model::customer::Customer as CustomerModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info, warn};

pub struct CustomerCommandRepository {
    db: ConnectionPool,
}

impl CustomerCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerCommandRepositoryTrait for CustomerCommandRepository {
    async fn create_customer(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<CustomerModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let customer = sqlx::query_as::<_, CustomerModel>(
            r#"
            INSERT INTO customers (full_name, email)
            VALUES ($1, $2)
            RETURNING customer_id, full_name, email
            "#,
        )
        .bind(&req.full_name)
        .bind(&req.email)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create customer {}: {:?}", req.email, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created customer ID {}", customer.customer_id);
        Ok(customer)
    }

    async fn update_customer(
        &self,
        req: &UpdateCustomerRequest,
    ) -> Result<CustomerModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let customer = sqlx::query_as::<_, CustomerModel>(
            r#"
            UPDATE customers
            SET full_name = $2,
                email = $3
            WHERE customer_id = $1
            RETURNING customer_id, full_name, email
            "#,
        )
        .bind(req.customer_id)
        .bind(&req.full_name)
        .bind(&req.email)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update customer {}: {:?}", req.customer_id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated customer ID {}", customer.customer_id);
        Ok(customer)
    }

    async fn delete_customer(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let locked: Option<i32> = sqlx::query_scalar(
            "SELECT customer_id FROM customers WHERE customer_id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        if locked.is_none() {
            warn!("⚠️ Customer ID {} not found for deletion", id);
            return Err(RepositoryError::NotFound);
        }

        let referenced: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM sales WHERE customer_id = $1)")
                .bind(id)
                .fetch_one(&mut *tx)
                .await
                .map_err(RepositoryError::from)?;

        if referenced {
            warn!("⚠️ Customer ID {} is referenced by existing sales", id);
            return Err(RepositoryError::Conflict(format!(
                "customer {id} is referenced by existing sales"
            )));
        }

        sqlx::query("DELETE FROM customers WHERE customer_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|err| match RepositoryError::from(err) {
                RepositoryError::ForeignKey(msg) => RepositoryError::Conflict(msg),
                other => {
                    error!("❌ Failed to delete customer {}: {:?}", id, other);
                    other
                }
            })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🗑️ Deleted customer ID {}", id);
        Ok(())
    }
}
