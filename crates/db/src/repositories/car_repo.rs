//! Repository for the `cars` table.

use async_trait::async_trait;
use ride_core::sort::SortOrder;
use ride_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use super::{order_by_clause, Repository};
use crate::models::car::Car;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, brand, model, color";

/// PostgreSQL-backed car storage.
#[derive(Clone)]
pub struct CarRepo {
    pool: PgPool,
}

impl CarRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(conn: &mut PgConnection, car: &Car) -> Result<Car, sqlx::Error> {
        let query = format!(
            "INSERT INTO cars (user_id, brand, model, color)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(car.user_id)
            .bind(&car.brand)
            .bind(&car.model)
            .bind(&car.color)
            .fetch_one(conn)
            .await
    }

    async fn update(
        conn: &mut PgConnection,
        id: DbId,
        car: &Car,
    ) -> Result<Option<Car>, sqlx::Error> {
        let query = format!(
            "UPDATE cars SET user_id = $2, brand = $3, model = $4, color = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .bind(car.user_id)
            .bind(&car.brand)
            .bind(&car.model)
            .bind(&car.color)
            .fetch_optional(conn)
            .await
    }
}

#[async_trait]
impl Repository<Car> for CarRepo {
    async fn save(&self, car: Car) -> Result<Car, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let updated = match car.id {
            Some(id) => Self::update(&mut tx, id, &car).await?,
            None => None,
        };
        if let (Some(id), None) = (car.id, &updated) {
            tracing::debug!(id, "No car with this id, inserting a new row");
        }
        let saved = match updated {
            Some(saved) => saved,
            None => Self::insert(&mut tx, &car).await?,
        };
        tx.commit().await?;
        Ok(saved)
    }

    async fn find_all(&self, sort: &[SortOrder]) -> Result<Vec<Car>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cars{}", order_by_clause(sort));
        sqlx::query_as::<_, Car>(&query).fetch_all(&self.pool).await
    }

    async fn find_one(&self, id: DbId) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cars WHERE id = $1");
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
