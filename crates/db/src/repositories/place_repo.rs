//! Repository for the `places` table.

use async_trait::async_trait;
use ride_core::sort::SortOrder;
use ride_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use super::{order_by_clause, Repository};
use crate::models::place::Place;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, latitude, longitude, postcode, city_name";

/// PostgreSQL-backed place storage.
#[derive(Clone)]
pub struct PlaceRepo {
    pool: PgPool,
}

impl PlaceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(conn: &mut PgConnection, place: &Place) -> Result<Place, sqlx::Error> {
        let query = format!(
            "INSERT INTO places (latitude, longitude, postcode, city_name)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(place.latitude)
            .bind(place.longitude)
            .bind(place.postcode)
            .bind(&place.city_name)
            .fetch_one(conn)
            .await
    }

    async fn update(
        conn: &mut PgConnection,
        id: DbId,
        place: &Place,
    ) -> Result<Option<Place>, sqlx::Error> {
        let query = format!(
            "UPDATE places SET latitude = $2, longitude = $3, postcode = $4, city_name = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .bind(place.latitude)
            .bind(place.longitude)
            .bind(place.postcode)
            .bind(&place.city_name)
            .fetch_optional(conn)
            .await
    }
}

#[async_trait]
impl Repository<Place> for PlaceRepo {
    async fn save(&self, place: Place) -> Result<Place, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let updated = match place.id {
            Some(id) => Self::update(&mut tx, id, &place).await?,
            None => None,
        };
        if let (Some(id), None) = (place.id, &updated) {
            tracing::debug!(id, "No place with this id, inserting a new row");
        }
        let saved = match updated {
            Some(saved) => saved,
            None => Self::insert(&mut tx, &place).await?,
        };
        tx.commit().await?;
        Ok(saved)
    }

    async fn find_all(&self, sort: &[SortOrder]) -> Result<Vec<Place>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM places{}", order_by_clause(sort));
        sqlx::query_as::<_, Place>(&query).fetch_all(&self.pool).await
    }

    async fn find_one(&self, id: DbId) -> Result<Option<Place>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM places WHERE id = $1");
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM places WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
