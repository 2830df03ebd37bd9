//! Repository for the `rides` table.

use async_trait::async_trait;
use ride_core::sort::SortOrder;
use ride_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use super::{order_by_clause, Repository};
use crate::models::ride::Ride;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, driver_id, start_date_time, flexible_start_place, \
    flexible_end_place, price, number_of_seats, description, created_at, deleted, \
    start_place_id, end_place_id";

/// PostgreSQL-backed ride storage.
///
/// Rows flagged `deleted` are returned like any other; deletion through this
/// repository is always a hard delete.
#[derive(Clone)]
pub struct RideRepo {
    pool: PgPool,
}

impl RideRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(conn: &mut PgConnection, ride: &Ride) -> Result<Ride, sqlx::Error> {
        let query = format!(
            "INSERT INTO rides (driver_id, start_date_time, flexible_start_place,
                flexible_end_place, price, number_of_seats, description, created_at,
                deleted, start_place_id, end_place_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ride>(&query)
            .bind(ride.driver_id)
            .bind(ride.start_date_time)
            .bind(ride.flexible_start_place)
            .bind(ride.flexible_end_place)
            .bind(ride.price)
            .bind(ride.number_of_seats)
            .bind(&ride.description)
            .bind(ride.created_at)
            .bind(ride.deleted)
            .bind(ride.start_place.map(|p| p.id))
            .bind(ride.end_place.map(|p| p.id))
            .fetch_one(conn)
            .await
    }

    async fn update(
        conn: &mut PgConnection,
        id: DbId,
        ride: &Ride,
    ) -> Result<Option<Ride>, sqlx::Error> {
        let query = format!(
            "UPDATE rides SET
                driver_id = $2,
                start_date_time = $3,
                flexible_start_place = $4,
                flexible_end_place = $5,
                price = $6,
                number_of_seats = $7,
                description = $8,
                created_at = $9,
                deleted = $10,
                start_place_id = $11,
                end_place_id = $12
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ride>(&query)
            .bind(id)
            .bind(ride.driver_id)
            .bind(ride.start_date_time)
            .bind(ride.flexible_start_place)
            .bind(ride.flexible_end_place)
            .bind(ride.price)
            .bind(ride.number_of_seats)
            .bind(&ride.description)
            .bind(ride.created_at)
            .bind(ride.deleted)
            .bind(ride.start_place.map(|p| p.id))
            .bind(ride.end_place.map(|p| p.id))
            .fetch_optional(conn)
            .await
    }
}

#[async_trait]
impl Repository<Ride> for RideRepo {
    async fn save(&self, ride: Ride) -> Result<Ride, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let updated = match ride.id {
            Some(id) => Self::update(&mut tx, id, &ride).await?,
            None => None,
        };
        if let (Some(id), None) = (ride.id, &updated) {
            tracing::debug!(id, "No ride with this id, inserting a new row");
        }
        let saved = match updated {
            Some(saved) => saved,
            None => Self::insert(&mut tx, &ride).await?,
        };
        tx.commit().await?;
        Ok(saved)
    }

    async fn find_all(&self, sort: &[SortOrder]) -> Result<Vec<Ride>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rides{}", order_by_clause(sort));
        sqlx::query_as::<_, Ride>(&query).fetch_all(&self.pool).await
    }

    async fn find_one(&self, id: DbId) -> Result<Option<Ride>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rides WHERE id = $1");
        sqlx::query_as::<_, Ride>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM rides WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
