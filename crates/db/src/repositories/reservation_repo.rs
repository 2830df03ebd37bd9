//! Repository for the `reservations` table.

use async_trait::async_trait;
use ride_core::sort::SortOrder;
use ride_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use super::{order_by_clause, Repository, ReservationRepository};
use crate::models::reservation::Reservation;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, passenger_id, confirmed, cancled, ride_id";

/// PostgreSQL-backed reservation storage.
#[derive(Clone)]
pub struct ReservationRepo {
    pool: PgPool,
}

impl ReservationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(
        conn: &mut PgConnection,
        reservation: &Reservation,
    ) -> Result<Reservation, sqlx::Error> {
        let query = format!(
            "INSERT INTO reservations (passenger_id, confirmed, cancled, ride_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(reservation.passenger_id)
            .bind(reservation.confirmed)
            .bind(reservation.cancled)
            .bind(reservation.ride_id())
            .fetch_one(conn)
            .await
    }

    async fn update(
        conn: &mut PgConnection,
        id: DbId,
        reservation: &Reservation,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!(
            "UPDATE reservations SET
                passenger_id = $2,
                confirmed = $3,
                cancled = $4,
                ride_id = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .bind(reservation.passenger_id)
            .bind(reservation.confirmed)
            .bind(reservation.cancled)
            .bind(reservation.ride_id())
            .fetch_optional(conn)
            .await
    }
}

#[async_trait]
impl Repository<Reservation> for ReservationRepo {
    async fn save(&self, reservation: Reservation) -> Result<Reservation, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let updated = match reservation.id {
            Some(id) => Self::update(&mut tx, id, &reservation).await?,
            None => None,
        };
        if let (Some(id), None) = (reservation.id, &updated) {
            tracing::debug!(id, "No reservation with this id, inserting a new row");
        }
        let saved = match updated {
            Some(saved) => saved,
            None => Self::insert(&mut tx, &reservation).await?,
        };
        tx.commit().await?;
        Ok(saved)
    }

    async fn find_all(&self, sort: &[SortOrder]) -> Result<Vec<Reservation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reservations{}",
            order_by_clause(sort)
        );
        sqlx::query_as::<_, Reservation>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_one(&self, id: DbId) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ReservationRepository for ReservationRepo {
    async fn find_by_ride(&self, ride_id: DbId) -> Result<Vec<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE ride_id = $1 ORDER BY id");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(ride_id)
            .fetch_all(&self.pool)
            .await
    }
}
