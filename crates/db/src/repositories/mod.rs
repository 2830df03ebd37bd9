//! Persistence gateways, one per entity.
//!
//! Every entity is stored through the [`Repository`] trait. Two backends
//! implement it: the PostgreSQL repositories in this module and the
//! process-local [`MemoryRepo`].

use async_trait::async_trait;
use ride_core::sort::SortOrder;
use ride_core::types::DbId;

use crate::models::reservation::Reservation;

pub mod car_repo;
pub mod memory;
pub mod place_repo;
pub mod reservation_repo;
pub mod ride_repo;

pub use car_repo::CarRepo;
pub use memory::MemoryRepo;
pub use place_repo::PlaceRepo;
pub use reservation_repo::ReservationRepo;
pub use ride_repo::RideRepo;

/// Save, look up, list, and delete records of one entity type.
#[async_trait]
pub trait Repository<E>: Send + Sync {
    /// Insert when `entity` has no id, otherwise replace the stored row.
    ///
    /// An id that matches no stored row is treated as new: the record is
    /// inserted and receives a fresh id.
    async fn save(&self, entity: E) -> Result<E, sqlx::Error>;

    /// All records, in storage order unless `sort` is non-empty.
    async fn find_all(&self, sort: &[SortOrder]) -> Result<Vec<E>, sqlx::Error>;

    async fn find_one(&self, id: DbId) -> Result<Option<E>, sqlx::Error>;

    /// Remove the record. Deleting an unknown id is not an error.
    async fn delete(&self, id: DbId) -> Result<(), sqlx::Error>;
}

/// Reservation storage with the lookup that replaces a ride's back-reference.
#[async_trait]
pub trait ReservationRepository: Repository<Reservation> {
    /// Reservations whose `ride` points at `ride_id`, ordered by id.
    async fn find_by_ride(&self, ride_id: DbId) -> Result<Vec<Reservation>, sqlx::Error>;
}

/// Render an ` ORDER BY ...` clause, or an empty string when `sort` is empty.
///
/// Column names come from [`ride_core::entity::Entity::SORTABLE`], never from request input.
pub(crate) fn order_by_clause(sort: &[SortOrder]) -> String {
    if sort.is_empty() {
        return String::new();
    }
    let terms: Vec<String> = sort
        .iter()
        .map(|o| format!("{} {}", o.column, o.direction.as_sql()))
        .collect();
    format!(" ORDER BY {}", terms.join(", "))
}
