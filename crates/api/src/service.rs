//! Per-entity services between the HTTP handlers and the repositories.
//!
//! A service adds no business rules. It logs each call and forwards it to
//! the repository, which runs every write inside its own transaction.

use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::Arc;

use ride_core::entity::Entity;
use ride_core::sort::SortOrder;
use ride_core::types::DbId;
use ride_db::models::car::Car;
use ride_db::models::place::Place;
use ride_db::models::reservation::Reservation;
use ride_db::models::ride::Ride;
use ride_db::repositories::{Repository, ReservationRepository};

/// Delegates one entity's CRUD calls to its repository.
pub struct EntityService<E, R: ?Sized = dyn Repository<E>> {
    repo: Arc<R>,
    _entity: PhantomData<fn() -> E>,
}

pub type CarService = EntityService<Car>;
pub type PlaceService = EntityService<Place>;
pub type RideService = EntityService<Ride>;
pub type ReservationService = EntityService<Reservation, dyn ReservationRepository>;

impl<E, R: ?Sized> Clone for EntityService<E, R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            _entity: PhantomData,
        }
    }
}

impl<E, R> EntityService<E, R>
where
    E: Entity + Debug,
    R: Repository<E> + ?Sized,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            _entity: PhantomData,
        }
    }

    /// Persist `entity`, returning it with its id populated.
    pub async fn save(&self, entity: E) -> Result<E, sqlx::Error> {
        tracing::debug!(entity = E::NAME, record = ?entity, "Request to save");
        self.repo.save(entity).await
    }

    pub async fn find_all(&self, sort: &[SortOrder]) -> Result<Vec<E>, sqlx::Error> {
        tracing::debug!(entity = E::NAME, ?sort, "Request to get all");
        self.repo.find_all(sort).await
    }

    pub async fn find_one(&self, id: DbId) -> Result<Option<E>, sqlx::Error> {
        tracing::debug!(entity = E::NAME, id, "Request to get");
        self.repo.find_one(id).await
    }

    pub async fn delete(&self, id: DbId) -> Result<(), sqlx::Error> {
        tracing::debug!(entity = E::NAME, id, "Request to delete");
        self.repo.delete(id).await
    }
}

impl ReservationService {
    /// Reservations that reference the ride `ride_id`.
    pub async fn find_by_ride(&self, ride_id: DbId) -> Result<Vec<Reservation>, sqlx::Error> {
        tracing::debug!(ride_id, "Request to get reservations of ride");
        self.repo.find_by_ride(ride_id).await
    }
}
