//! HTTP handlers.
//!
//! The four entity resources share the generic handlers in [`crud`]; each
//! entity plugs in through a [`Resource`] impl naming its collection path and
//! service.

use std::fmt::Debug;

use ride_core::entity::Entity;
use ride_db::models::car::Car;
use ride_db::models::place::Place;
use ride_db::models::reservation::Reservation;
use ride_db::models::ride::Ride;
use ride_db::repositories::{Repository, ReservationRepository};
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::service::EntityService;
use crate::state::AppState;

pub mod crud;
pub mod ride;

/// An entity exposed as a CRUD collection under `/api`.
pub trait Resource: Entity + Debug + Serialize + DeserializeOwned + Validate {
    /// Collection path segment, e.g. `rides`.
    const COLLECTION: &'static str;

    /// Repository type behind this entity's service.
    type Repo: Repository<Self> + ?Sized;

    fn service(state: &AppState) -> &EntityService<Self, Self::Repo>;
}

impl Resource for Car {
    const COLLECTION: &'static str = "cars";
    type Repo = dyn Repository<Car>;

    fn service(state: &AppState) -> &EntityService<Self, Self::Repo> {
        &state.cars
    }
}

impl Resource for Place {
    const COLLECTION: &'static str = "places";
    type Repo = dyn Repository<Place>;

    fn service(state: &AppState) -> &EntityService<Self, Self::Repo> {
        &state.places
    }
}

impl Resource for Reservation {
    const COLLECTION: &'static str = "reservations";
    type Repo = dyn ReservationRepository;

    fn service(state: &AppState) -> &EntityService<Self, Self::Repo> {
        &state.reservations
    }
}

impl Resource for Ride {
    const COLLECTION: &'static str = "rides";
    type Repo = dyn Repository<Ride>;

    fn service(state: &AppState) -> &EntityService<Self, Self::Repo> {
        &state.rides
    }
}
