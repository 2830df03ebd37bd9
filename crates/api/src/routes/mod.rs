pub mod health;

use axum::routing::get;
use axum::Router;
use ride_db::models::car::Car;
use ride_db::models::place::Place;
use ride_db::models::reservation::Reservation;
use ride_db::models::ride::Ride;

use crate::handlers::{self, crud, Resource};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /cars                          list, create, update
/// /cars/{id}                     get, delete
///
/// /places                        list, create, update
/// /places/{id}                   get, delete
///
/// /reservations                  list, create, update
/// /reservations/{id}             get, delete
///
/// /rides                         list, create, update
/// /rides/{id}                    get, delete
/// /rides/{id}/reservations       reservations referencing the ride
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/cars", resource::<Car>())
        .nest("/places", resource::<Place>())
        .nest("/reservations", resource::<Reservation>())
        .nest(
            "/rides",
            resource::<Ride>().route(
                "/{id}/reservations",
                get(handlers::ride::list_reservations),
            ),
        )
}

/// CRUD routes for one entity, mounted at its collection path.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PUT    /        -> update
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn resource<E: Resource>() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(crud::list::<E>)
                .post(crud::create::<E>)
                .put(crud::update::<E>),
        )
        .route("/{id}", get(crud::get_by_id::<E>).delete(crud::delete::<E>))
}
