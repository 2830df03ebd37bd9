//! Ride-specific handlers beyond plain CRUD.

use axum::extract::{Path, State};
use axum::Json;
use ride_core::error::CoreError;
use ride_core::types::DbId;
use ride_db::models::reservation::Reservation;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/rides/{id}/reservations
///
/// 404 if the ride does not exist; an empty list if nobody reserved it.
pub async fn list_reservations(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Reservation>>> {
    tracing::debug!(ride_id = id, "REST request to get reservations of ride");
    if state.rides.find_one(id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound { entity: "ride", id }));
    }
    let reservations = state.reservations.find_by_ride(id).await?;
    Ok(Json(reservations))
}
