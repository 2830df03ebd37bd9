//! Generic handlers for the `/api/{collection}` resources.
//!
//! ```text
//! POST   /api/{collection}        create (400 + alert if the body has an id)
//! PUT    /api/{collection}        update (falls back to create without an id)
//! GET    /api/{collection}        list, optional ?sort=field[,asc|desc]
//! GET    /api/{collection}/{id}   get_by_id (404 if absent)
//! DELETE /api/{collection}/{id}   delete (200 whether or not it existed)
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::header::{HeaderValue, LOCATION};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ride_core::error::CoreError;
use ride_core::sort::parse_sort;
use ride_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::handlers::Resource;
use crate::query::sort_values;
use crate::state::AppState;

/// POST /api/{collection}
pub async fn create<E: Resource>(
    State(state): State<AppState>,
    body: Result<Json<E>, JsonRejection>,
) -> AppResult<Response> {
    let Json(entity) = body?;
    tracing::debug!(entity = E::NAME, record = ?entity, "REST request to save");
    entity.validate()?;
    if entity.id().is_some() {
        return Err(AppError::Alert {
            headers: state.alerts.failure(E::NAME, "idexists"),
            source: CoreError::IdExists { entity: E::NAME },
        });
    }
    insert(&state, entity).await
}

/// PUT /api/{collection}
pub async fn update<E: Resource>(
    State(state): State<AppState>,
    body: Result<Json<E>, JsonRejection>,
) -> AppResult<Response> {
    let Json(entity) = body?;
    tracing::debug!(entity = E::NAME, record = ?entity, "REST request to update");
    entity.validate()?;
    if entity.id().is_none() {
        return insert(&state, entity).await;
    }

    let saved = E::service(&state).save(entity).await?;
    let id = assigned_id(&saved)?;
    Ok((StatusCode::OK, state.alerts.updated(E::NAME, id), Json(saved)).into_response())
}

/// GET /api/{collection}
pub async fn list<E: Resource>(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<E>>> {
    tracing::debug!(entity = E::NAME, "REST request to get all");
    let sort = parse_sort::<E>(&sort_values(&pairs))?;
    let entities = E::service(&state).find_all(&sort).await?;
    Ok(Json(entities))
}

/// GET /api/{collection}/{id}
pub async fn get_by_id<E: Resource>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<E>> {
    tracing::debug!(entity = E::NAME, id, "REST request to get");
    let entity = E::service(&state)
        .find_one(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: E::NAME,
            id,
        }))?;
    Ok(Json(entity))
}

/// DELETE /api/{collection}/{id}
pub async fn delete<E: Resource>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    tracing::debug!(entity = E::NAME, id, "REST request to delete");
    E::service(&state).delete(id).await?;
    Ok((StatusCode::OK, state.alerts.deleted(E::NAME, id)).into_response())
}

/// Save a new entity and answer 201 with its location.
async fn insert<E: Resource>(state: &AppState, entity: E) -> AppResult<Response> {
    let saved = E::service(state).save(entity).await?;
    let id = assigned_id(&saved)?;

    let mut headers = state.alerts.created(E::NAME, id);
    let location = format!("/api/{}/{id}", E::COLLECTION);
    headers.insert(
        LOCATION,
        HeaderValue::try_from(location).map_err(|e| AppError::InternalError(e.to_string()))?,
    );

    Ok((StatusCode::CREATED, headers, Json(saved)).into_response())
}

fn assigned_id<E: Resource>(entity: &E) -> AppResult<DbId> {
    entity.id().ok_or_else(|| {
        AppError::Core(CoreError::Internal(format!(
            "storage returned a {} without an id",
            E::NAME
        )))
    })
}
