use std::sync::Arc;

use axum::http::header::InvalidHeaderName;
use ride_db::models::car::Car;
use ride_db::models::place::Place;
use ride_db::models::reservation::Reservation;
use ride_db::models::ride::Ride;
use ride_db::repositories::{CarRepo, MemoryRepo, PlaceRepo, ReservationRepo, RideRepo};

use crate::alert::AlertHeaders;
use crate::config::ServerConfig;
use crate::service::{CarService, PlaceService, ReservationService, RideService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, absent when running on in-memory storage.
    pub pool: Option<ride_db::DbPool>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Alert header names derived from `config.app_name`.
    pub alerts: Arc<AlertHeaders>,
    pub cars: CarService,
    pub places: PlaceService,
    pub reservations: ReservationService,
    pub rides: RideService,
}

impl AppState {
    /// Build state backed by PostgreSQL repositories.
    pub fn postgres(
        pool: ride_db::DbPool,
        config: ServerConfig,
    ) -> Result<Self, InvalidHeaderName> {
        Ok(Self {
            cars: CarService::new(Arc::new(CarRepo::new(pool.clone()))),
            places: PlaceService::new(Arc::new(PlaceRepo::new(pool.clone()))),
            reservations: ReservationService::new(Arc::new(ReservationRepo::new(pool.clone()))),
            rides: RideService::new(Arc::new(RideRepo::new(pool.clone()))),
            alerts: Arc::new(AlertHeaders::new(&config.app_name)?),
            config: Arc::new(config),
            pool: Some(pool),
        })
    }

    /// Build state backed by empty in-memory repositories.
    pub fn in_memory(config: ServerConfig) -> Result<Self, InvalidHeaderName> {
        Ok(Self {
            cars: CarService::new(Arc::new(MemoryRepo::<Car>::new())),
            places: PlaceService::new(Arc::new(MemoryRepo::<Place>::new())),
            reservations: ReservationService::new(Arc::new(MemoryRepo::<Reservation>::new())),
            rides: RideService::new(Arc::new(MemoryRepo::<Ride>::new())),
            alerts: Arc::new(AlertHeaders::new(&config.app_name)?),
            config: Arc::new(config),
            pool: None,
        })
    }
}
