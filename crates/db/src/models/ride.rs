//! Ride entity model.

use ride_core::entity::{Entity, EntityRef};
use ride_core::sort::SortKey;
use ride_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use validator::Validate;

/// A row from the `rides` table.
///
/// `deleted` is stored and returned as-is; no query filters on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    pub id: Option<DbId>,
    pub driver_id: Option<i64>,
    pub start_date_time: Option<Timestamp>,
    pub flexible_start_place: Option<i32>,
    pub flexible_end_place: Option<i32>,
    pub price: Option<f32>,
    #[validate(range(min = 1, max = 7))]
    pub number_of_seats: Option<i32>,
    pub description: Option<String>,
    pub created_at: Option<Timestamp>,
    pub deleted: Option<bool>,
    pub start_place: Option<EntityRef>,
    pub end_place: Option<EntityRef>,
}

impl<'r> FromRow<'r, PgRow> for Ride {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            driver_id: row.try_get("driver_id")?,
            start_date_time: row.try_get("start_date_time")?,
            flexible_start_place: row.try_get("flexible_start_place")?,
            flexible_end_place: row.try_get("flexible_end_place")?,
            price: row.try_get("price")?,
            number_of_seats: row.try_get("number_of_seats")?,
            description: row.try_get("description")?,
            created_at: row.try_get("created_at")?,
            deleted: row.try_get("deleted")?,
            start_place: row
                .try_get::<Option<DbId>, _>("start_place_id")?
                .map(EntityRef::new),
            end_place: row
                .try_get::<Option<DbId>, _>("end_place_id")?
                .map(EntityRef::new),
        })
    }
}

impl Entity for Ride {
    const NAME: &'static str = "ride";
    const SORTABLE: &'static [(&'static str, &'static str)] = &[
        ("id", "id"),
        ("driverId", "driver_id"),
        ("startDateTime", "start_date_time"),
        ("flexibleStartPlace", "flexible_start_place"),
        ("flexibleEndPlace", "flexible_end_place"),
        ("price", "price"),
        ("numberOfSeats", "number_of_seats"),
        ("description", "description"),
        ("createdAt", "created_at"),
        ("deleted", "deleted"),
        ("startPlace", "start_place_id"),
        ("endPlace", "end_place_id"),
    ];

    fn id(&self) -> Option<DbId> {
        self.id
    }

    fn set_id(&mut self, id: DbId) {
        self.id = Some(id);
    }

    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "id" => self.id.into(),
            "driverId" => self.driver_id.into(),
            "startDateTime" => self.start_date_time.into(),
            "flexibleStartPlace" => self.flexible_start_place.into(),
            "flexibleEndPlace" => self.flexible_end_place.into(),
            "price" => self.price.into(),
            "numberOfSeats" => self.number_of_seats.into(),
            "description" => self.description.clone().into(),
            "createdAt" => self.created_at.into(),
            "deleted" => self.deleted.into(),
            "startPlace" => self.start_place.map(|p| p.id).into(),
            "endPlace" => self.end_place.map(|p| p.id).into(),
            _ => SortKey::Null,
        }
    }
}
