//! Reservation entity model.
//!
//! A reservation owns its link to a ride through `ride` (the `ride_id`
//! column). Rides keep no back-reference; use
//! [`ReservationRepository::find_by_ride`](crate::repositories::ReservationRepository::find_by_ride).

use ride_core::entity::{Entity, EntityRef};
use ride_core::sort::SortKey;
use ride_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use validator::Validate;

/// A row from the `reservations` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: Option<DbId>,
    pub passenger_id: Option<i64>,
    pub confirmed: Option<bool>,
    pub cancled: Option<bool>,
    pub ride: Option<EntityRef>,
}

impl Reservation {
    pub fn ride_id(&self) -> Option<DbId> {
        self.ride.map(|r| r.id)
    }
}

impl<'r> FromRow<'r, PgRow> for Reservation {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            passenger_id: row.try_get("passenger_id")?,
            confirmed: row.try_get("confirmed")?,
            cancled: row.try_get("cancled")?,
            ride: row.try_get::<Option<DbId>, _>("ride_id")?.map(EntityRef::new),
        })
    }
}

impl Entity for Reservation {
    const NAME: &'static str = "reservation";
    const SORTABLE: &'static [(&'static str, &'static str)] = &[
        ("id", "id"),
        ("passengerId", "passenger_id"),
        ("confirmed", "confirmed"),
        ("cancled", "cancled"),
        ("ride", "ride_id"),
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
            "passengerId" => self.passenger_id.into(),
            "confirmed" => self.confirmed.into(),
            "cancled" => self.cancled.into(),
            "ride" => self.ride_id().into(),
            _ => SortKey::Null,
        }
    }
}
