//! Place entity model.

use ride_core::entity::Entity;
use ride_core::sort::SortKey;
use ride_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `places` table.
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: Option<DbId>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub postcode: Option<i32>,
    pub city_name: Option<String>,
}

impl Entity for Place {
    const NAME: &'static str = "place";
    const SORTABLE: &'static [(&'static str, &'static str)] = &[
        ("id", "id"),
        ("latitude", "latitude"),
        ("longitude", "longitude"),
        ("postcode", "postcode"),
        ("cityName", "city_name"),
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
            "latitude" => self.latitude.into(),
            "longitude" => self.longitude.into(),
            "postcode" => self.postcode.into(),
            "cityName" => self.city_name.clone().into(),
            _ => SortKey::Null,
        }
    }
}
