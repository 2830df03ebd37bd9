//! Car entity model.

use ride_core::entity::Entity;
use ride_core::sort::SortKey;
use ride_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `cars` table.
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: Option<DbId>,
    pub user_id: Option<i64>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
}

impl Entity for Car {
    const NAME: &'static str = "car";
    const SORTABLE: &'static [(&'static str, &'static str)] = &[
        ("id", "id"),
        ("userId", "user_id"),
        ("brand", "brand"),
        ("model", "model"),
        ("color", "color"),
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
            "userId" => self.user_id.into(),
            "brand" => self.brand.clone().into(),
            "model" => self.model.clone().into(),
            "color" => self.color.clone().into(),
            _ => SortKey::Null,
        }
    }
}
