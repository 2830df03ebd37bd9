//! Process-local storage backend.
//!
//! Rows live in a `BTreeMap` behind an async `RwLock`; ids come from a
//! counter that only grows, so a deleted id is never handed out again.
//! References between entities are stored as given and not checked.

use std::collections::BTreeMap;

use async_trait::async_trait;
use ride_core::entity::Entity;
use ride_core::sort::{compare_by, SortOrder};
use ride_core::types::DbId;
use tokio::sync::RwLock;

use super::{Repository, ReservationRepository};
use crate::models::reservation::Reservation;

struct Table<E> {
    last_id: DbId,
    rows: BTreeMap<DbId, E>,
}

/// In-memory [`Repository`] for any entity type.
pub struct MemoryRepo<E> {
    table: RwLock<Table<E>>,
}

impl<E> MemoryRepo<E> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                last_id: 0,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl<E> Default for MemoryRepo<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MemoryRepo<E> {
    async fn save(&self, mut entity: E) -> Result<E, sqlx::Error> {
        let mut table = self.table.write().await;
        let id = match entity.id() {
            Some(id) if table.rows.contains_key(&id) => id,
            _ => {
                table.last_id += 1;
                table.last_id
            }
        };
        entity.set_id(id);
        table.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn find_all(&self, sort: &[SortOrder]) -> Result<Vec<E>, sqlx::Error> {
        let table = self.table.read().await;
        let mut rows: Vec<E> = table.rows.values().cloned().collect();
        if !sort.is_empty() {
            rows.sort_by(|a, b| compare_by(a, b, sort));
        }
        Ok(rows)
    }

    async fn find_one(&self, id: DbId) -> Result<Option<E>, sqlx::Error> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn delete(&self, id: DbId) -> Result<(), sqlx::Error> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl ReservationRepository for MemoryRepo<Reservation> {
    async fn find_by_ride(&self, ride_id: DbId) -> Result<Vec<Reservation>, sqlx::Error> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|r| r.ride_id() == Some(ride_id))
            .cloned()
            .collect())
    }
}
