//! Identity contract shared by every persisted record.
//!
//! Identity is an explicit `Option<DbId>`: `None` until storage assigns one on
//! first save. Structural equality (`PartialEq`) is left to the models; use
//! [`Entity::same_identity`] when the question is "is this the same row".

use serde::{Deserialize, Serialize};

use crate::sort::SortKey;
use crate::types::DbId;

/// A record that storage can save, look up, and delete by id.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Lower-case singular name, e.g. `ride`. Used in alert headers and errors.
    const NAME: &'static str;

    /// Sortable fields as `(wire name, column name)` pairs.
    const SORTABLE: &'static [(&'static str, &'static str)];

    fn id(&self) -> Option<DbId>;

    fn set_id(&mut self, id: DbId);

    /// Value of a sortable field, keyed by its wire name.
    ///
    /// Unknown names yield [`SortKey::Null`].
    fn sort_key(&self, field: &str) -> SortKey;

    /// `true` only when both records carry the same assigned id.
    ///
    /// Two unsaved records never share an identity, not even with themselves.
    fn same_identity(&self, other: &Self) -> bool {
        matches!((self.id(), other.id()), (Some(a), Some(b)) if a == b)
    }
}

/// A foreign-key reference to another entity, serialized as `{"id": n}`.
///
/// Deserialization accepts any object carrying an `id`; other fields (for
/// example a fully embedded ride) are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: DbId,
}

impl EntityRef {
    pub fn new(id: DbId) -> Self {
        Self { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Sample {
        id: Option<DbId>,
    }

    impl Entity for Sample {
        const NAME: &'static str = "sample";
        const SORTABLE: &'static [(&'static str, &'static str)] = &[("id", "id")];

        fn id(&self) -> Option<DbId> {
            self.id
        }

        fn set_id(&mut self, id: DbId) {
            self.id = Some(id);
        }

        fn sort_key(&self, field: &str) -> SortKey {
            match field {
                "id" => self.id.into(),
                _ => SortKey::Null,
            }
        }
    }

    #[test]
    fn unsaved_records_never_share_identity() {
        let a = Sample { id: None };
        assert!(!a.same_identity(&a.clone()));
        assert!(!a.same_identity(&Sample { id: Some(1) }));
    }

    #[test]
    fn saved_records_compare_by_id() {
        let mut a = Sample { id: None };
        a.set_id(7);
        assert!(a.same_identity(&Sample { id: Some(7) }));
        assert!(!a.same_identity(&Sample { id: Some(8) }));
    }

    #[test]
    fn entity_ref_ignores_embedded_fields() {
        let r: EntityRef =
            serde_json::from_str(r#"{"id": 3, "driverId": 1, "price": 2.5}"#).unwrap();
        assert_eq!(r, EntityRef::new(3));
        assert_eq!(serde_json::to_string(&r).unwrap(), r#"{"id":3}"#);
    }
}
