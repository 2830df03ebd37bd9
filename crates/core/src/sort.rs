//! Collection ordering requested through `?sort=field[,asc|desc]`.
//!
//! Field names are wire (camelCase) names and are resolved against the
//! entity's [`Entity::SORTABLE`] whitelist, so the resulting column names are
//! safe to splice into an `ORDER BY` clause.

use std::cmp::Ordering;

use crate::entity::Entity;
use crate::error::CoreError;
use crate::types::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// One resolved ordering term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    /// Wire name of the field.
    pub field: &'static str,
    /// Storage column backing the field.
    pub column: &'static str,
    pub direction: Direction,
}

/// Resolve raw `sort` values for entity `E`.
///
/// Each value is a comma-separated list of fields, optionally ending in
/// `asc` or `desc` (case-insensitive), which then applies to every field in
/// that value. Values are applied in the order given.
pub fn parse_sort<E: Entity>(raw: &[&str]) -> Result<Vec<SortOrder>, CoreError> {
    let mut orders = Vec::new();

    for value in raw {
        let mut parts: Vec<&str> = value
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        let direction = match parts.last().map(|p| p.to_ascii_lowercase()) {
            Some(last) if last == "asc" => {
                parts.pop();
                Direction::Asc
            }
            Some(last) if last == "desc" => {
                parts.pop();
                Direction::Desc
            }
            _ => Direction::Asc,
        };

        for field in parts {
            let (field, column) = E::SORTABLE
                .iter()
                .find(|(wire, _)| *wire == field)
                .copied()
                .ok_or_else(|| {
                    CoreError::Validation(format!(
                        "Cannot sort {} by unknown field '{field}'",
                        E::NAME
                    ))
                })?;
            orders.push(SortOrder {
                field,
                column,
                direction,
            });
        }
    }

    Ok(orders)
}

/// A comparable field value used when sorting outside the database.
///
/// `Null` orders after every other value, matching PostgreSQL's default
/// `NULLS LAST` for ascending order (and `NULLS FIRST` when reversed).
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Time(Timestamp),
    Null,
}

impl SortKey {
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Null, SortKey::Null) => Ordering::Equal,
            (SortKey::Null, _) => Ordering::Greater,
            (_, SortKey::Null) => Ordering::Less,
            (SortKey::Int(a), SortKey::Int(b)) => a.cmp(b),
            (SortKey::Float(a), SortKey::Float(b)) => a.total_cmp(b),
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Time(a), SortKey::Time(b)) => a.cmp(b),
            // Fields have a single type, so mixed variants never meet.
            _ => Ordering::Equal,
        }
    }
}

/// Compare two records by a list of sort orders, falling through on ties.
pub fn compare_by<E: Entity>(a: &E, b: &E, orders: &[SortOrder]) -> Ordering {
    orders
        .iter()
        .map(|order| {
            let ord = a.sort_key(order.field).compare(&b.sort_key(order.field));
            match order.direction {
                Direction::Asc => ord,
                Direction::Desc => ord.reverse(),
            }
        })
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl From<i64> for SortKey {
    fn from(v: i64) -> Self {
        SortKey::Int(v)
    }
}

impl From<i32> for SortKey {
    fn from(v: i32) -> Self {
        SortKey::Int(v.into())
    }
}

impl From<f64> for SortKey {
    fn from(v: f64) -> Self {
        SortKey::Float(v)
    }
}

impl From<f32> for SortKey {
    fn from(v: f32) -> Self {
        SortKey::Float(v.into())
    }
}

impl From<bool> for SortKey {
    fn from(v: bool) -> Self {
        SortKey::Bool(v)
    }
}

impl From<String> for SortKey {
    fn from(v: String) -> Self {
        SortKey::Text(v)
    }
}

impl From<Timestamp> for SortKey {
    fn from(v: Timestamp) -> Self {
        SortKey::Time(v)
    }
}

impl<T: Into<SortKey>> From<Option<T>> for SortKey {
    fn from(v: Option<T>) -> Self {
        v.map_or(SortKey::Null, Into::into)
    }
}
