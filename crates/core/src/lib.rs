//! Domain building blocks shared by the storage and HTTP layers.

pub mod entity;
pub mod error;
pub mod sort;
pub mod types;
