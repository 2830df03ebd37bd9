//! Ride-sharing API server library.
//!
//! Exposes the core building blocks (config, state, services, error
//! handling, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod alert;
pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod router;
pub mod routes;
pub mod service;
pub mod state;
