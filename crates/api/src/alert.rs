//! Client-facing alert headers.
//!
//! Successful writes carry `X-<app>-alert: <app>.<entity>.<action>` plus
//! `X-<app>-params: <id>`. Rejected requests carry
//! `X-<app>-error: error.<key>` plus `X-<app>-params: <entity>`.
//! Header names are case-insensitive on the wire and stored lower-cased.

use axum::http::header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderName};
use ride_core::types::DbId;

/// Pre-built alert header names for one application prefix.
#[derive(Debug, Clone)]
pub struct AlertHeaders {
    app_name: String,
    alert: HeaderName,
    error: HeaderName,
    params: HeaderName,
}

impl AlertHeaders {
    /// Fails if `app_name` cannot appear in a header name.
    pub fn new(app_name: &str) -> Result<Self, InvalidHeaderName> {
        let name =
            |suffix: &str| HeaderName::from_bytes(format!("x-{app_name}-{suffix}").as_bytes());
        Ok(Self {
            app_name: app_name.to_string(),
            alert: name("alert")?,
            error: name("error")?,
            params: name("params")?,
        })
    }

    /// The three header names, for CORS `expose_headers`.
    pub fn names(&self) -> [HeaderName; 3] {
        [self.alert.clone(), self.error.clone(), self.params.clone()]
    }

    pub fn created(&self, entity: &str, id: DbId) -> HeaderMap {
        self.entity_alert(entity, "created", id)
    }

    pub fn updated(&self, entity: &str, id: DbId) -> HeaderMap {
        self.entity_alert(entity, "updated", id)
    }

    pub fn deleted(&self, entity: &str, id: DbId) -> HeaderMap {
        self.entity_alert(entity, "deleted", id)
    }

    /// Headers for a request rejected with `error_key` (e.g. `idexists`).
    pub fn failure(&self, entity: &str, error_key: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        insert(&mut headers, &self.error, format!("error.{error_key}"));
        insert(&mut headers, &self.params, entity.to_string());
        headers
    }

    fn entity_alert(&self, entity: &str, action: &str, id: DbId) -> HeaderMap {
        let mut headers = HeaderMap::new();
        insert(
            &mut headers,
            &self.alert,
            format!("{}.{entity}.{action}", self.app_name),
        );
        insert(&mut headers, &self.params, id.to_string());
        headers
    }
}

/// Values are built from the header-safe app name, entity names, and ids;
/// anything else is skipped rather than failing the request.
fn insert(headers: &mut HeaderMap, name: &HeaderName, value: String) {
    if let Ok(value) = HeaderValue::try_from(value) {
        headers.insert(name.clone(), value);
    }
}
