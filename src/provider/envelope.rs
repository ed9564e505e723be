//! Response envelope normalization.
//!
//! Provider responses may wrap the payload under a `data` key or return the
//! bare array/object. Anything else is malformed and normalizes to an empty
//! collection (or `None` for single-record endpoints) so one bad response
//! never takes down more than its own collection.

use crate::error::{Error, Result};
use crate::state::Collection;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Extract a record list from a raw payload.
pub fn items<T: DeserializeOwned>(collection: Collection, payload: Value) -> Vec<T> {
    match try_items(collection, payload) {
        Ok(items) => items,
        Err(error) => {
            warn!(%collection, %error, "normalizing malformed payload to empty collection");
            Vec::new()
        }
    }
}

/// Extract a single record from a raw payload.
///
/// Single-record endpoints always use the `data` envelope; a missing or
/// null `data` value means the provider had nothing to report.
pub fn record<T: DeserializeOwned>(collection: Collection, payload: Value) -> Option<T> {
    let inner = match payload {
        Value::Object(mut map) => map.remove("data")?,
        other => other,
    };
    if inner.is_null() {
        return None;
    }
    match serde_json::from_value(inner) {
        Ok(record) => Some(record),
        Err(error) => {
            warn!(%collection, %error, "normalizing malformed payload to empty record");
            None
        }
    }
}

fn try_items<T: DeserializeOwned>(collection: Collection, payload: Value) -> Result<Vec<T>> {
    let body = match payload {
        Value::Object(mut map) => map
            .remove("data")
            .ok_or_else(|| Error::malformed(collection, "object without data key"))?,
        other => other,
    };
    match body {
        Value::Array(_) => {
            serde_json::from_value(body).map_err(|e| Error::malformed(collection, e.to_string()))
        }
        Value::Null => Ok(Vec::new()),
        _ => Err(Error::malformed(collection, "expected an array of records")),
    }
}
