//! Key-presence merge helpers
//!
//! Every helper follows the same rule: the slot changes only when `json`
//! contains the key with a usable value. Absent keys keep the previous
//! value, and so does a present-but-`null` value (the server nulls out
//! fields it has no data for; a stub must not lose what it already knows).

use super::types::{Image, Resource};
use crate::types::{JsonObject, JsonValue};
use chrono::{NaiveDate, NaiveDateTime};

/// Timestamp format used by the API for `date_added` / `date_last_updated`
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn merge_string(slot: &mut Option<String>, json: &JsonObject, key: &str) {
    if let Some(value) = json.get(key).and_then(JsonValue::as_str) {
        *slot = Some(value.to_string());
    }
}

pub(crate) fn merge_u64(slot: &mut Option<u64>, json: &JsonObject, key: &str) {
    if let Some(value) = json.get(key).and_then(JsonValue::as_u64) {
        *slot = Some(value);
    }
}

pub(crate) fn merge_datetime(slot: &mut Option<NaiveDateTime>, json: &JsonObject, key: &str) {
    if let Some(text) = json.get(key).and_then(JsonValue::as_str) {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, DATETIME_FORMAT) {
            *slot = Some(parsed);
        }
    }
}

pub(crate) fn merge_date(slot: &mut Option<NaiveDate>, json: &JsonObject, key: &str) {
    if let Some(text) = json.get(key).and_then(JsonValue::as_str) {
        if let Ok(parsed) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            *slot = Some(parsed);
        }
    }
}

pub(crate) fn merge_image(slot: &mut Option<Image>, json: &JsonObject, key: &str) {
    if let Some(fragment) = json.get(key).and_then(JsonValue::as_object) {
        match slot {
            Some(image) => image.update(fragment),
            None => *slot = Some(Image::from_json(fragment)),
        }
    }
}

/// Merge a nested single stub (e.g. the `game` fragment inside a character
/// payload). An existing stub is enriched rather than replaced.
pub(crate) fn merge_stub<T: Resource>(slot: &mut Option<Box<T>>, json: &JsonObject, key: &str) {
    if let Some(fragment) = json.get(key).and_then(JsonValue::as_object) {
        match slot {
            Some(stub) => stub.update(fragment),
            None => *slot = Some(Box::new(T::from_json(fragment))),
        }
    }
}

/// Replace a relationship list wholesale when its key is present.
///
/// Lists are not element-merged; the server always sends the complete
/// relationship set when it sends the key at all.
pub(crate) fn merge_stub_list<T: Resource>(list: &mut Vec<T>, json: &JsonObject, key: &str) {
    if let Some(items) = json.get(key).and_then(JsonValue::as_array) {
        *list = items
            .iter()
            .filter_map(JsonValue::as_object)
            .map(T::from_json)
            .collect();
    }
}
