//! Versioned upgrade of the on-disk history format.
//!
//! Version 1 is the legacy export: a bare JSON array of records, possibly
//! missing the mood scalar and colour that later versions always carry.
//! Version 2 wraps the records in an envelope `{version, records}`. The
//! upgrade runs once at load and normalises every record to the current
//! shape before deserialization.

use serde_json::Value;
use tracing::info;

use crate::types::DreamRecord;
use oneiro_analyze::mood;
use oneiro_core::{Error, Result};

/// Current on-disk format version.
pub const STORE_VERSION: u64 = 2;

/// Upgrade a parsed history file to the current record list.
pub fn upgrade(value: Value) -> Result<Vec<DreamRecord>> {
    let (version, records) = match value {
        // Legacy: bare array, no envelope.
        Value::Array(records) => (1, records),
        Value::Object(mut map) => {
            let version = map
                .get("version")
                .and_then(Value::as_u64)
                .ok_or_else(|| Error::Migration("envelope missing version".into()))?;
            if version > STORE_VERSION {
                return Err(Error::Migration(format!(
                    "history version {version} is newer than supported {STORE_VERSION}"
                )));
            }
            let records = match map.remove("records") {
                Some(Value::Array(records)) => records,
                _ => return Err(Error::Migration("envelope missing records array".into())),
            };
            (version, records)
        }
        _ => return Err(Error::Migration("history root must be array or object".into())),
    };

    if version < STORE_VERSION {
        info!("Upgrading history from version {version} to {STORE_VERSION}");
    }

    records
        .into_iter()
        .map(|record| {
            let normalized = normalize_record(record)?;
            serde_json::from_value(normalized).map_err(Error::from)
        })
        .collect()
}

/// Fill fields that legacy records may lack: a neutral mood scalar and
/// its band colour.
fn normalize_record(mut record: Value) -> Result<Value> {
    let Some(map) = record.as_object_mut() else {
        return Err(Error::Migration("record must be an object".into()));
    };

    if !map.contains_key("moodValue") {
        map.insert("moodValue".into(), Value::from(mood::NEUTRAL));
    }
    let mood_value = map
        .get("moodValue")
        .and_then(Value::as_u64)
        .unwrap_or(mood::NEUTRAL as u64) as u8;

    if !map.contains_key("moodColor") {
        map.insert("moodColor".into(), Value::from(mood::color(mood_value)));
    }

    Ok(record)
}

/// Wrap records in the current envelope for persistence.
pub fn envelope(records: &[DreamRecord]) -> Value {
    serde_json::json!({
        "version": STORE_VERSION,
        "records": records,
    })
}
