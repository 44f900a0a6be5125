//! Log record construction
//!
//! A record is a flat JSON object built in a fixed order: the `level` field
//! first, then fields from the injected context, then the caller's
//! arguments. Object arguments merge their fields (later keys win, including
//! over the injected context); everything else is joined into `msg`.

use super::log_level::LogLevel;
use super::value::LogValue;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Context injection callback, invoked at most once per emitted record.
///
/// The result is merged into the record only when it is object-shaped;
/// any other value is ignored. Injection runs only for records that pass
/// level filtering, so it may be comparatively expensive (timestamp or
/// trace-context capture).
pub type InjectFn = Arc<dyn Fn() -> Value + Send + Sync>;

/// Build one structured record from injected context and caller arguments.
pub fn build_record(
    level: LogLevel,
    items: &[LogValue],
    inject: Option<&InjectFn>,
) -> Map<String, Value> {
    let mut record = Map::new();
    record.insert("level".to_string(), Value::String(level.to_str().to_string()));

    if let Some(inject) = inject {
        if let Value::Object(fields) = inject() {
            merge_fields(&mut record, &fields);
        }
    }

    let mut parts: Vec<String> = Vec::new();
    for item in items {
        if item.is_falsy() {
            continue;
        }
        match item.as_object() {
            Some(fields) => merge_fields(&mut record, fields),
            None => parts.push(item.to_string()),
        }
    }

    if !parts.is_empty() {
        record.insert("msg".to_string(), Value::String(parts.join(" ")));
    }

    record
}

fn merge_fields(record: &mut Map<String, Value>, fields: &Map<String, Value>) {
    for (key, value) in fields {
        // `level` is fixed by the caller and cannot be overwritten
        if key == "level" {
            continue;
        }
        record.insert(key.clone(), value.clone());
    }
}
