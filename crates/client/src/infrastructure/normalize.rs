//! Catalog API payload normalization.
//!
//! The catalog API is loose about field names and nesting (`base_stat` vs
//! `value` vs `val`, `name` vs `stat.name`). This module is the only place that
//! reads raw JSON; everything it returns is a strict domain type.
//!
//! Every function here is total: malformed or missing input degrades to absent
//! or empty fields, never to an error.

use bestiary_domain::{CatalogEntry, CreatureRecord, SpecialAbility, StatBlock, StatKind};
use serde_json::Value;

/// Accepted stat value fields, highest priority first.
const STAT_VALUE_ALIASES: [&str; 3] = ["base_stat", "value", "val"];

/// Map a loosely-shaped stat array onto the six canonical stats.
///
/// Entries with an unknown name or a non-finite value are skipped. When a stat
/// appears more than once, the last usable entry wins.
pub fn normalize_stats(raw: &Value) -> StatBlock {
    let mut block = StatBlock::new();
    let Some(entries) = raw.as_array() else {
        return block;
    };

    for entry in entries {
        let Some(kind) = stat_kind(entry) else {
            continue;
        };
        if let Some(value) = coerce_number(first_present(entry, &STAT_VALUE_ALIASES)) {
            block.set(kind, value);
        }
    }

    block
}

/// Map a loosely-shaped creature payload onto a [`CreatureRecord`].
pub fn normalize_creature(raw: &Value) -> CreatureRecord {
    let types = raw
        .get("types")
        .and_then(Value::as_array)
        .map(|types| {
            types
                .iter()
                .map(|t| coerce_string(present(t, "name")).to_uppercase())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    let special = raw.get("special").and_then(|special| {
        SpecialAbility::from_parts(
            coerce_string(present(special, "name")),
            coerce_string(present(special, "description")),
        )
    });

    CreatureRecord::new(coerce_string(present(raw, "name")))
        .with_id(coerce_integer(present(raw, "id")))
        .with_weight(coerce_number(present(raw, "weight")))
        .with_height(coerce_number(present(raw, "height")))
        .with_types(types)
        .with_stats(normalize_stats(raw.get("stats").unwrap_or(&Value::Null)))
        .with_special(special)
}

/// Project a catalog payload fragment onto the browsing shape.
pub fn catalog_entry(raw: &Value) -> CatalogEntry {
    CatalogEntry::new(
        coerce_integer(present(raw, "id")),
        coerce_string(present(raw, "name")),
    )
}

fn stat_kind(entry: &Value) -> Option<StatKind> {
    let name = present(entry, "name")
        .or_else(|| entry.get("stat").and_then(|stat| present(stat, "name")));
    coerce_string(name).to_lowercase().parse().ok()
}

/// A field that exists and is not `null`.
fn present<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| !v.is_null())
}

/// The first alias that is present. A present but unusable value does not
/// fall through to later aliases.
fn first_present<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| present(value, key))
}

fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn coerce_number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn coerce_integer(value: Option<&Value>) -> Option<i64> {
    if let Some(Value::Number(n)) = value {
        if let Some(int) = n.as_i64() {
            return Some(int);
        }
    }
    coerce_number(value)
        .filter(|n| n.fract() == 0.0 && *n >= i64::MIN as f64 && *n < i64::MAX as f64)
        .map(|n| n as i64)
}
