//! Canonical ordering of map keys.
//!
//! Maps are written with their entries sorted ascending by key. Keys must
//! all belong to one class (nil, boolean, number, raw or array; integers and
//! floats are both numbers) and must not be maps or contain NaN. Anything
//! else has no total order and is rejected with
//! [`MsgPackError::UnorderableKeys`].

use std::cmp::Ordering;
use std::mem;

use crate::{MsgPackError, Value};

/// Totally ordered projection of a key.
///
/// Variant order doubles as the class rank used when array elements of
/// different classes meet.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey<'a> {
    Nil,
    Bool(bool),
    Number(Number),
    Raw(&'a [u8]),
    Array(Vec<SortKey<'a>>),
}

/// A numeric key. Never holds NaN.
#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i128),
    Float(f64),
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(&b),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            (Number::Int(a), Number::Float(b)) => cmp_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => cmp_int_float(b, a).reverse(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

/// Exact comparison of an integer against a non-NaN float.
fn cmp_int_float(i: i128, f: f64) -> Ordering {
    let bound = 2f64.powi(127);
    if f >= bound {
        return Ordering::Less;
    }
    if f < -bound {
        return Ordering::Greater;
    }
    let t = f.trunc();
    match i.cmp(&(t as i128)) {
        Ordering::Equal => 0f64.partial_cmp(&(f - t)).unwrap_or(Ordering::Equal),
        ord => ord,
    }
}

fn project(key: &Value) -> Result<SortKey<'_>, MsgPackError> {
    Ok(match key {
        Value::Nil => SortKey::Nil,
        Value::Bool(b) => SortKey::Bool(*b),
        Value::Integer(i) => SortKey::Number(Number::Int(*i)),
        Value::Float(f) if f.is_nan() => return Err(MsgPackError::UnorderableKeys),
        Value::Float(f) => SortKey::Number(Number::Float(*f)),
        Value::Raw(b) => SortKey::Raw(b),
        Value::Array(items) => {
            SortKey::Array(items.iter().map(project).collect::<Result<_, _>>()?)
        }
        Value::Map(_) => return Err(MsgPackError::UnorderableKeys),
    })
}

/// Compares two keys under the canonical order.
pub fn compare_keys(a: &Value, b: &Value) -> Result<Ordering, MsgPackError> {
    let (ka, kb) = (project(a)?, project(b)?);
    if mem::discriminant(&ka) != mem::discriminant(&kb) {
        return Err(MsgPackError::UnorderableKeys);
    }
    Ok(ka.cmp(&kb))
}

/// Returns the entries of a map in canonical wire order.
///
/// Maps with fewer than two entries are returned as-is without inspecting
/// their keys. Keys that compare equal, `1` and `1.0` included, are
/// rejected.
pub fn sorted_entries(entries: &[(Value, Value)]) -> Result<Vec<&(Value, Value)>, MsgPackError> {
    if entries.len() < 2 {
        return Ok(entries.iter().collect());
    }
    let mut keyed = entries
        .iter()
        .map(|entry| Ok((project(&entry.0)?, entry)))
        .collect::<Result<Vec<_>, MsgPackError>>()
        .inspect_err(|_| tracing::debug!("map key is a map or contains NaN"))?;
    let class = mem::discriminant(&keyed[0].0);
    if keyed.iter().any(|(k, _)| mem::discriminant(k) != class) {
        tracing::debug!(entries = entries.len(), "map keys of mixed kinds");
        return Err(MsgPackError::UnorderableKeys);
    }
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    if keyed.windows(2).any(|pair| pair[0].0 == pair[1].0) {
        tracing::debug!(entries = entries.len(), "duplicate map key");
        return Err(MsgPackError::DuplicateMapKey);
    }
    Ok(keyed.into_iter().map(|(_, entry)| entry).collect())
}
