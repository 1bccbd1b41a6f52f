//! Structural diff engine: walks two snapshot trees in lockstep and
//! classifies every differing location as a value change, addition,
//! removal, or type change.

use crate::path::{excluded, Path, Pattern};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Sequence,
    Mapping,
}

impl ValueKind {
    pub fn of(value: &Value) -> ValueKind {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Sequence,
            Value::Object(_) => ValueKind::Mapping,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Sequence => "sequence",
            ValueKind::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueChange {
    pub path: Path,
    pub old: Value,
    pub new: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeChange {
    pub path: Path,
    pub old_kind: ValueKind,
    pub new_kind: ValueKind,
    pub old: Value,
    pub new: Value,
}

/// One side only: the value is the one carried by whichever tree has the
/// location (new for additions, old for removals).
#[derive(Debug, Clone, PartialEq)]
pub struct SideEntry {
    pub path: Path,
    pub value: Value,
}

/// Classified delta between two trees, grouped by change kind. A given
/// path lands in at most one group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Delta {
    pub value_changes: Vec<ValueChange>,
    pub additions: Vec<SideEntry>,
    pub removals: Vec<SideEntry>,
    pub type_changes: Vec<TypeChange>,
}

impl Delta {
    pub fn is_empty(&self) -> bool {
        self.value_changes.is_empty()
            && self.additions.is_empty()
            && self.removals.is_empty()
            && self.type_changes.is_empty()
    }
}

/// Compare `old` against `new`, skipping any location matched by an
/// exclusion pattern before classification. Inputs are never mutated and
/// well-formed trees never fail.
pub fn compute_delta(old: &Value, new: &Value, exclude: &[Pattern]) -> Delta {
    let mut delta = Delta::default();
    walk(old, new, Path::root(), exclude, &mut delta);
    delta
}

fn walk(old: &Value, new: &Value, path: Path, exclude: &[Pattern], delta: &mut Delta) {
    if excluded(&path, exclude) {
        return;
    }

    match (old, new) {
        (Value::Object(a), Value::Object(b)) => {
            for (k, v) in b.iter() {
                if !a.contains_key(k) {
                    record_added(delta, path.push_key(k), v, exclude);
                }
            }
            for (k, v) in a.iter() {
                if !b.contains_key(k) {
                    record_removed(delta, path.push_key(k), v, exclude);
                }
            }
            for (k, v1) in a.iter() {
                if let Some(v2) = b.get(k) {
                    walk(v1, v2, path.push_key(k), exclude, delta);
                }
            }
        }

        // Sequences compare strictly by position. A mid-sequence insertion
        // therefore shows up as changes at every later index; downstream
        // consumers rely on that shape.
        (Value::Array(a), Value::Array(b)) => {
            let shared = a.len().min(b.len());
            for i in 0..shared {
                walk(&a[i], &b[i], path.push_index(i), exclude, delta);
            }
            for (i, v) in b.iter().enumerate().skip(shared) {
                record_added(delta, path.push_index(i), v, exclude);
            }
            for (i, v) in a.iter().enumerate().skip(shared) {
                record_removed(delta, path.push_index(i), v, exclude);
            }
        }

        (a, b) => {
            let old_kind = ValueKind::of(a);
            let new_kind = ValueKind::of(b);
            if old_kind != new_kind {
                delta.type_changes.push(TypeChange {
                    path,
                    old_kind,
                    new_kind,
                    old: a.clone(),
                    new: b.clone(),
                });
            } else if a != b {
                delta.value_changes.push(ValueChange {
                    path,
                    old: a.clone(),
                    new: b.clone(),
                });
            }
        }
    }
}

fn record_added(delta: &mut Delta, path: Path, value: &Value, exclude: &[Pattern]) {
    if !excluded(&path, exclude) {
        delta.additions.push(SideEntry {
            path,
            value: value.clone(),
        });
    }
}

fn record_removed(delta: &mut Delta, path: Path, value: &Value, exclude: &[Pattern]) {
    if !excluded(&path, exclude) {
        delta.removals.push(SideEntry {
            path,
            value: value.clone(),
        });
    }
}
