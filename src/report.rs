//! Path translation and report rendering: filters timestamp noise out of a
//! delta, rewrites structural paths into facility-level labels, and emits
//! the sectioned text report.

use crate::config::ReportConfig;
use crate::diff::Delta;
use crate::path::{Path, Step};
use serde_json::Value;
use std::collections::HashMap;

const NO_DIFFERENCES: &str = "no differences found (time fields excluded)";

const ITEMS_KEY: &str = "Items";
const NAME_KEY: &str = "carParkFacilityNameTc";
const NESTED_LIST_KEY: &str = "parkingInfoList";

fn is_noise(path: &Path, keywords: &[String]) -> bool {
    path.steps().iter().any(|step| match step {
        Step::Key(k) => {
            let k = k.to_lowercase();
            keywords.iter().any(|w| k.contains(&w.to_lowercase()))
        }
        Step::Index(_) => false,
    })
}

fn facility_name(index: usize, item: &Value) -> Option<String> {
    match item.get(NAME_KEY) {
        Some(Value::String(name)) if !name.is_empty() => return Some(name.clone()),
        Some(Value::String(_)) | None => {}
        Some(other) => eprintln!(
            "Warning: Items[{}].{} has unexpected shape ({}), falling back",
            index,
            NAME_KEY,
            other
        ),
    }
    match item
        .get(NESTED_LIST_KEY)
        .and_then(|list| list.get(0))
        .and_then(|entry| entry.get(NAME_KEY))
    {
        Some(Value::String(name)) if !name.is_empty() => Some(name.clone()),
        Some(Value::String(_)) | None => None,
        Some(other) => {
            eprintln!(
                "Warning: Items[{}].{}[0].{} has unexpected shape ({}), falling back",
                index,
                NESTED_LIST_KEY,
                NAME_KEY,
                other
            );
            None
        }
    }
}

/// Map each top-level Items index to a display label, pulled from the old
/// snapshot. Missing names fall back to a synthetic `Items[i]` label.
pub fn build_name_lookup(old: &Value) -> HashMap<usize, String> {
    let mut lookup = HashMap::new();
    let items = match old.get(ITEMS_KEY).and_then(Value::as_array) {
        Some(items) => items,
        None => return lookup,
    };
    for (i, item) in items.iter().enumerate() {
        let label = facility_name(i, item).unwrap_or_else(|| format!("Items[{}]", i));
        lookup.insert(i, label);
    }
    lookup
}

fn segment_text(step: &Step) -> String {
    match step {
        Step::Key(k) => k.clone(),
        Step::Index(i) => i.to_string(),
    }
}

/// Rewrite a structural path into a dotted domain label: the Items index
/// becomes the facility name, the parkingInfoList container is elided, and
/// glossary segments get their parenthetical annotation.
pub fn translate_path(path: &Path, lookup: &HashMap<usize, String>, glossary: &HashMap<String, String>) -> String {
    let steps = path.steps();
    let mut segments: Vec<String> = Vec::new();

    let remainder = match steps {
        [Step::Key(items), Step::Index(i), rest @ ..] if items == ITEMS_KEY => {
            let label = lookup
                .get(i)
                .cloned()
                .unwrap_or_else(|| format!("Items[{}]", i));
            segments.push(label);
            rest
        }
        _ => steps,
    };

    for step in remainder {
        if matches!(step, Step::Key(k) if k == NESTED_LIST_KEY) {
            continue;
        }
        segments.push(segment_text(step));
    }

    let annotated: Vec<String> = segments
        .into_iter()
        .map(|seg| match glossary.get(&seg) {
            Some(note) => format!("{}{}", seg, note),
            None => seg,
        })
        .collect();
    annotated.join(".")
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render the filtered, translated delta as a sectioned plain-text report.
/// Pure: the caller owns any display or file writing.
pub fn render(delta: &Delta, old: &Value, cfg: &ReportConfig) -> String {
    let lookup = build_name_lookup(old);
    let keep = |path: &Path| !is_noise(path, &cfg.noise_keywords);
    let label = |path: &Path| translate_path(path, &lookup, &cfg.glossary);

    let value_changes: Vec<_> = delta.value_changes.iter().filter(|c| keep(&c.path)).collect();
    let additions: Vec<_> = delta.additions.iter().filter(|e| keep(&e.path)).collect();
    let removals: Vec<_> = delta.removals.iter().filter(|e| keep(&e.path)).collect();
    let type_changes: Vec<_> = delta.type_changes.iter().filter(|c| keep(&c.path)).collect();

    if value_changes.is_empty() && additions.is_empty() && removals.is_empty() && type_changes.is_empty() {
        return NO_DIFFERENCES.to_string();
    }

    let mut lines: Vec<String> = Vec::new();

    if !value_changes.is_empty() {
        lines.push("=== Value Changes ===".to_string());
        for change in value_changes {
            lines.push(format!("- {}", label(&change.path)));
            lines.push(format!("    old: {}", display_value(&change.old)));
            lines.push(format!("    new: {}", display_value(&change.new)));
        }
        lines.push(String::new());
    }

    if !additions.is_empty() {
        lines.push("=== Additions ===".to_string());
        for entry in additions {
            lines.push(format!("- {}", label(&entry.path)));
        }
        lines.push(String::new());
    }

    if !removals.is_empty() {
        lines.push("=== Removals ===".to_string());
        for entry in removals {
            lines.push(format!("- {}", label(&entry.path)));
        }
        lines.push(String::new());
    }

    if !type_changes.is_empty() {
        lines.push("=== Type Changes ===".to_string());
        for change in type_changes {
            lines.push(format!("- {}", label(&change.path)));
            lines.push(format!(
                "    old: {} {}",
                change.old_kind,
                display_value(&change.old)
            ));
            lines.push(format!(
                "    new: {} {}",
                change.new_kind,
                display_value(&change.new)
            ));
        }
        lines.push(String::new());
    }

    while lines.last().map(String::is_empty).unwrap_or(false) {
        lines.pop();
    }
    lines.join("\n")
}
